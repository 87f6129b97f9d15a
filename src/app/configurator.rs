//! Turns invoker options into a ready-to-use invocation handle.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{
    AppError, InvocationRequest, InvocationResult, InvokerSettings, MavenInvokerOptions,
};
use crate::ports::{InvocationRunner, InvocationStreams, InvokerLogger, OutputSink};

/// A configured invoker.
///
/// Holds the resolved settings plus the caller's sinks and logger. Immutable
/// once built; clone it to share across threads or templates.
#[derive(Clone)]
pub struct InvocationHandle {
    settings: InvokerSettings,
    output: Arc<dyn OutputSink>,
    error: Arc<dyn OutputSink>,
    logger: Arc<dyn InvokerLogger>,
}

impl InvocationHandle {
    pub fn settings(&self) -> &InvokerSettings {
        &self.settings
    }

    pub fn local_repository(&self) -> &Path {
        &self.settings.local_repository
    }

    pub fn maven_executable(&self) -> Option<&Path> {
        self.settings.maven_executable.as_deref()
    }

    pub fn maven_home(&self) -> Option<&Path> {
        self.settings.maven_home.as_deref()
    }

    pub fn logger(&self) -> &dyn InvokerLogger {
        self.logger.as_ref()
    }

    /// Run `request` through `runner` with this handle's settings and streams.
    pub fn execute<R: InvocationRunner + ?Sized>(
        &self,
        runner: &R,
        request: &InvocationRequest,
    ) -> Result<InvocationResult, AppError> {
        let streams = InvocationStreams {
            output: self.output.as_ref(),
            error: self.error.as_ref(),
            logger: self.logger.as_ref(),
        };
        runner.run(&self.settings, request, streams)
    }
}

impl fmt::Debug for InvocationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationHandle").field("settings", &self.settings).finish_non_exhaustive()
    }
}

/// Build an invocation handle from `options`.
///
/// The local repository is created when missing: an explicit path
/// non-recursively, the `<home>/.m2/repository` default with its parent.
/// `home` is only consulted for the default. Relative repository, executable
/// and home paths are anchored to the current directory. Nothing is executed here.
pub fn configure<H>(
    options: &MavenInvokerOptions,
    output: Arc<dyn OutputSink>,
    error: Arc<dyn OutputSink>,
    logger: Arc<dyn InvokerLogger>,
    home: H,
) -> Result<InvocationHandle, AppError>
where
    H: FnOnce() -> Result<PathBuf, AppError>,
{
    let local_repository = match options.local_repository() {
        Some(path) => {
            let dir = anchor(Path::new(path))?;
            ensure_directory(&dir, false, logger.as_ref())?;
            dir
        }
        None => {
            let dir = default_local_repository(&home()?);
            ensure_directory(&dir, true, logger.as_ref())?;
            dir
        }
    };

    let settings = InvokerSettings {
        local_repository,
        maven_executable: options.maven_executable().map(anchor_executable).transpose()?,
        maven_home: options.maven_home().map(|home| anchor(Path::new(home))).transpose()?,
    };
    logger.debug(&format!("Using local repository {}", settings.local_repository.display()));

    Ok(InvocationHandle { settings, output, error, logger })
}

/// `<home>/.m2/repository`.
pub fn default_local_repository(home: &Path) -> PathBuf {
    home.join(".m2").join("repository")
}

/// Bare command names stay as-is for `PATH` lookup; any other relative path
/// is made absolute so it does not follow the child's working directory.
fn anchor_executable(executable: &str) -> Result<PathBuf, AppError> {
    let path = Path::new(executable);
    let bare = path.components().count() == 1 && !executable.starts_with('.');
    if bare { Ok(path.to_path_buf()) } else { anchor(path) }
}

fn anchor(path: &Path) -> Result<PathBuf, AppError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::path::absolute(path).map_err(|e| {
        AppError::configuration(format!("Cannot resolve '{}': {}", path.display(), e))
    })
}

fn ensure_directory(
    dir: &Path,
    recursive: bool,
    logger: &dyn InvokerLogger,
) -> Result<(), AppError> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(AppError::configuration(format!(
            "Local repository '{}' exists but is not a directory",
            dir.display()
        )));
    }

    let created = if recursive { fs::create_dir_all(dir) } else { fs::create_dir(dir) };
    match created {
        Ok(()) => {
            logger.info(&format!("Created local repository directory {}", dir.display()));
            Ok(())
        }
        // Lost a race with a concurrent creator of the same path.
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(AppError::configuration(format!(
            "Cannot create local repository '{}': {}",
            dir.display(),
            e
        ))),
    }
}
