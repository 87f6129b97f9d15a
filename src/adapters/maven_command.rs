use std::env;
use std::ffi::OsString;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use crate::domain::{AppError, InvocationRequest, InvocationResult, InvokerSettings};
use crate::ports::{InvocationRunner, InvocationStreams, OutputSink};

#[cfg(windows)]
const MVN: &str = "mvn.cmd";
#[cfg(not(windows))]
const MVN: &str = "mvn";

/// Environment variables consulted for a Maven installation, in order.
const HOME_VARS: [&str; 2] = ["MAVEN_HOME", "M2_HOME"];

/// Runs Maven as a child process and streams its output line by line.
#[derive(Debug, Clone, Default)]
pub struct MavenCommandRunner;

impl MavenCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl InvocationRunner for MavenCommandRunner {
    fn run(
        &self,
        settings: &InvokerSettings,
        request: &InvocationRequest,
        streams: InvocationStreams<'_>,
    ) -> Result<InvocationResult, AppError> {
        let executable = resolve_executable(settings, |key| env::var_os(key));
        let args = request.command_line_args(&settings.local_repository);
        let display = format!("{} {}", executable.display(), args.join(" "));

        let mut command = Command::new(&executable);
        command.args(&args).stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
        if let Some(dir) = request.working_directory() {
            command.current_dir(dir);
        }
        if let Some(home) = &settings.maven_home {
            command.env("MAVEN_HOME", home);
        }

        streams.logger.debug(&format!("Executing: {display}"));
        let mut child = command
            .spawn()
            .map_err(|e| AppError::Invocation { command: display.clone(), details: e.to_string() })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let (output, error) = (streams.output, streams.error);
        thread::scope(|scope| {
            if let Some(stdout) = stdout {
                scope.spawn(move || pump(stdout, output));
            }
            if let Some(stderr) = stderr {
                scope.spawn(move || pump(stderr, error));
            }
        });

        let status = child
            .wait()
            .map_err(|e| AppError::Invocation { command: display, details: e.to_string() })?;
        let exit_code = status.code().unwrap_or(InvocationResult::NO_EXIT_CODE);
        streams.logger.info(&format!("Maven exited with code {exit_code}"));

        Ok(InvocationResult::new(exit_code))
    }
}

/// Pick the Maven executable for `settings`.
///
/// Explicit executable, then `<maven_home>/bin`, then the installation named by
/// `MAVEN_HOME`/`M2_HOME`, then `mvn` from `PATH`.
pub fn resolve_executable<F>(settings: &InvokerSettings, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(executable) = &settings.maven_executable {
        return executable.clone();
    }
    if let Some(home) = &settings.maven_home {
        return bin_in(home);
    }
    HOME_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
        .map(|home| bin_in(Path::new(&home)))
        .unwrap_or_else(|| PathBuf::from(MVN))
}

fn bin_in(home: &Path) -> PathBuf {
    home.join("bin").join(MVN)
}

fn pump<R: Read>(reader: R, sink: &dyn OutputSink) {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                sink.consume_line(line.trim_end_matches(['\n', '\r']));
            }
        }
    }
}
