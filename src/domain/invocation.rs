//! Invocation requests, results, and resolved invoker settings.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Settings recorded on a configured invoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokerSettings {
    /// Local repository directory. Exists once configuration succeeded.
    pub local_repository: PathBuf,
    pub maven_executable: Option<PathBuf>,
    pub maven_home: Option<PathBuf>,
}

/// A single Maven execution request.
///
/// Built by value: `InvocationRequest::new().goal("clean").property("skipTests", "true")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    base_directory: Option<PathBuf>,
    goals: Vec<String>,
    properties: Vec<(String, String)>,
    arguments: Vec<String>,
    batch_mode: bool,
    update_snapshots: bool,
    non_plugin_updates: bool,
}

impl Default for InvocationRequest {
    fn default() -> Self {
        Self {
            base_directory: None,
            goals: Vec::new(),
            properties: Vec::new(),
            arguments: Vec::new(),
            batch_mode: true,
            update_snapshots: false,
            non_plugin_updates: false,
        }
    }
}

impl InvocationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Working directory of the Maven process.
    pub fn base_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_directory = Some(dir.into());
        self
    }

    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goals.push(goal.into());
        self
    }

    /// Append a `-Dkey=value` system property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    /// Append raw arguments, passed to Maven verbatim after the goals.
    pub fn arguments(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.arguments.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn batch_mode(mut self, enabled: bool) -> Self {
        self.batch_mode = enabled;
        self
    }

    pub fn update_snapshots(mut self, enabled: bool) -> Self {
        self.update_snapshots = enabled;
        self
    }

    pub fn non_plugin_updates(mut self, enabled: bool) -> Self {
        self.non_plugin_updates = enabled;
        self
    }

    pub fn working_directory(&self) -> Option<&Path> {
        self.base_directory.as_deref()
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    pub fn raw_arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Full Maven argument list for this request against `local_repository`.
    ///
    /// Order: flags, local repository, properties, goals, raw arguments.
    pub fn command_line_args(&self, local_repository: &Path) -> Vec<String> {
        let mut args = Vec::new();
        if self.batch_mode {
            args.push("-B".to_string());
        }
        if self.update_snapshots {
            args.push("-U".to_string());
        }
        if self.non_plugin_updates {
            args.push("-npu".to_string());
        }
        args.push(format!("-Dmaven.repo.local={}", local_repository.display()));
        args.extend(self.properties.iter().map(|(key, value)| format!("-D{key}={value}")));
        args.extend(self.goals.iter().cloned());
        args.extend(self.arguments.iter().cloned());
        args
    }
}

/// Outcome of a Maven execution.
///
/// The exit code is reported as-is; callers decide what it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvocationResult {
    exit_code: i32,
}

impl InvocationResult {
    /// Exit code reported when the process ended without one (e.g. killed by a signal).
    pub const NO_EXIT_CODE: i32 = -1;

    pub fn new(exit_code: i32) -> Self {
        Self { exit_code }
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}
