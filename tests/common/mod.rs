//! Shared testing utilities for mvn-invoke CLI tests.

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated `$HOME`, work directory and fake `mvn`.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    home: PathBuf,
    work_dir: PathBuf,
    original_home: Option<OsString>,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment and point `HOME` at it.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let home = root.path().join("home");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&home).expect("Failed to create test home directory");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let original_home = env::var_os("HOME");
        unsafe {
            env::set_var("HOME", &home);
        }

        Self { root, home, work_dir, original_home }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// `<home>/.m2/repository`.
    pub fn default_repository(&self) -> PathBuf {
        self.home.join(".m2").join("repository")
    }

    /// Scratch path under the test root that does not exist yet.
    pub fn scratch(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Build a command for invoking the compiled `mvn-invoke` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mvn-invoke").expect("Failed to locate mvn-invoke binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", &self.home)
            .env_remove("MAVEN_HOME")
            .env_remove("M2_HOME")
            .env_remove("MVN_INVOKE_LOG");
        cmd
    }

    /// Write an artifact file into the work directory.
    pub fn write_artifact(&self, name: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, b"PK\x03\x04").expect("Failed to write artifact");
        path
    }

    /// Write the default config file under `$HOME`.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.home.join(".config").join("mvn-invoke").join("config.toml");
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        fs::write(&path, content).expect("Failed to write config");
        path
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        match &self.original_home {
            Some(value) => unsafe {
                env::set_var("HOME", value);
            },
            None => unsafe {
                env::remove_var("HOME");
            },
        }
    }
}

/// A shell script standing in for `mvn`.
///
/// Logs `<pwd>|<args>` per call, prints one line to each stream, and exits
/// with `$FAKE_MVN_EXIT` (default 0).
#[cfg(unix)]
#[allow(dead_code)]
pub struct FakeMaven {
    pub root: TempDir,
    pub executable: PathBuf,
    pub log_file: PathBuf,
}

#[cfg(unix)]
#[allow(dead_code)]
impl FakeMaven {
    pub fn new() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().expect("Failed to create temp dir for fake mvn");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("mvn.log");
        let executable = bin_dir.join("mvn");

        let script = format!(
            r#"#!/bin/sh
echo "$(pwd)|$*" >> "{}"
echo "[INFO] BUILD SUCCESS"
echo "[WARNING] fake maven" >&2
exit ${{FAKE_MVN_EXIT:-0}}
"#,
            log_file.to_string_lossy()
        );
        fs::write(&executable, script).expect("Failed to write mvn script");

        let mut perms = fs::metadata(&executable).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&executable, perms).expect("Failed to set permissions");

        Self { root, executable, log_file }
    }

    /// Maven installation directory containing `bin/mvn`.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Logged calls, one `<pwd>|<args>` entry per line.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Arguments of the last call.
    pub fn last_args(&self) -> String {
        let calls = self.calls();
        let last = calls.last().expect("fake mvn was never called");
        last.split_once('|').map(|(_, args)| args.to_string()).unwrap_or_default()
    }

    /// Working directory of the last call.
    pub fn last_dir(&self) -> PathBuf {
        let calls = self.calls();
        let last = calls.last().expect("fake mvn was never called");
        PathBuf::from(last.split_once('|').map(|(dir, _)| dir).unwrap_or_default())
    }
}
