//! Invoker options as read from config files and CLI flags.

use serde::Deserialize;

/// Named options that drive invoker configuration.
///
/// Every field is optional. Absent or blank strings fall back to the
/// environment default when the invoker is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MavenInvokerOptions {
    /// Base directory of the local repository (`-Dmaven.repo.local`).
    pub local_repository: Option<String>,
    /// Explicit path to the `mvn` executable.
    pub maven_executable: Option<String>,
    /// Base directory of the Maven installation.
    pub maven_home: Option<String>,
    /// Force a check for updated snapshots (`-U`).
    pub update_snapshots: bool,
    /// Suppress plugin update checks (`-npu`).
    pub non_plugin_updates: bool,
}

impl MavenInvokerOptions {
    pub fn local_repository(&self) -> Option<&str> {
        text(&self.local_repository)
    }

    pub fn maven_executable(&self) -> Option<&str> {
        text(&self.maven_executable)
    }

    pub fn maven_home(&self) -> Option<&str> {
        text(&self.maven_home)
    }

    /// Overlay `overrides` on top of `self`.
    ///
    /// String fields are replaced only when the override has text; flags only
    /// when the override states them, in either direction.
    pub fn merge(self, overrides: OptionOverrides) -> Self {
        Self {
            local_repository: pick(overrides.local_repository, self.local_repository),
            maven_executable: pick(overrides.maven_executable, self.maven_executable),
            maven_home: pick(overrides.maven_home, self.maven_home),
            update_snapshots: overrides.update_snapshots.unwrap_or(self.update_snapshots),
            non_plugin_updates: overrides.non_plugin_updates.unwrap_or(self.non_plugin_updates),
        }
    }
}

/// Per-invocation overrides layered over file options, e.g. from CLI flags.
///
/// `None` leaves the underlying value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub local_repository: Option<String>,
    pub maven_executable: Option<String>,
    pub maven_home: Option<String>,
    pub update_snapshots: Option<bool>,
    pub non_plugin_updates: Option<bool>,
}

/// Returns the value only when it contains at least one non-whitespace character.
pub fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn pick(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    if text(&preferred).is_some() { preferred } else { fallback }
}
