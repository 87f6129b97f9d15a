//! Invoker options loading from `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, MavenInvokerOptions};

/// Resolve the user's home directory from `$HOME`.
pub fn user_home() -> Result<PathBuf, AppError> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| AppError::configuration("HOME environment variable not set"))
}

/// `$HOME/.config/mvn-invoke/config.toml`.
pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(".config").join("mvn-invoke").join("config.toml")
}

/// Load options from `explicit`, or from the default location under `home`.
///
/// `home` is only consulted without an explicit path. A missing default file,
/// or no home at all, yields default options; a missing explicit file is an error.
pub fn load_options(
    explicit: Option<&Path>,
    home: Option<&Path>,
) -> Result<MavenInvokerOptions, AppError> {
    let path = match (explicit, home) {
        (Some(path), _) if !path.is_file() => {
            return Err(AppError::ConfigMissing(path.to_path_buf()));
        }
        (Some(path), _) => path.to_path_buf(),
        (None, Some(home)) if default_config_path(home).is_file() => default_config_path(home),
        (None, _) => return Ok(MavenInvokerOptions::default()),
    };

    let content = fs::read_to_string(&path)?;
    parse_options(&content, &path)
}

pub fn parse_options(content: &str, path: &Path) -> Result<MavenInvokerOptions, AppError> {
    toml::from_str(content)
        .map_err(|e| AppError::ConfigParse { path: path.to_path_buf(), details: e.to_string() })
}
