//! Platform-aware configuration paths for codehint

use crate::error::{HintError, HintResult};
use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "CODEHINT_CONFIG_DIR";

const APP_DIR: &str = "codehint";
const CONFIG_FILE: &str = "config.toml";

/// Get the appropriate configuration directory for the current platform
pub fn config_dir() -> HintResult<PathBuf> {
    if let Ok(custom_dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(custom_dir));
    }

    dirs::config_dir()
        .map(|p| p.join(APP_DIR))
        .ok_or_else(|| HintError::Config {
            message: "Unable to determine config directory for the current platform".to_string(),
            path: None,
        })
}

/// Full path of `config.toml`
pub fn config_file() -> HintResult<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}
