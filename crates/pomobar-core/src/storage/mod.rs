mod config;

pub use config::{Config, NotificationsConfig, ScheduleConfig, StoredConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/pomobar[-dev]/` based on POMOBAR_ENV.
///
/// Set POMOBAR_CONFIG_DIR to override the location entirely (used by tests),
/// or POMOBAR_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let dir = if let Ok(override_dir) = std::env::var("POMOBAR_CONFIG_DIR") {
        PathBuf::from(override_dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("POMOBAR_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("pomobar-dev")
        } else {
            base_dir.join("pomobar")
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DirUnavailable {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
