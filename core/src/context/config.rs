//! Application configuration
//!
//! Re-exports the shared types from tally-types and adds the platform
//! default log directory and confy persistence.

use super::error::ConfigError;
use std::path::PathBuf;

pub use tally_types::{AppConfig, Color, LogFormat, class_colors};

const APP_NAME: &str = "tally";
const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Defaults
// ─────────────────────────────────────────────────────────────────────────────

pub fn default_log_directory() -> String {
    #[cfg(target_os = "windows")]
    {
        String::from(r"C:\Program Files (x86)\World of Warcraft\_retail_\Logs")
    }
    #[cfg(target_os = "macos")]
    {
        String::from("/Applications/World of Warcraft/_retail_/Logs")
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        // Lutris/Wine prefix layout
        dirs::home_dir()
            .map(|p| {
                p.join("Games/world-of-warcraft/drive_c/Program Files (x86)/World of Warcraft/_retail_/Logs")
            })
            .and_then(|p| p.to_str().map(String::from))
            .unwrap_or_default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    /// Load the stored config, falling back to defaults when there is none
    /// or it cannot be read.
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn load_with_defaults() -> Self;
    fn save(&self) -> Result<(), ConfigError>;
    fn config_path() -> Result<PathBuf, ConfigError>;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Using default configuration");
            Self::load_with_defaults()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        let mut config: AppConfig =
            confy::load(APP_NAME, CONFIG_NAME).map_err(ConfigError::Load)?;
        if config.log_directory.is_empty() {
            config.log_directory = default_log_directory();
        }
        Ok(config)
    }

    /// Load with platform-specific defaults (used when no config file exists)
    fn load_with_defaults() -> Self {
        AppConfig::with_log_directory(default_log_directory())
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Locate)
    }
}
