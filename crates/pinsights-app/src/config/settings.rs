//! Settings file loading and initialization

use std::path::{Path, PathBuf};
use std::time::Duration;

use pinsights_core::prelude::*;

use super::types::{timeout_from_secs, Settings};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "privacy-insights";

const DEFAULT_CONFIG: &str = r#"# Privacy Insights Configuration

[api]
# Analysis backend. Overridden by --endpoint and PINSIGHTS_API_ENDPOINT.
# endpoint = "http://localhost:8000/analyze"

# Whole-request timeout in seconds (0 = wait indefinitely)
timeout_secs = 0

[ui]
# Start with card tooltips visible (toggle with F1 or Ctrl+T)
show_tips = false

# Render the About panel
show_about = true
"#;

/// `{config_dir}/privacy-insights/config.toml`, if the platform has a
/// config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from [`default_config_path`] when `None`.
///
/// A missing file yields defaults silently; an unreadable or unparsable
/// file yields defaults with a warning.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            debug!("No config directory on this platform, using defaults");
            return Settings::default();
        }
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config to `path`.
///
/// Returns `false` without touching anything when the file already exists.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::config(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;

    info!("Created default config at {:?}", path);
    Ok(true)
}

/// Timeout precedence: command line, then config file, then none
pub fn resolve_timeout(cli_secs: Option<u64>, settings: &Settings) -> Option<Duration> {
    match cli_secs {
        Some(secs) => timeout_from_secs(secs),
        None => settings.api.timeout(),
    }
}
