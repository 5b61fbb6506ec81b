//! Configuration types for Privacy Insights
//!
//! Defines:
//! - `Settings` - Contents of `config.toml`
//! - `ApiSettings` - Analysis backend endpoint and timeout
//! - `UiSettings` - Initial TUI toggles

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global application settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// `[api]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Analysis endpoint base URL. Overridden by `--endpoint` and
    /// `PINSIGHTS_API_ENDPOINT`.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Whole-request timeout in seconds (0 = wait indefinitely)
    #[serde(default)]
    pub timeout_secs: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        timeout_from_secs(self.timeout_secs)
    }
}

/// `[ui]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Start with card tooltips visible
    #[serde(default)]
    pub show_tips: bool,

    /// Render the About panel
    #[serde(default = "default_true")]
    pub show_about: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_tips: false,
            show_about: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// `0` means no timeout
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.endpoint, None);
        assert_eq!(settings.api.timeout(), None);
        assert!(!settings.ui.show_tips);
        assert!(settings.ui.show_about);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str("[api]\ntimeout_secs = 15\n").unwrap();
        assert_eq!(settings.api.timeout(), Some(Duration::from_secs(15)));
        assert!(settings.ui.show_about);
    }

    #[test]
    fn test_empty_file_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_zero_timeout_is_none() {
        assert_eq!(timeout_from_secs(0), None);
        assert_eq!(timeout_from_secs(3), Some(Duration::from_secs(3)));
    }
}
