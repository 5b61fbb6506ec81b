//! Configuration file parsing for Privacy Insights
//!
//! Supports `{config_dir}/privacy-insights/config.toml`, or any path given
//! with `--config`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, resolve_timeout};
pub use types::*;
