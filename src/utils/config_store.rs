//! ConfigStore - Local Configuration Loading

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::constants::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::error::Result;

/// Resolve the config file path
///
/// `HOOKKIT_CONFIG` wins over `hookkit.toml` in the working directory.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Load a TOML config file, falling back to defaults when it is missing
pub fn load_config<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        tracing::debug!("Config file {} not found, using defaults", path.display());
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse TOML config content
pub fn parse_config<T: DeserializeOwned>(content: &str) -> Result<T> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;
    use crate::domain::geometry::Axis;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config: AppConfig =
            load_config(Path::new("definitely/not/here/hookkit.toml")).expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config: AppConfig = parse_config(
            r#"
            [pane]
            axis = "y"
            edge_margin = 120.0

            [notifications]
            timer_ms = 0
            "#,
        )
        .expect("parse");

        assert_eq!(config.pane.axis, Axis::Y);
        assert_eq!(config.pane.edge_margin, 120.0);
        assert_eq!(config.pane.initial_ratio, 0.5);
        assert_eq!(config.notifications.timer(), None);
        assert!(config.fetch.immediate);
    }

    #[test]
    fn test_invalid_config() {
        let result: Result<AppConfig> = parse_config("[pane]\naxis = \"z\"");
        assert!(matches!(result, Err(crate::error::Error::TomlDe { .. })));
    }
}
