//! Saathi configuration system.
//!
//! TOML-based configuration with environment overrides and full
//! validation. All config sections use defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use saathi_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("model: {}", config.model.name);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::apply_env_overrides;
pub use schema::{SaathiConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use saathi_common::ConfigError;

/// Load, override, and validate the configuration.
///
/// With `path` set the file must exist. Without it the platform default is
/// used and created on first run.
pub fn load_config(path: Option<&Path>) -> Result<SaathiConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    env::apply_env_overrides(&mut config)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SaathiConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&SaathiConfig::default());
        for section in ["\"model\"", "\"agent\"", "\"tools\"", "\"speech\"", "\"logging\""] {
            assert!(json.contains(section), "missing {section}");
        }
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_with_explicit_missing_path_fails() {
        let err = load_config(Some(Path::new("/tmp/saathi_missing_explicit.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tools]\ntimeout_secs = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&SaathiConfig::default());
        let parsed: SaathiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model.name, "llama3.1");
        assert_eq!(parsed.agent.max_rounds, 5);
    }
}
