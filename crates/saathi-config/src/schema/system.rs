//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Filter directive for the `saathi` crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "saathi=debug",
            LogLevel::Info => "saathi=info",
            LogLevel::Warning => "saathi=warn",
            LogLevel::Error => "saathi=error",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_uppercase() {
        let config: LoggingConfig = toml::from_str(r#"level = "DEBUG""#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.level.directive(), "saathi=debug");
    }

    #[test]
    fn warning_maps_to_warn_directive() {
        assert_eq!(LogLevel::Warning.directive(), "saathi=warn");
    }
}
