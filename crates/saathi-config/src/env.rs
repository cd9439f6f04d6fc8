//! Environment-variable overrides applied on top of the TOML file.

use saathi_common::ConfigError;
use tracing::debug;

use crate::schema::SaathiConfig;

pub const ENV_MODEL: &str = "SAATHI_MODEL";
pub const ENV_OLLAMA_URL: &str = "SAATHI_OLLAMA_URL";
pub const ENV_MAX_ROUNDS: &str = "SAATHI_MAX_ROUNDS";
pub const ENV_TEMPERATURE: &str = "SAATHI_TEMPERATURE";
pub const ENV_SEARCH_API_KEY: &str = "SAATHI_SEARCH_API_KEY";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut SaathiConfig) -> Result<(), ConfigError> {
    apply_overrides_with(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup. Empty values are ignored.
pub fn apply_overrides_with(
    config: &mut SaathiConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(model) = get(ENV_MODEL) {
        debug!(model = %model, "model overridden from environment");
        config.model.name = model;
    }
    if let Some(url) = get(ENV_OLLAMA_URL) {
        config.model.base_url = url;
    }
    if let Some(raw) = get(ENV_MAX_ROUNDS) {
        config.agent.max_rounds = raw
            .trim()
            .parse()
            .map_err(|e| ConfigError::ParseError(format!("{ENV_MAX_ROUNDS}={raw:?}: {e}")))?;
    }
    if let Some(raw) = get(ENV_TEMPERATURE) {
        config.model.temperature = raw
            .trim()
            .parse()
            .map_err(|e| ConfigError::ParseError(format!("{ENV_TEMPERATURE}={raw:?}: {e}")))?;
    }
    if let Some(key) = get(ENV_SEARCH_API_KEY) {
        config.tools.web_search.api_key = Some(key);
    }
    Ok(())
}
