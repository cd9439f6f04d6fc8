//! Full configuration validation.
//!
//! Checks every numeric range and endpoint, collecting all errors into a
//! single `ConfigError` so a user sees every problem at once.

mod helpers;


use crate::schema::SaathiConfig;
use helpers::{validate_http_url, validate_range, validate_range_f64};
use saathi_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SaathiConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_model(&mut errors, config);
    validate_agent(&mut errors, config);
    validate_tools(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_model(errors: &mut Vec<String>, config: &SaathiConfig) {
    let model = &config.model;
    if model.name.trim().is_empty() {
        errors.push("model.name must not be empty".into());
    }
    validate_http_url(errors, "model.base_url", &model.base_url);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
    validate_range_f64(errors, "model.top_p", model.top_p, 0.0, 1.0);
    validate_range(
        errors,
        "model.request_timeout_secs",
        model.request_timeout_secs,
        5,
        600,
    );
}

fn validate_agent(errors: &mut Vec<String>, config: &SaathiConfig) {
    validate_range(errors, "agent.max_rounds", config.agent.max_rounds, 1, 20);
    if let Some(prompt) = &config.agent.system_prompt {
        if prompt.trim().is_empty() {
            errors.push("agent.system_prompt must not be blank when set".into());
        }
    }
}

fn validate_tools(errors: &mut Vec<String>, config: &SaathiConfig) {
    validate_range(errors, "tools.timeout_secs", config.tools.timeout_secs, 1, 300);

    let search = &config.tools.web_search;
    validate_range(errors, "tools.web_search.max_results", search.max_results, 1, 10);
    if search.enabled {
        validate_http_url(errors, "tools.web_search.endpoint", &search.endpoint);
    }
}
