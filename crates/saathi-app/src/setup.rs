//! Wires config into the running assistant.

use std::sync::Arc;
use std::time::Duration;

use saathi_ai::prompt::default_system_prompt;
use saathi_ai::{
    AgentLoop, ChatFacade, OllamaClient, OllamaConfig, SessionStore, ToolRegistry, WebSearchTool,
};
use saathi_common::{Result, SaathiError};
use saathi_config::schema::{ModelConfig, SaathiConfig, ToolsConfig};
use tracing::{info, warn};

pub fn ollama_config(model: &ModelConfig) -> OllamaConfig {
    OllamaConfig::new(&model.name)
        .with_base_url(&model.base_url)
        .with_temperature(model.temperature)
        .with_top_p(model.top_p)
        .with_request_timeout(Duration::from_secs(u64::from(model.request_timeout_secs)))
}

pub fn tool_registry(tools: &ToolsConfig) -> Result<ToolRegistry> {
    let timeout = Duration::from_secs(u64::from(tools.timeout_secs));
    let mut registry = ToolRegistry::new().with_timeout(timeout);

    let search = &tools.web_search;
    if search.enabled {
        let tool = WebSearchTool::new(&search.endpoint, search.max_results as usize)
            .map_err(|e| SaathiError::Tool(e.to_string()))?
            .with_api_key(search.api_key.clone());
        registry
            .register(Arc::new(tool))
            .map_err(|e| SaathiError::Tool(e.to_string()))?;
    }

    info!(tools = ?registry.names(), "tools ready");
    Ok(registry)
}

pub fn session_store(config: &SaathiConfig) -> SessionStore {
    match config.agent.system_prompt {
        Some(ref prompt) => SessionStore::new(prompt.clone()),
        None => SessionStore::with_prompt_fn(default_system_prompt),
    }
}

/// Build the chat facade and report whether the model is available.
pub async fn chat_facade(config: &SaathiConfig) -> Result<ChatFacade> {
    let client = Arc::new(
        OllamaClient::new(ollama_config(&config.model))
            .map_err(|e| SaathiError::Model(e.to_string()))?,
    );

    match client.has_model().await {
        Ok(true) => info!(model = %config.model.name, "model available"),
        Ok(false) => warn!(
            "Model {} is not pulled on {}; run `ollama pull {}`",
            config.model.name, config.model.base_url, config.model.name
        ),
        Err(e) => warn!("Ollama not reachable at {}: {e}", config.model.base_url),
    }

    let tools = Arc::new(tool_registry(&config.tools)?);
    let agent = AgentLoop::new(client, tools).with_max_rounds(config.agent.max_rounds);
    Ok(ChatFacade::new(session_store(config), agent))
}
