//! ModelClient implementation for OllamaClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{Message, ModelClient, ModelError, ModelResponse, ToolDefinition};

use super::client::{parse_model_tags, OllamaClient};

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ModelError> {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ModelError::RateLimited);
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let text = text.chars().take(200).collect::<String>();
        return Err(ModelError::Api(format!("HTTP {status}: {text}")));
    }
    Ok(response)
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn send(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<ModelResponse, ModelError> {
        let body = self.build_request_body(messages, tools);

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            tools = tools.len(),
            "Ollama chat request"
        );

        let response = self.http.post(self.config.chat_url()).json(&body).send().await?;
        let response = check_status(response).await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ModelError::Parse(e.to_string()))?;

        self.parse_response(json)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

impl OllamaClient {
    /// Names of the models pulled on the server.
    pub async fn available_models(&self) -> Result<Vec<String>, ModelError> {
        let response = self.http.get(self.config.tags_url()).send().await?;
        let response = check_status(response).await?;
        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ModelError::Parse(e.to_string()))?;
        Ok(parse_model_tags(&json))
    }

    /// Whether the configured model is pulled, accepting an implicit `:latest`.
    pub async fn has_model(&self) -> Result<bool, ModelError> {
        let wanted = &self.config.model;
        let models = self.available_models().await?;
        Ok(models.iter().any(|name| {
            name == wanted || name.strip_suffix(":latest") == Some(wanted.as_str())
        }))
    }
}
