use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use codesmith_common_config::{ApiKey, Settings};

use super::extract::extract_content;
use super::provider::{CompletionBackend, CompletionError, CompletionRequest};

/// HTTP backend posting OpenAI-style chat completions.
pub struct RemoteBackend {
    client: Client,
    api_key: ApiKey,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

impl RemoteBackend {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: Client::new(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            base_url: settings.base_url.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[async_trait::async_trait]
impl CompletionBackend for RemoteBackend {
    fn name(&self) -> &str {
        "remote"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let api_request = ChatRequest {
            model: request.model.unwrap_or_else(|| self.model.clone()),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: request.prompt,
            }],
            temperature: request.temperature.unwrap_or(self.temperature),
            max_tokens: request.max_tokens.unwrap_or(self.max_tokens),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose())
            .json(&api_request)
            .send()
            .await
            .map_err(CompletionError::Network)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, message });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| CompletionError::Decode(e.to_string()))?;

        Ok(extract_content(&payload).into_text())
    }
}
