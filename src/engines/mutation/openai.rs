//! OpenAI-compatible chat completions backend.

use super::generator::TextGenerator;
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const MAX_ERROR_BODY: usize = 320;

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

pub struct OpenAiGenerator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: Option<f64>,
    max_tokens: Option<u32>,
    closed: AtomicBool,
}

impl std::fmt::Debug for OpenAiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiGenerator")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiGenerator {
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GenerationError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: resolve_chat_endpoint(&config.endpoint),
            model: config.agent.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            closed: AtomicBool::new(false),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, system_prompt: &str, user_input: &str) -> Result<String, GenerationError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(GenerationError::Closed);
        }

        let mut payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_input },
            ],
        });
        if let Some(temperature) = self.temperature {
            payload["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            payload["max_tokens"] = json!(max_tokens);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status,
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        let choice = body
            .choices
            .first()
            .ok_or_else(|| GenerationError::MalformedResponse("response did not include choices".to_string()))?;

        let text = choice.message.content.as_ref().map(extract_text).unwrap_or_default();
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(text)
    }

    async fn close(&self) -> Result<(), GenerationError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Err(GenerationError::Closed);
        }
        log::debug!("Closed generator for {}", self.endpoint);
        Ok(())
    }
}

fn resolve_chat_endpoint(endpoint: &str) -> String {
    if endpoint.contains("/chat/completions") {
        endpoint.to_string()
    } else {
        format!("{}/chat/completions", endpoint.trim_end_matches('/'))
    }
}

/// Message content is either a string or a list of typed parts
fn extract_text(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join(""),
        _ => String::new(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}
