use crate::config::LlmSettings;
use crate::core::{build_user_message, extract_recommendation, ExtractedReply, SYSTEM_PROMPT};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when requesting a recommendation from the model
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key configuration error")]
    MissingApiKey,

    #[error("Error communicating with language model API: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Error communicating with language model API: {0}")]
    ApiError(String),

    #[error("Failed to parse model response")]
    Parse { raw_response: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat-completion client for an OpenAI-compatible endpoint
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl LlmClient {
    pub fn new(client: Client, settings: &LlmSettings) -> Self {
        Self {
            client,
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, LlmError> {
        self.api_key.as_deref().ok_or_else(|| {
            tracing::error!("LLM API key is not set");
            LlmError::MissingApiKey
        })
    }

    /// Fail fast before any network work when no key is configured
    pub fn ensure_configured(&self) -> Result<(), LlmError> {
        self.api_key().map(|_| ())
    }

    /// Ask the model to rank `listings` for `user_query` and split its reply
    pub async fn recommend(
        &self,
        user_query: &str,
        listings: &[Value],
    ) -> Result<ExtractedReply, LlmError> {
        let user_message = build_user_message(user_query, listings)
            .map_err(|e| LlmError::Unexpected(format!("failed to serialize listings: {}", e)))?;

        tracing::info!("Sending request to language model for query: {}", user_query);

        let reply = self.complete(&user_message).await?;

        match extract_recommendation(&reply) {
            Some(extracted) => {
                tracing::debug!("Extracted recommendation using {:?}", extracted.strategy);
                Ok(extracted)
            }
            None => {
                tracing::error!("Could not find valid JSON in the model response");
                tracing::error!("Raw response: {}", reply);
                Err(LlmError::Parse { raw_response: reply })
            }
        }
    }

    /// Send one system + user exchange and return the assistant's text
    pub async fn complete(&self, user_message: &str) -> Result<String, LlmError> {
        let api_key = self.api_key()?;

        let payload = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: user_message },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error making request to language model API: {}", e);
                LlmError::RequestError(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Language model API returned {}: {}", status, body);
            return Err(LlmError::ApiError(format!("{}: {}", status, body)));
        }

        let json: Value = response.json().await?;

        json.pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                tracing::error!("Language model reply has no message content: {}", json);
                LlmError::Unexpected("reply is missing choices[0].message.content".into())
            })
    }
}
