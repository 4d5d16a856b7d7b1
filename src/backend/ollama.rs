//! Ollama HTTP client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::GenerationBackend;
use crate::error::{Error, Result};

/// Default address of a locally running Ollama server
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TagsReply {
    #[serde(default)]
    models: Option<Vec<Value>>,
}

/// Client for the `/api/generate` and `/api/tags` endpoints
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:11434`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client that reuses an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl GenerationBackend for OllamaClient {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String> {
        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let body = self
            .client
            .post(self.endpoint("/api/generate"))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("HTTP request to Ollama failed: {}", e);
                Error::BackendTransport(e.to_string())
            })?
            .text()
            .await?;

        debug!("Ollama reply: {}", body);

        let reply: GenerateReply = serde_json::from_str(&body)
            .map_err(|_| Error::BackendProtocol(format!("Invalid JSON from Ollama: {body}")))?;

        match reply {
            GenerateReply {
                response: Some(text),
                ..
            } if !text.is_empty() => Ok(text),
            GenerateReply {
                error: Some(message),
                ..
            } => Err(Error::BackendProtocol(format!(
                "Ollama returned an error: {message}"
            ))),
            _ => Err(Error::BackendProtocol(
                "Missing 'response' in Ollama reply".to_string(),
            )),
        }
    }

    async fn list_models(&self) -> Result<Vec<Value>> {
        let body = self
            .client
            .get(self.endpoint("/api/tags"))
            .send()
            .await?
            .text()
            .await?;

        let reply: TagsReply = serde_json::from_str(&body)
            .map_err(|_| Error::BackendProtocol("Invalid JSON from Ollama".to_string()))?;

        Ok(reply.models.unwrap_or_default())
    }
}
