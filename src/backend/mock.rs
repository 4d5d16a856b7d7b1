//! In-memory backend for tests

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::GenerationBackend;
use crate::error::{Error, Result};

/// Type alias for recorded `generate` calls as `(prompt, model)`
type CalledGenerations = Arc<Mutex<Vec<(String, String)>>>;

/// Mock implementation of `GenerationBackend` for testing
#[derive(Clone, Default)]
pub struct MockBackend {
    /// Predefined results for `generate`, consumed front to back
    pub generate_responses: Arc<Mutex<Vec<Result<String>>>>,
    /// Result returned by every `list_models` call
    pub models: Arc<Mutex<Option<Result<Vec<Value>>>>>,
    /// Track generate calls for verification
    pub called_generations: CalledGenerations,
}

impl MockBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful generation
    pub async fn add_response(&self, text: &str) {
        self.generate_responses
            .lock()
            .await
            .push(Ok(text.to_string()));
    }

    /// Queue a failed generation
    pub async fn add_error(&self, error: Error) {
        self.generate_responses.lock().await.push(Err(error));
    }

    /// Set the result of `list_models`
    pub async fn set_models(&self, models: Result<Vec<Value>>) {
        *self.models.lock().await = Some(models);
    }

    pub async fn get_called_generations(&self) -> Vec<(String, String)> {
        self.called_generations.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.called_generations.lock().await.len()
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String> {
        self.called_generations
            .lock()
            .await
            .push((prompt.to_string(), model.to_string()));

        let mut responses = self.generate_responses.lock().await;
        if responses.is_empty() {
            return Err(Error::BackendTransport(
                "No mock response configured".to_string(),
            ));
        }
        responses.remove(0)
    }

    async fn list_models(&self) -> Result<Vec<Value>> {
        // `Error` is not `Clone`, so failures are re-created from their message.
        match &*self.models.lock().await {
            None => Ok(Vec::new()),
            Some(Ok(models)) => Ok(models.clone()),
            Some(Err(e)) => Err(Error::BackendProtocol(e.to_string())),
        }
    }
}
