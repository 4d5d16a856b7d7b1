//! Template-driven generation requests
//!
//! Validates an incoming request, renders the selected template, performs one
//! exchange with the backend and queues a history record for the result.

use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::backend::{GenerationBackend, DEFAULT_MODEL};
use crate::error::{Error, Result};
use crate::history::{HistoryEntry, HistoryQueue};
use crate::templates::TemplateKey;

/// Body of `POST /generate`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub theme: Option<String>,
    /// Template key
    #[serde(default, rename = "systemPrompt")]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl GenerateRequest {
    pub fn new(theme: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            theme: Some(theme.into()),
            system_prompt: Some(system_prompt.into()),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

pub struct Orchestrator {
    backend: Arc<dyn GenerationBackend>,
    history: HistoryQueue,
    default_model: String,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn GenerationBackend>, history: HistoryQueue) -> Self {
        Self {
            backend,
            history,
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Model used for requests that do not name one
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn history(&self) -> &HistoryQueue {
        &self.history
    }

    pub fn backend(&self) -> &Arc<dyn GenerationBackend> {
        &self.backend
    }

    /// Generate text for `request`
    ///
    /// Input errors are returned before the backend is contacted. On success
    /// the history append is queued and not awaited; a failed write is logged
    /// by the history worker and never reaches the caller.
    pub async fn handle_generate(&self, request: GenerateRequest) -> Result<String> {
        let theme = match request.theme.as_deref() {
            Some(theme) if !theme.is_empty() => theme,
            _ => return Err(Error::MissingInput),
        };

        let key: TemplateKey = request.system_prompt.as_deref().unwrap_or("").parse()?;
        let instruction = key.render(theme);

        let model = request
            .model
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.default_model);

        let text = self
            .backend
            .generate(&instruction, model)
            .await
            .inspect_err(|e| warn!("Error generating prompt: {}", e))?;

        info!(
            "Generated {} prompt with {} ({} chars)",
            key,
            model,
            text.len()
        );

        self.history.submit_append(HistoryEntry::new(
            theme,
            request.model.clone(),
            key,
            text.clone(),
        ));

        Ok(text)
    }
}
