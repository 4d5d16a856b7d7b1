//! HTTP API server
//!
//! | Method   | Path                      | Success                     |
//! |----------|---------------------------|-----------------------------|
//! | `GET`    | `/api/models`             | backend model descriptors   |
//! | `POST`   | `/generate`               | `{"prompt": text}`          |
//! | `GET`    | `/api/history`            | array of history entries    |
//! | `DELETE` | `/api/history/{timestamp}`| `{"message": ...}`          |
//!
//! Every failure is a JSON object. `/generate` reports failures under
//! `prompt`, the other routes under `error`.

use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
    Router,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::backend::GenerationBackend;
use crate::error::Error;
use crate::history::HistoryQueue;
use crate::orchestrator::{GenerateRequest, Orchestrator};

pub struct ApiServer {
    orchestrator: Arc<Orchestrator>,
    static_dir: Option<PathBuf>,
}

impl ApiServer {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self {
            orchestrator,
            static_dir: None,
        }
    }

    /// Serve files from `dir` for any path no API route matches
    pub fn with_static_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.static_dir = dir;
        self
    }

    /// Bind `addr` and serve until Ctrl-C
    pub async fn start(self, addr: &str) -> Result<()> {
        let listener = TcpListener::bind(addr).await?;
        info!("Server running at http://{}", listener.local_addr()?);
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let app = self.build_router();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("Server stopped");
        Ok(())
    }

    pub fn build_router(self) -> Router {
        let state = ApiState {
            backend: Arc::clone(self.orchestrator.backend()),
            history: self.orchestrator.history().clone(),
            orchestrator: self.orchestrator,
        };

        let mut router = Router::new()
            .route("/api/models", get(list_models))
            .route("/generate", post(generate))
            .route("/api/history", get(list_history))
            .route("/api/history/{timestamp}", delete(delete_history));

        if let Some(dir) = self.static_dir {
            info!("Serving static files from {}", dir.display());
            router = router.fallback_service(ServeDir::new(dir));
        }

        router
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }
}

/// Shared API state
#[derive(Clone)]
struct ApiState {
    orchestrator: Arc<Orchestrator>,
    backend: Arc<dyn GenerationBackend>,
    history: HistoryQueue,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Cannot listen for Ctrl-C, serving until killed: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn prompt_body(status: StatusCode, prompt: &str) -> Response {
    (status, Json(json!({ "prompt": prompt }))).into_response()
}

fn storage_error_message(error: &Error) -> &'static str {
    match error {
        Error::StorageParse(_) => "Failed to parse history file.",
        Error::StorageRead(_) => "Failed to read history file.",
        _ => "Failed to write history file.",
    }
}

// API Handlers

async fn list_models(State(state): State<ApiState>) -> Response {
    match state.backend.list_models().await {
        Ok(models) => Json(models).into_response(),
        Err(Error::BackendTransport(e)) => {
            warn!("Failed to fetch models: {}", e);
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch models from Ollama",
            )
        }
        Err(e) => {
            warn!("Failed to decode model list: {}", e);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Invalid JSON from Ollama")
        }
    }
}

async fn generate(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return prompt_body(
                StatusCode::BAD_REQUEST,
                &format!("Invalid request body: {}", rejection.body_text()),
            )
        }
    };

    match state.orchestrator.handle_generate(request).await {
        Ok(text) => prompt_body(StatusCode::OK, &text),
        Err(Error::MissingInput) => prompt_body(StatusCode::BAD_REQUEST, "Missing theme"),
        Err(Error::InvalidSelection(_)) => {
            prompt_body(StatusCode::BAD_REQUEST, "Invalid system prompt selected")
        }
        Err(e) => prompt_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Error generating prompt: {e}"),
        ),
    }
}

async fn list_history(State(state): State<ApiState>) -> Response {
    match state.history.list().await {
        Ok(history) => Json(history).into_response(),
        Err(e) => {
            warn!("Failed to list history: {}", e);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, storage_error_message(&e))
        }
    }
}

async fn delete_history(
    State(state): State<ApiState>,
    Path(timestamp): Path<String>,
) -> Response {
    match state.history.remove(&timestamp).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "message": "History item deleted." })),
        )
            .into_response(),
        Err(e) => {
            warn!("Failed to delete history item {}: {}", timestamp, e);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, storage_error_message(&e))
        }
    }
}
