//! Common test utilities and helpers
#![allow(dead_code)]

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use prompt_forge::api_server::ApiServer;
use prompt_forge::backend::OllamaClient;
use prompt_forge::history::{HistoryQueue, HistoryStore};
use prompt_forge::orchestrator::Orchestrator;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Canned replies for a fake Ollama server
#[derive(Clone)]
pub struct StubBackend {
    generate_reply: (StatusCode, String),
    tags_reply: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubBackend {
    /// Reply to `/api/generate` with `{"response": text}`
    pub fn responding(text: &str) -> Self {
        Self::with_raw_reply(
            StatusCode::OK,
            &serde_json::json!({ "model": "phi4-mini", "response": text, "done": true })
                .to_string(),
        )
    }

    /// Reply to `/api/generate` with an arbitrary body
    pub fn with_raw_reply(status: StatusCode, body: &str) -> Self {
        Self {
            generate_reply: (status, body.to_string()),
            tags_reply: r#"{"models":[]}"#.to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_tags(mut self, body: &str) -> Self {
        self.tags_reply = body.to_string();
        self
    }

    /// Bodies received on `/api/generate`
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    /// Start the stub and return its base URL
    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route("/api/generate", post(stub_generate))
            .route("/api/tags", get(stub_tags))
            .with_state(self.clone());
        spawn_router(router).await
    }
}

async fn stub_generate(
    State(stub): State<StubBackend>,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    stub.requests.lock().unwrap().push(body);
    stub.generate_reply.clone()
}

async fn stub_tags(State(stub): State<StubBackend>) -> String {
    stub.tags_reply.clone()
}

pub async fn spawn_router(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL on loopback that nothing listens on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A running service plus the temp directory holding its history file
pub struct TestApp {
    pub base_url: String,
    pub history_file: PathBuf,
    pub client: reqwest::Client,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn spawn(backend_url: &str) -> Self {
        Self::spawn_with_static(backend_url, None).await
    }

    pub async fn spawn_with_static(backend_url: &str, static_dir: Option<&Path>) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let history_file = temp_dir.path().join("prompt-history.json");

        let backend = Arc::new(OllamaClient::new(backend_url));
        let history = HistoryQueue::new(HistoryStore::new(history_file.clone()));
        let orchestrator = Arc::new(Orchestrator::new(backend, history));
        let router = ApiServer::new(orchestrator)
            .with_static_dir(static_dir.map(Path::to_path_buf))
            .build_router();

        Self {
            base_url: spawn_router(router).await,
            history_file,
            client: reqwest::Client::new(),
            _temp_dir: temp_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn generate(&self, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url("/generate"))
            .json(&body)
            .send()
            .await
            .unwrap();
        read_json(response).await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        read_json(response).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.delete(self.url(path)).send().await.unwrap();
        read_json(response).await
    }

    pub async fn history(&self) -> Vec<Value> {
        let (status, body) = self.get("/api/history").await;
        assert_eq!(status, StatusCode::OK, "history body: {body}");
        body.as_array().cloned().unwrap()
    }
}

async fn read_json(response: reqwest::Response) -> (StatusCode, Value) {
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    let body = response.json::<Value>().await.unwrap();
    (status, body)
}
