//! # Prompt Forge
//!
//! A small HTTP service that turns a short theme into a model-ready prompt by
//! sending one of several fixed instruction templates to a local Ollama
//! server, and keeps a JSON log of every result.
//!
//! ## Usage
//!
//! ```bash
//! prompt-forge serve [--port 3000] [--backend-url http://localhost:11434]
//! prompt-forge render realistic "a red fox in snow"
//! ```
//!
//! ## Modules
//!
//! - `templates` - Template keys and the instruction each one renders
//! - `backend` - Generation backend trait, Ollama client and test mock
//! - `history` - JSON history log with a single-writer queue
//! - `orchestrator` - Validates requests and drives one generation
//! - `api_server` - axum routes for generation, models and history
//! - `config` - Layered configuration (defaults, TOML, environment)
//! - `error` - Error kinds shared by every module
pub mod api_server;
pub mod backend;
pub mod config;
pub mod error;
pub mod history;
pub mod orchestrator;
pub mod templates;
