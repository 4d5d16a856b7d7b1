//! Service configuration
//!
//! Values are layered, lowest priority first: built-in defaults, a TOML
//! file, `PROMPT_FORGE_*` environment variables, then command-line flags
//! (applied by the binary).

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::backend::{ollama::DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::error::{Error, Result};
use crate::history::DEFAULT_HISTORY_FILE;

const ENV_PREFIX: &str = "PROMPT_FORGE_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the Ollama-compatible generation service
    pub backend_url: String,
    pub default_model: String,
    pub history_file: PathBuf,
    /// Directory of static UI assets; nothing is served when unset
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let public = PathBuf::from("public");
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            backend_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            static_dir: public.is_dir().then_some(public),
        }
    }
}

/// Location of the per-user config file, e.g. `~/.config/prompt-forge/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "prompt-forge", "prompt-forge")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Load configuration from `path`, or from the per-user file if it exists,
    /// then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.merge_env_vars(&std::env::vars().collect())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `PROMPT_FORGE_*` overrides from `vars`
    pub fn merge_env_vars(&mut self, vars: &HashMap<String, String>) -> Result<()> {
        let get = |name: &str| vars.get(&format!("{ENV_PREFIX}{name}"));

        if let Some(host) = get("HOST") {
            self.host = host.clone();
        }
        if let Some(port) = get("PORT") {
            self.port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid port: {port}")))?;
        }
        if let Some(url) = get("BACKEND_URL") {
            self.backend_url = url.clone();
        }
        if let Some(model) = get("DEFAULT_MODEL") {
            self.default_model = model.clone();
        }
        if let Some(file) = get("HISTORY_FILE") {
            self.history_file = PathBuf::from(file);
        }
        if let Some(dir) = get("STATIC_DIR") {
            self.static_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }

        Ok(())
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
