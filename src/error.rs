use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing theme")]
    MissingInput,

    #[error("Invalid system prompt selected: {0}")]
    InvalidSelection(String),

    #[error("Backend transport error: {0}")]
    BackendTransport(String),

    #[error("Backend protocol error: {0}")]
    BackendProtocol(String),

    #[error("Failed to read history file: {0}")]
    StorageRead(String),

    #[error("Failed to write history file: {0}")]
    StorageWrite(String),

    #[error("Failed to parse history file: {0}")]
    StorageParse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Errors caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::MissingInput | Error::InvalidSelection(_))
    }

    pub fn is_backend_error(&self) -> bool {
        matches!(self, Error::BackendTransport(_) | Error::BackendProtocol(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::BackendTransport(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
