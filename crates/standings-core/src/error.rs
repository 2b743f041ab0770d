use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("Failed to parse {file}: {message}")]
    ParseFailed { file: String, message: String },

    #[error("No results could be read from the batch")]
    EmptyBatch,

    #[error("Batch worker stopped before the batch was finalized")]
    BatchInterrupted,

    #[error("Demo file not found: {0}")]
    DemoFileNotFound(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Config write error: {0}")]
    ConfigWriteError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    pub(crate) fn parse_failed(file: &str, message: impl Into<String>) -> Self {
        Error::ParseFailed {
            file: file.to_string(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::ConfigWriteError(e.to_string())
    }
}
