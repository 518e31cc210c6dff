use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error for {url}: {message}")]
    HttpError { url: String, message: String },

    #[error("{url} responded with status {status}")]
    StatusError { url: String, status: u16 },

    #[error("JSON parsing error ({origin}): {message}")]
    JsonError { origin: String, message: String },

    #[error("Champion {id} is missing from its own detail response for version {version}")]
    MissingChampion { id: String, version: String },

    #[error("Versions feed returned {0} version(s), at least 2 are needed")]
    NotEnoughVersions(usize),

    #[error("I/O error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn json(origin: impl Into<String>, err: serde_json::Error) -> Self {
        AppError::JsonError {
            origin: origin.into(),
            message: err.to_string(),
        }
    }
}
