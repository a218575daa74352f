use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure loading the workout history at the data-layer boundary.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to read workout history {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("workout history is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure loading the table configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config is not valid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("wide_breakpoint must be a positive width, got {0}")]
    Breakpoint(f32),
}

/// Outcome reported by a clipboard facility.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Outcome reported by a navigation facility.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("navigation to {link} failed: {reason}")]
    Follow { link: String, reason: String },
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable(err.to_string()),
            other => ClipboardError::Write(other.to_string()),
        }
    }
}
