use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the file and CLI boundary.
/// The rendering core is total and never returns these.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),
}

impl AppError {
    /// Stable identifier used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Read { .. } => "READ_ERROR",
            AppError::Write { .. } => "WRITE_ERROR",
            AppError::MalformedInput { .. } => "MALFORMED_INPUT",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::UnknownTemplate(_) => "UNKNOWN_TEMPLATE",
        }
    }

    /// Logs the error with its code.
    pub fn report(&self) {
        tracing::error!(code = self.code(), "{self}");
    }
}
