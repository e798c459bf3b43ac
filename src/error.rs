// src/error.rs

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can abort a run.
#[derive(Debug, Error)]
pub enum KingsError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("invalid reign years {value:?}: {reason}")]
    InvalidYears { value: String, reason: String },

    #[error("malformed monarch JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset contains no monarchs")]
    EmptyDataset,

    #[error("writing report: {0}")]
    Io(#[from] std::io::Error),
}

impl KingsError {
    /// Fetch failures are reported and end the run normally; everything else is fatal.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, KingsError::Transport { .. } | KingsError::HttpStatus { .. })
    }
}

pub type KingsResult<T> = Result<T, KingsError>;
