// Error types for randomstar.
// Covers GitHub API errors, cache errors, and general application errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RandomStarError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("GitHub API {status}: {reason}")]
    ApiStatus { status: StatusCode, reason: String },

    #[error("no starred repos found for user \"{0}\"")]
    NoStars(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RandomStarError>;
