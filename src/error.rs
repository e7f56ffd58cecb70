// Error types for the debug console.
// Covers debug API transport errors, decoding errors, and configuration errors.

#![allow(dead_code)]

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Debug API error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
