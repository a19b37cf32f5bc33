//! Error types for circle-points

use thiserror::Error;

/// Main error type for circle-points operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    #[error("Invalid point count: {0}")]
    InvalidPointCount(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for circle-points operations
pub type Result<T> = std::result::Result<T, Error>;
