//! Error types for Seaquest

use thiserror::Error;

/// Errors that stop a run before or outside the iteration loop.
///
/// Per-iteration transport failures are not represented here; they travel
/// as [`crate::client::TransportError`] values inside an outcome.
#[derive(Error, Debug)]
pub enum SeaquestError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, SeaquestError>;
