//! Crate error type
//!
//! Only the platform edges fail; simulation functions are total.

use thiserror::Error;

/// Errors raised at the platform edges (configuration and DOM lookups)
#[derive(Error, Debug)]
pub enum PongError {
    /// A presentation element the renderer writes to is absent from the page
    #[error("Missing element #{0}")]
    MissingElement(String),

    /// Settings JSON could not be parsed or produced
    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// A settings file could not be read or written
    #[error("Settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The host environment refused an operation (no window, storage denied, ...)
    #[error("Platform error: {0}")]
    Platform(String),
}
