//! This module defines the single, unified error type for the entire
//! orthopress library. It uses the `thiserror` crate to provide ergonomic,
//! context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrthopressError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    #[error("Invalid arithmetic coder window width {0}: must be between 2 and 53 bits")]
    InvalidWindowWidth(u32),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    #[error("Usage error: {0}")]
    Usage(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., the
    /// corpus file could not be read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while reading a
    /// harness configuration file or serializing a report.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
