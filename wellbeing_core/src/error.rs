//! Error types for the wellbeing_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for wellbeing_core operations
///
/// Bad user input (non-numeric menu choices, out-of-range ratings) is never
/// an error here; the session controller re-prompts for those.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input stream reached end-of-file while a prompt was waiting
    #[error("input stream closed")]
    InputClosed,
}
