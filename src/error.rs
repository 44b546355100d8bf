//! Error types for tomo.

use thiserror::Error;

/// Errors surfaced by the application shell.
///
/// The session clock itself never fails; these cover configuration,
/// terminal setup, and serialization. Sink delivery failures are
/// reported on the UI status line and deliberately never become
/// errors.
#[derive(Debug, Error)]
pub enum TomoError {
    /// Configuration or terminal setup error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
