//! Error types for export operations

use thiserror::Error;

/// Errors that can terminate an export
#[derive(Error, Debug)]
pub enum ExportError {
    /// The exporter is missing required configuration. Not retried; the
    /// caller must fix the configuration before invoking again.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The mesh source has not produced any chunks yet. Recoverable by the
    /// operator (scan more surface, then retry).
    #[error("No mesh chunks available from the source")]
    NoData,

    /// The destination could not be opened or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
