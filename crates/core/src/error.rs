//! Error types for the hueforge core.

use thiserror::Error;

/// Errors produced by color parsing and palette construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A color string was not a 6-digit hex color (optional leading `#`).
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette scheme name was not recognized.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    /// A palette style name was not recognized.
    #[error("unknown palette style: {0}")]
    UnknownStyle(String),
}
