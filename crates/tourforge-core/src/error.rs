//! Error types for TourForge

use thiserror::Error;

/// Main error type for TourForge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourForgeError {
    /// The requested board cannot be handled by the construction method.
    ///
    /// Raised before any tour state is allocated. Retrying with the same
    /// shape always fails again.
    #[error("unsupported board configuration: {rows}x{cols}")]
    InvalidConfiguration { rows: i64, cols: i64 },

    /// Validity checking, the base tour table and the quadrant split policy
    /// disagree. Never expected for a board that passed validation.
    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),

    /// Error in tour configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TourForgeError {
    /// Returns `true` if no tour can be constructed for the requested shape.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, TourForgeError::InvalidConfiguration { .. })
    }
}

/// Result type alias for TourForge operations
pub type Result<T> = std::result::Result<T, TourForgeError>;
