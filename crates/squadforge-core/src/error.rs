//! Error types for SquadForge

use thiserror::Error;

/// Main error type for SquadForge operations.
///
/// Infeasibility is deliberately not an error: a solve that proves no
/// squad satisfies the constraints returns a [`crate::Selection`] with a
/// non-optimal status instead.
#[derive(Debug, Error)]
pub enum SquadForgeError {
    /// Malformed or unsupported input to the model builder or encoder.
    ///
    /// Raised before any solver work begins: missing role mappings,
    /// unsupported (formation, style) combinations, empty rosters,
    /// locks that reference unknown players or impossible roles.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The solver backend itself failed (not the same as infeasibility).
    #[error("Solver failure: {0}")]
    Solver(String),

    /// Internal error (should not occur in normal operation).
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error reading a roster or data file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a roster document.
    #[error("Roster parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for SquadForge operations
pub type Result<T> = std::result::Result<T, SquadForgeError>;
