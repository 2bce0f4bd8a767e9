//! Error types for the jsonsalvage library.

use thiserror::Error;

/// Main error type for recovery operations.
///
/// These two variants are the only errors the public API ever raises.
/// Within the strategy chain, individual parse failures are soft: a strategy
/// that does not apply returns `None` so the next one gets a chance.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SalvageError {
    /// The input contains neither `{` nor `[`, so there is nothing to recover.
    #[error("no JSON-like structure found")]
    NoJsonStructure,

    /// A candidate was found but every recovery strategy returned no match.
    #[error("all recovery strategies failed")]
    AllStrategiesFailed,
}

/// Result type alias for recovery operations.
pub type Result<T> = std::result::Result<T, SalvageError>;
