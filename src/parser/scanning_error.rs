//! Error types for configuring the scanner.
//!
//! Scanning itself never fails: missing blocks, truncated blocks and
//! unexpected lines degrade to partial or empty results. The only errors
//! are invalid settings rejected when building a
//! [BlockScanner](crate::nexus::BlockScanner).

use thiserror::Error;

// =#========================================================================#=
// SCANNING ERROR
// =#========================================================================$=
/// Errors raised while configuring a scanner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanningError {
    /// Burnin percentage outside of `[0.0, 1.0)`.
    #[error("Invalid burnin percentage {0} - must be in [0.0, 1.0)")]
    InvalidBurnin(f64),
}

/// A convenience `Result` type alias using [ScanningError].
pub type Result<T> = std::result::Result<T, ScanningError>;
