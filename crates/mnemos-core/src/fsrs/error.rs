//! Scheduler error types

/// Errors raised at the scheduler boundary
///
/// Numeric clamps inside the model are policy and never produce an error;
/// only malformed configuration and out-of-range enum values do.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FsrsError {
    /// Weight vector has the wrong number of entries
    #[error("Invalid weights: expected {expected} values, got {actual}")]
    InvalidWeights {
        /// Number of weights the model requires
        expected: usize,
        /// Number of weights supplied
        actual: usize,
    },
    /// Target retention outside the open interval (0, 1)
    #[error("Invalid request retention: {0} (must be in (0, 1))")]
    InvalidRetention(f64),
    /// Maximum interval of zero days
    #[error("Invalid maximum interval: {0} (must be at least 1 day)")]
    InvalidMaximumInterval(u32),
    /// Rating value outside 1..=4
    #[error("Invalid rating: {0} (expected 1=Again, 2=Hard, 3=Good, 4=Easy)")]
    InvalidRating(i64),
    /// State value outside 0..=3
    #[error("Invalid state: {0} (expected 0=New, 1=Learning, 2=Review, 3=Relearning)")]
    InvalidState(i64),
    /// Malformed parameter document
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    /// IO error while reading a parameter file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Scheduler result type
pub type Result<T> = std::result::Result<T, FsrsError>;
