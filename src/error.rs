//! Error types for the annealing core and its persistence boundary.

use thiserror::Error;

/// Errors surfaced by tour construction, configuration, and persistence.
///
/// A degenerate run (non-positive temperature or zero steps) is not an
/// error; [`Annealer::run`](crate::sa::Annealer::run) returns an empty trace
/// for it.
#[derive(Debug, Error)]
pub enum AnnealError {
    /// A tour's length disagrees with the configured city count.
    #[error("configuration mismatch: tour has {actual} cities, expected {expected}")]
    ConfigurationMismatch {
        /// City count the solution space was configured with.
        expected: usize,
        /// Length of the offending tour or city set.
        actual: usize,
    },

    /// A tour of the right length that is not a permutation of `0..n`.
    #[error("invalid tour: {reason}")]
    InvalidTour {
        /// What was wrong with it.
        reason: String,
    },

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Filesystem failure at the persistence boundary.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// Path being read or written.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Persisted state could not be encoded or decoded.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// City coordinates could not be read or written as CSV.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl AnnealError {
    /// Builds a [`AnnealError::ConfigurationMismatch`].
    pub fn mismatch(expected: usize, actual: usize) -> Self {
        AnnealError::ConfigurationMismatch { expected, actual }
    }

    /// Builds an [`AnnealError::Io`] for `path`.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        AnnealError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Returns `true` for [`AnnealError::ConfigurationMismatch`].
    pub fn is_mismatch(&self) -> bool {
        matches!(self, AnnealError::ConfigurationMismatch { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnnealError>;
