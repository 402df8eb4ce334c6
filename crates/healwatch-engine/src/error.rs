//! Error types for healwatch-engine

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or running a healing suite
#[derive(Debug, Error)]
pub enum EngineError {
    /// Suite file could not be read
    #[error("failed to read suite {path}: {source}")]
    SuiteIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Suite file is not a JSON array of test cases
    #[error("invalid suite {path}: {source}")]
    SuiteParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Suite has no test cases
    #[error("no test cases found")]
    EmptySuite,
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
