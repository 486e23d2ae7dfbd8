//! Error types for the fortune ledger.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors raised while loading or saving ledger state.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Reading or writing a storage file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The stored blob is not valid ledger JSON.
    #[error("malformed ledger state: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored blob parses but contradicts the ledger's own structure.
    #[error("inconsistent ledger state: {0}")]
    Inconsistent(String),

    /// The stored blob was written by an incompatible version.
    #[error("unsupported ledger state version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in storage.
        found: u32,
        /// Version this build reads and writes.
        expected: u32,
    },

    /// The storage backend refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
