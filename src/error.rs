//! Error types for rowscope

use thiserror::Error;

/// Errors raised while reading a store or rendering its rows
#[derive(Debug, Error)]
pub enum Error {
    /// The fetch completed but matched no rows. Semantically a normal
    /// "no data" outcome, kept distinct from connectivity failures.
    #[error("no rows returned for prefix: {prefix}")]
    EmptyResult { prefix: String },

    /// The named table does not exist in the store
    #[error("table not found: {table}")]
    TableNotFound { table: String },

    /// I/O failure against the store or the output sink, surfaced verbatim
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The snapshot file exists but is not valid snapshot JSON
    #[error("malformed snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
