use thiserror::Error;

/// Convenience result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Error type shared across ingestion and selection.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not conform to the expected chain shape (missing required
    /// columns, non-object JSON rows, unrecognized format, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A row value could not be read as a finite number. Raised by ingestion for
    /// unparsable cells and by the selector when a non-finite `strike` or
    /// `moneyness` reaches it.
    #[error("malformed row {row} column '{column}': {message} (raw='{raw}')")]
    MalformedRow {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// The caller supplied an invalid constant (e.g. a non-finite reference price).
    #[error("configuration error: {message}")]
    Configuration { message: String },
}
