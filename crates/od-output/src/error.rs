//! Error types for od-output.

use thiserror::Error;

/// Errors that can occur when writing cost-matrix output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("there are no {0}")]
    Empty(&'static str),

    #[error("attribute {attribute} has {got_rows} x {got_cols} costs, expected {rows} x {cols}")]
    ShapeMismatch {
        attribute: String,
        rows:      usize,
        cols:      usize,
        got_rows:  usize,
        got_cols:  usize,
    },

    #[error("{names} attribute name(s) but {matrices} cost matrices")]
    AttributeCountMismatch { names: usize, matrices: usize },

    #[error("attribute index {index} out of range ({count} attributes)")]
    NoSuchAttribute { index: usize, count: usize },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
