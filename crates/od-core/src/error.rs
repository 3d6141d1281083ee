//! Core error type.
//!
//! Sub-crates define their own error enums (`MatrixError`, `LayerError`,
//! `OutputError`) and wrap `CoreError` as one variant where they need it.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by `od-core` conversions and configuration checks.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("engine index {0} does not fit in a matrix index (max {max})", max = u32::MAX)]
    IndexOverflow(i64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("output directory {} exists but is not a directory", .0.display())]
    OutputDirNotADirectory(PathBuf),
}

/// Shorthand result type for `od-core`.
pub type CoreResult<T> = Result<T, CoreError>;
