//! Mapping and expansion error type.

use od_core::{MatrixIndex, Role};
use thiserror::Error;

/// Errors produced by `od-matrix`.
///
/// Every variant is fatal for a run: expansion never yields a partial or
/// zero-filled matrix.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("no {0} locations to map: at least one origin and one destination are required")]
    EmptyLocationSet(Role),

    #[error("there are no cost attributes: at least one attribute is required")]
    NoCostAttributes,

    #[error("there are no origins: at least one origin is required")]
    NoOrigins,

    #[error("there are no destinations: at least one destination is required")]
    NoDestinations,

    #[error("{role} {index} is outside the solved matrix ({count} unique {role}s)")]
    IndexOutOfRange {
        role:  Role,
        index: MatrixIndex,
        count: usize,
    },

    #[error(
        "{origins} origins x {destinations} destinations x {attributes} attributes \
         does not fit in memory"
    )]
    CountOverflow {
        origins:      usize,
        destinations: usize,
        attributes:   usize,
    },

    #[error("{what} has {got} entries, expected {expected}")]
    LengthMismatch {
        what:     &'static str,
        expected: usize,
        got:      usize,
    },
}

pub type MatrixResult<T> = Result<T, MatrixError>;
