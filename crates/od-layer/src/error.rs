//! Layer error type.

use std::path::PathBuf;

use thiserror::Error;

use od_core::{CoreError, PlacementKey, Role};
use od_matrix::MatrixError;

/// Errors produced by `od-layer`.
///
/// Each message says what was found and what was expected, so a failed run
/// can be diagnosed from the message alone.
#[derive(Debug, Error)]
pub enum LayerError {
    #[error("Layer file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unable to open layer file {}: {source}", .path.display())]
    Open {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("unable to parse layer file {}: {source}", .path.display())]
    Parse {
        path:   PathBuf,
        source: serde_json::Error,
    },

    #[error("layer file {} is a '{found}' layer; expected a network_analysis layer", .path.display())]
    NotNetworkAnalysisLayer {
        path:  PathBuf,
        found: String,
    },

    #[error("layer file {} uses solver '{found}'; it must be an od_cost_matrix layer", .path.display())]
    NotOdCostMatrix {
        path:  PathBuf,
        found: String,
    },

    #[error(
        "layer file {} has no usable OD matrix result ({reason}); \
         solve it as a full matrix without OD lines and try again",
        .path.display()
    )]
    NotSolved {
        path:   PathBuf,
        reason: &'static str,
    },

    #[error("unable to get {} table from the layer's location classes", .0.class_name())]
    MissingClass(Role),

    #[error("{class} table is missing field(s) {missing:?}: CurbApproach and Name fields must be present")]
    MissingFields {
        class:   &'static str,
        missing: Vec<&'static str>,
    },

    #[error("{role} row {row} has no network location")]
    UnresolvedLocation { role: Role, row: usize },

    #[error("{role} row {row} is located but has no network position")]
    MissingPosition { role: Role, row: usize },

    #[error("{role} index table maps {key} to both {first} and {second}")]
    ConflictingIndex {
        role:   Role,
        key:    PlacementKey,
        first:  i64,
        second: i64,
    },

    #[error("invalid matrix result: {0}")]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type LayerResult<T> = Result<T, LayerError>;
