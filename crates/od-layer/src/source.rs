//! Engine collaborator traits.
//!
//! The exporter talks to the engine through these two traits plus
//! [`od_matrix::IndexLookup`], so a different engine adapter can replace the
//! layer-file reader without touching mapping or expansion.

use od_core::{Location, Role, UnresolvedPolicy};
use od_matrix::SparseCostMatrix;

use crate::LayerResult;

/// Access to the solved, deduplicated cost matrix.
pub trait CostMatrixSource {
    /// The solver's matrix result.
    ///
    /// Fails when there is no valid full-matrix result; this crate never
    /// solves.
    fn cost_matrix(&self) -> LayerResult<&SparseCostMatrix>;
}

/// Ordered listing of the locations requested for one side of the matrix.
pub trait LocationSource {
    /// Locations for `role`, in table order.
    ///
    /// Rows whose network location cannot be resolved at all are skipped or
    /// rejected according to `policy`.
    fn locations(&self, role: Role, policy: UnresolvedPolicy) -> LayerResult<Vec<Location>>;
}
