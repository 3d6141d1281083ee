//! The solver's placement-key → matrix-index lookup.

use od_core::{MatrixSlot, PlacementKey, Role};

/// Resolve a placed location to its row (origin) or column (destination) in
/// the sparse matrix.
///
/// Implemented by the engine adapter (`od_layer::SolvedLayer`) and by test
/// fixtures.  The lookup is read-only and is assumed total over placed
/// locations; an implementation that cannot resolve a key should return
/// [`MatrixSlot::Unplaced`] so the location falls back to default costs.
pub trait IndexLookup {
    fn find_index(&self, key: &PlacementKey, role: Role) -> MatrixSlot;
}
