//! Sparse → dense expansion.
//!
//! Both mappings are first flattened into one [`MatrixSlot`] per output
//! row/column.  A cell is then a single lookup:
//!
//! | origin slot | destination slot | cell value              |
//! |-------------|------------------|-------------------------|
//! | `Placed(o)` | `Placed(d)`      | `value(o, d, a)`        |
//! | `Unplaced`  | *any*            | `default_value(a)`      |
//! | *any*       | `Unplaced`       | `default_value(a)`      |
//!
//! Every name in an origin group gets the same row, so each distinct origin
//! slot's row is built once and copied for the rest of its group.

use log::debug;

use od_core::{MatrixSlot, Role};

use crate::{DenseCostMatrix, ExpandedCosts, IndexMapping, MatrixError, MatrixResult, SparseCosts};

/// Expand `sparse` into one dense matrix per cost attribute.
///
/// # Errors
///
/// - [`MatrixError::NoCostAttributes`] if the matrix has no attributes.
/// - [`MatrixError::NoOrigins`] / [`MatrixError::NoDestinations`] if either
///   mapping is empty.
/// - [`MatrixError::IndexOutOfRange`] if a mapping holds a placed index the
///   sparse matrix does not cover.
///
/// No matrix is returned unless every precondition holds.
pub fn expand<S: SparseCosts + ?Sized>(
    sparse:       &S,
    origins:      &IndexMapping,
    destinations: &IndexMapping,
) -> MatrixResult<ExpandedCosts> {
    // ── Preconditions ─────────────────────────────────────────────────────
    if sparse.attribute_count() == 0 {
        return Err(MatrixError::NoCostAttributes);
    }
    if origins.is_empty() {
        return Err(MatrixError::NoOrigins);
    }
    if destinations.is_empty() {
        return Err(MatrixError::NoDestinations);
    }
    check_range(origins, Role::Origin, sparse.unique_origin_count())?;
    check_range(destinations, Role::Destination, sparse.unique_destination_count())?;

    // ── Flatten groups into row / column slots ────────────────────────────
    let row_slots = origins.flatten();
    let col_slots = destinations.flatten();
    let (rows, cols) = (row_slots.len(), col_slots.len());

    debug!(
        "expanding {} x {} unique into {rows} x {cols} dense, {} attribute(s)",
        sparse.unique_origin_count(),
        sparse.unique_destination_count(),
        sparse.attribute_count(),
    );

    // ── One matrix per attribute ──────────────────────────────────────────
    let mut matrices = Vec::with_capacity(sparse.attribute_count());
    let mut row_buf = vec![0.0; cols];

    for (a, name) in sparse.attribute_names().iter().enumerate() {
        let default = sparse.default_value(a);
        let mut dense = DenseCostMatrix::with_capacity(name.clone(), rows, cols);

        let mut built_for: Option<MatrixSlot> = None;
        for &origin in &row_slots {
            // Rows arrive grouped by slot, so a change of slot means a new group.
            if built_for != Some(origin) {
                fill_row(&mut row_buf, sparse, origin, &col_slots, a, default);
                built_for = Some(origin);
            }
            dense.push_row(&row_buf);
        }

        matrices.push(dense);
    }

    Ok(ExpandedCosts {
        origin_names:      origins.names().map(str::to_owned).collect(),
        destination_names: destinations.names().map(str::to_owned).collect(),
        attribute_names:   sparse.attribute_names().to_vec(),
        matrices,
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn fill_row<S: SparseCosts + ?Sized>(
    row:       &mut [f64],
    sparse:    &S,
    origin:    MatrixSlot,
    col_slots: &[MatrixSlot],
    attribute: usize,
    default:   f64,
) {
    let Some(o) = origin.index() else {
        row.fill(default);
        return;
    };
    for (cell, dest) in row.iter_mut().zip(col_slots) {
        *cell = match dest {
            MatrixSlot::Placed(d) => sparse.value(o, *d, attribute),
            MatrixSlot::Unplaced => default,
        };
    }
}

fn check_range(mapping: &IndexMapping, role: Role, count: usize) -> MatrixResult<()> {
    match mapping.max_placed() {
        Some(index) if index.index() >= count => {
            Err(MatrixError::IndexOutOfRange { role, index, count })
        }
        _ => Ok(()),
    }
}
