//! The `OutputWriter` trait and the driver that feeds it.

use log::info;

use od_matrix::ExpandedCosts;

use crate::{OutputError, OutputResult};

/// Trait implemented by output backends.
pub trait OutputWriter {
    /// Write the dense matrix of attribute `attribute`.
    fn write_matrix(&mut self, costs: &ExpandedCosts, attribute: usize) -> OutputResult<()>;

    /// Write the flat table carrying every attribute for every OD pair.
    fn write_flat_table(&mut self, costs: &ExpandedCosts) -> OutputResult<()>;
}

/// Write every output file for `costs`: the flat table once (named after the
/// impedance attribute) and one matrix per attribute.
///
/// `costs` is checked before anything is written, so a malformed expansion
/// produces no files.
pub fn write_all<W: OutputWriter + ?Sized>(writer: &mut W, costs: &ExpandedCosts) -> OutputResult<()> {
    validate(costs)?;

    for attribute in 0..costs.matrices.len() {
        if attribute == 0 {
            writer.write_flat_table(costs)?;
        }
        writer.write_matrix(costs, attribute)?;
    }

    info!(
        "wrote {} matrix file(s) and 1 flat table for {} x {} locations",
        costs.matrices.len(),
        costs.origin_names.len(),
        costs.destination_names.len(),
    );
    Ok(())
}

/// Reject expansions the CSV layouts cannot represent.
pub(crate) fn validate(costs: &ExpandedCosts) -> OutputResult<()> {
    if costs.attribute_names.is_empty() || costs.matrices.is_empty() {
        return Err(OutputError::Empty("cost attributes"));
    }
    if costs.origin_names.is_empty() {
        return Err(OutputError::Empty("origins"));
    }
    if costs.destination_names.is_empty() {
        return Err(OutputError::Empty("destinations"));
    }
    if costs.attribute_names.len() != costs.matrices.len() {
        return Err(OutputError::AttributeCountMismatch {
            names:    costs.attribute_names.len(),
            matrices: costs.matrices.len(),
        });
    }

    let (rows, cols) = (costs.origin_names.len(), costs.destination_names.len());
    for m in &costs.matrices {
        if m.rows() != rows || m.cols() != cols {
            return Err(OutputError::ShapeMismatch {
                attribute: m.attribute.clone(),
                rows,
                cols,
                got_rows: m.rows(),
                got_cols: m.cols(),
            });
        }
    }
    Ok(())
}
