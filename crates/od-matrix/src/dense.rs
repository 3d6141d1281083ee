//! Expanded, one-row-per-name cost matrices.

use std::ops::Index;

// ── DenseCostMatrix ───────────────────────────────────────────────────────────

/// One cost attribute laid out as `rows × cols`, row-major.
///
/// Rows are named origins and columns named destinations, in the order of
/// [`IndexMapping::names`](crate::IndexMapping::names).
#[derive(Debug, Clone, PartialEq)]
pub struct DenseCostMatrix {
    pub attribute: String,
    rows:          usize,
    cols:          usize,
    data:          Vec<f64>,
}

impl DenseCostMatrix {
    pub(crate) fn with_capacity(attribute: impl Into<String>, rows: usize, cols: usize) -> Self {
        Self {
            attribute: attribute.into(),
            rows:      0,
            cols,
            data:      Vec::with_capacity(rows * cols),
        }
    }

    /// Append one full row.
    pub(crate) fn push_row(&mut self, row: &[f64]) {
        debug_assert_eq!(row.len(), self.cols);
        self.data.extend_from_slice(row);
        self.rows += 1;
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cost at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of range ({} columns)", self.cols);
        self.data[row * self.cols + col]
    }

    /// Costs of one origin row.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterator over rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // `chunks_exact(0)` panics; a zero-column matrix has no rows to yield.
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }
}

impl Index<(usize, usize)> for DenseCostMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(col < self.cols, "column {col} out of range ({} columns)", self.cols);
        &self.data[row * self.cols + col]
    }
}

// ── ExpandedCosts ─────────────────────────────────────────────────────────────

/// Everything the output layer needs: names in dense order plus one matrix
/// per cost attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedCosts {
    pub origin_names:      Vec<String>,
    pub destination_names: Vec<String>,
    /// Impedance first, index-aligned with `matrices`.
    pub attribute_names:   Vec<String>,
    pub matrices:          Vec<DenseCostMatrix>,
}

impl ExpandedCosts {
    /// The matrix of the attribute the solver optimised on.
    pub fn impedance(&self) -> &DenseCostMatrix {
        &self.matrices[0]
    }

    /// Costs of every attribute for one (origin row, destination column) pair.
    pub fn costs_at(&self, row: usize, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.matrices.iter().map(move |m| m.get(row, col))
    }
}
