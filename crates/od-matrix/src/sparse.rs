//! The solver's deduplicated cost matrix.
//!
//! # Data layout
//!
//! [`SparseCostMatrix`] keeps every cost in one flat `Vec<f64>` ordered
//! `[origin][destination][attribute]`:
//!
//! ```text
//! values[ (o * destination_count + d) * attribute_count + a ]
//! ```
//!
//! Attribute 0 is the impedance the solver optimised on; the rest are
//! accumulated attributes.

use od_core::MatrixIndex;

use crate::{MatrixError, MatrixResult};

// ── SparseCosts trait ─────────────────────────────────────────────────────────

/// Read-only view of a solved, deduplicated OD cost matrix.
///
/// [`expand`](crate::expand) only needs this trait, so an engine adapter can
/// serve costs straight from its own storage.
pub trait SparseCosts {
    /// Cost attribute names, impedance first.
    fn attribute_names(&self) -> &[String];

    /// Number of distinct placed origin indices.
    fn unique_origin_count(&self) -> usize;

    /// Number of distinct placed destination indices.
    fn unique_destination_count(&self) -> usize;

    /// Cost reported whenever either endpoint is unplaced.
    fn default_value(&self, attribute: usize) -> f64;

    /// Cost from `origin` to `destination` for `attribute`.
    ///
    /// Only called with in-range indices.
    fn value(&self, origin: MatrixIndex, destination: MatrixIndex, attribute: usize) -> f64;

    #[inline]
    fn attribute_count(&self) -> usize {
        self.attribute_names().len()
    }
}

// ── SparseCostMatrix ──────────────────────────────────────────────────────────

/// Owned, validated sparse cost matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseCostMatrix {
    attribute_names:   Vec<String>,
    origin_count:      usize,
    destination_count: usize,
    default_values:    Vec<f64>,
    values:            Vec<f64>,
}

impl SparseCostMatrix {
    /// Build a matrix from a flat `[origin][destination][attribute]` buffer.
    ///
    /// # Errors
    ///
    /// [`MatrixError::LengthMismatch`] if `default_values` does not have one
    /// entry per attribute or `values` does not hold exactly
    /// `origin_count * destination_count * attribute_count` costs, and
    /// [`MatrixError::CountOverflow`] if that product overflows `usize`.
    pub fn new(
        attribute_names:   Vec<String>,
        origin_count:      usize,
        destination_count: usize,
        default_values:    Vec<f64>,
        values:            Vec<f64>,
    ) -> MatrixResult<Self> {
        if default_values.len() != attribute_names.len() {
            return Err(MatrixError::LengthMismatch {
                what:     "default_values",
                expected: attribute_names.len(),
                got:      default_values.len(),
            });
        }
        let expected = value_count(origin_count, destination_count, attribute_names.len())?;
        if values.len() != expected {
            return Err(MatrixError::LengthMismatch {
                what: "values",
                expected,
                got: values.len(),
            });
        }
        Ok(Self {
            attribute_names,
            origin_count,
            destination_count,
            default_values,
            values,
        })
    }

    /// A matrix with every placed cost set to its attribute's default.
    ///
    /// Handy as a starting point for [`set`](Self::set).
    pub fn filled(
        attribute_names:   Vec<String>,
        origin_count:      usize,
        destination_count: usize,
        default_values:    Vec<f64>,
    ) -> MatrixResult<Self> {
        let pairs = value_count(origin_count, destination_count, 1)?;
        value_count(origin_count, destination_count, default_values.len())?;
        let values = (0..pairs)
            .flat_map(|_| default_values.iter().copied())
            .collect::<Vec<_>>();
        Self::new(attribute_names, origin_count, destination_count, default_values, values)
    }

    /// Overwrite one cost.
    ///
    /// # Panics
    /// Panics if any index is out of range.
    pub fn set(&mut self, origin: MatrixIndex, destination: MatrixIndex, attribute: usize, cost: f64) {
        let i = self.offset(origin, destination, attribute);
        self.values[i] = cost;
    }

    #[inline]
    fn offset(&self, origin: MatrixIndex, destination: MatrixIndex, attribute: usize) -> usize {
        assert!(origin.index() < self.origin_count, "{origin} out of range");
        assert!(destination.index() < self.destination_count, "{destination} out of range");
        debug_assert!(attribute < self.attribute_names.len());
        (origin.index() * self.destination_count + destination.index()) * self.attribute_names.len()
            + attribute
    }
}

impl SparseCosts for SparseCostMatrix {
    fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    fn unique_origin_count(&self) -> usize {
        self.origin_count
    }

    fn unique_destination_count(&self) -> usize {
        self.destination_count
    }

    fn default_value(&self, attribute: usize) -> f64 {
        self.default_values[attribute]
    }

    #[inline]
    fn value(&self, origin: MatrixIndex, destination: MatrixIndex, attribute: usize) -> f64 {
        self.values[self.offset(origin, destination, attribute)]
    }
}

/// Length of a flat `[origin][destination][attribute]` buffer.
fn value_count(origins: usize, destinations: usize, attributes: usize) -> MatrixResult<usize> {
    origins
        .checked_mul(destinations)
        .and_then(|pairs| pairs.checked_mul(attributes))
        .ok_or(MatrixError::CountOverflow { origins, destinations, attributes })
}
