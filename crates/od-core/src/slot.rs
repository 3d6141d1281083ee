//! Placement-aware matrix slot.
//!
//! Network engines commonly report "could not be placed on the network" as a
//! negative matrix index.  `MatrixSlot` makes that an explicit variant.  The
//! derive order puts `Unplaced` before every `Placed(_)`, so an ordered map
//! keyed by `MatrixSlot` yields the unplaced group first and then placed
//! indices ascending.  That order is the row/column order of the dense output.

use std::fmt;

use crate::{CoreError, CoreResult, MatrixIndex};

/// Where a location lives in the sparse matrix, if anywhere.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum MatrixSlot {
    /// The engine could not snap the location onto the network.
    Unplaced,
    /// Row/column index in the sparse matrix.
    Placed(MatrixIndex),
}

impl MatrixSlot {
    /// Convert a raw engine index.  Any negative value means unplaced.
    pub fn from_raw(raw: i64) -> CoreResult<Self> {
        if raw < 0 {
            return Ok(MatrixSlot::Unplaced);
        }
        u32::try_from(raw)
            .map(|i| MatrixSlot::Placed(MatrixIndex(i)))
            .map_err(|_| CoreError::IndexOverflow(raw))
    }

    /// The placed index, or `None` for [`MatrixSlot::Unplaced`].
    #[inline]
    pub fn index(self) -> Option<MatrixIndex> {
        match self {
            MatrixSlot::Placed(i) => Some(i),
            MatrixSlot::Unplaced => None,
        }
    }
}

impl fmt::Display for MatrixSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixSlot::Unplaced => f.write_str("unplaced"),
            MatrixSlot::Placed(i) => write!(f, "{i}"),
        }
    }
}
