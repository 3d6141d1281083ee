//! Strongly typed internal matrix index.
//!
//! The engine deduplicates co-located locations, so a `MatrixIndex` names a
//! row (origin role) or column (destination role) of the *sparse* matrix, not
//! a named location.  It is `Copy + Ord + Hash` so it can key ordered maps
//! without ceremony.

use std::fmt;

/// Index of a unique placed location in the solver's sparse matrix.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MatrixIndex(pub u32);

impl MatrixIndex {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for MatrixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatrixIndex({})", self.0)
    }
}

impl From<MatrixIndex> for usize {
    #[inline(always)]
    fn from(id: MatrixIndex) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for MatrixIndex {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<MatrixIndex, Self::Error> {
        u32::try_from(n).map(MatrixIndex)
    }
}
