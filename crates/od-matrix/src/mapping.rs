//! Matrix slot → location names.
//!
//! # Ordering
//!
//! Groups are held in a `BTreeMap<MatrixSlot, Vec<String>>`.  Iteration
//! therefore visits the unplaced group first (if any) and then placed indices
//! ascending.  That walk order *is* the row order (origins) or column order
//! (destinations) of every dense matrix, so it must not change.
//!
//! Within a group, names keep their input order and duplicates are kept.

use std::collections::BTreeMap;

use log::debug;

use od_core::{Location, MatrixIndex, MatrixSlot, Role};

use crate::{IndexLookup, MatrixError, MatrixResult};

// ── IndexMapping ──────────────────────────────────────────────────────────────

/// Ordered mapping from matrix slot to the names sharing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexMapping {
    groups: BTreeMap<MatrixSlot, Vec<String>>,
}

impl IndexMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` to the group for `slot`, creating the group if absent.
    pub fn push(&mut self, slot: MatrixSlot, name: impl Into<String>) {
        self.groups.entry(slot).or_default().push(name.into());
    }

    /// Total number of names across all groups (the dense dimension).
    pub fn name_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Number of distinct slots.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Names sharing `slot`, in input order.
    pub fn group(&self, slot: MatrixSlot) -> Option<&[String]> {
        self.groups.get(&slot).map(Vec::as_slice)
    }

    /// Groups in slot order.
    pub fn groups(&self) -> impl Iterator<Item = (MatrixSlot, &[String])> + '_ {
        self.groups.iter().map(|(slot, names)| (*slot, names.as_slice()))
    }

    /// All names flattened into dense row/column order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.values().flatten().map(String::as_str)
    }

    /// One slot per flat row/column, in the same order as [`names`](Self::names).
    pub fn flatten(&self) -> Vec<MatrixSlot> {
        let mut flat = Vec::with_capacity(self.name_count());
        for (slot, names) in &self.groups {
            flat.extend(std::iter::repeat_n(*slot, names.len()));
        }
        flat
    }

    /// Largest placed index, if any location was placed.
    pub fn max_placed(&self) -> Option<MatrixIndex> {
        self.groups.keys().next_back().and_then(|slot| slot.index())
    }
}

// ── build_mapping ─────────────────────────────────────────────────────────────

/// Group `locations` by the matrix slot the solver assigned them.
///
/// Unplaced locations go to [`MatrixSlot::Unplaced`] without consulting
/// `lookup`; placed ones are resolved through `lookup`.  An absent name is
/// stored as the empty string.
///
/// # Errors
///
/// [`MatrixError::EmptyLocationSet`] if `locations` is empty.
pub fn build_mapping<L: IndexLookup + ?Sized>(
    locations: &[Location],
    role:      Role,
    lookup:    &L,
) -> MatrixResult<IndexMapping> {
    let mut mapping = IndexMapping::new();

    for loc in locations {
        let slot = match &loc.placement {
            Some(key) => lookup.find_index(key, role),
            None => MatrixSlot::Unplaced,
        };
        mapping.push(slot, loc.name_or_empty());
    }

    if mapping.is_empty() {
        return Err(MatrixError::EmptyLocationSet(role));
    }

    debug!(
        "{role} mapping: {} names in {} groups ({} unplaced)",
        mapping.name_count(),
        mapping.group_count(),
        mapping.group(MatrixSlot::Unplaced).map_or(0, <[String]>::len),
    );
    Ok(mapping)
}
