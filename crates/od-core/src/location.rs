//! Named origin/destination locations and their network placement.

use std::fmt;

// ── Role ──────────────────────────────────────────────────────────────────────

/// Which side of the matrix a location set feeds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    Origin,
    Destination,
}

impl Role {
    /// Name of the engine's location class table for this role.
    pub fn class_name(self) -> &'static str {
        match self {
            Role::Origin => "Origins",
            Role::Destination => "Destinations",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Origin => f.write_str("origin"),
            Role::Destination => f.write_str("destination"),
        }
    }
}

// ── CurbApproach ──────────────────────────────────────────────────────────────

/// Side of the street a vehicle must arrive on / depart from.
///
/// Part of the placement key: the same network position approached from a
/// different side can resolve to a different matrix index.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CurbApproach {
    #[default]
    EitherSide,
    RightSide,
    LeftSide,
    NoUTurn,
}

// ── PlacementKey ──────────────────────────────────────────────────────────────

/// Opaque key the engine uses to look up a placed location's matrix index.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementKey {
    /// Engine-assigned position on the network graph.
    pub position: u64,
    pub approach: CurbApproach,
}

impl PlacementKey {
    pub fn new(position: u64, approach: CurbApproach) -> Self {
        Self { position, approach }
    }
}

impl fmt::Display for PlacementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:?}", self.position, self.approach)
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// A named origin or destination as listed by the engine.
///
/// Names may be absent, empty, or duplicated; all three are legal.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Location {
    pub name: Option<String>,
    /// `None` when the engine could not snap the location onto the network.
    pub placement: Option<PlacementKey>,
}

impl Location {
    /// A location snapped onto the network.
    pub fn placed(name: impl Into<String>, key: PlacementKey) -> Self {
        Self { name: Some(name.into()), placement: Some(key) }
    }

    /// A location the engine could not place.
    pub fn unplaced(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), placement: None }
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// The name, with an absent name read as empty.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
