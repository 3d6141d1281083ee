//! `od-core` — foundational types for the OD cost-matrix exporter.
//!
//! This crate is a dependency of every other `od-*` crate.  It has no `od-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `MatrixIndex`                                           |
//! | [`slot`]      | `MatrixSlot` (`Unplaced` / `Placed(index)`)             |
//! | [`location`]  | `Role`, `CurbApproach`, `PlacementKey`, `Location`      |
//! | [`config`]    | `RunConfig`, `UnresolvedPolicy`                         |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on the value types read from layer files and configs (`MatrixIndex`, `Role`, `CurbApproach`, `PlacementKey`, `RunConfig`, `UnresolvedPolicy`). Required by `od-layer`. |
//!
//! `Location` and `MatrixSlot` carry no serde derives; they are built from
//! the records `od-layer` deserialises.

pub mod config;
pub mod error;
pub mod ids;
pub mod location;
pub mod slot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RunConfig, UnresolvedPolicy};
pub use error::{CoreError, CoreResult};
pub use ids::MatrixIndex;
pub use location::{CurbApproach, Location, PlacementKey, Role};
pub use slot::MatrixSlot;
