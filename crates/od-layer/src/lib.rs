//! `od-layer` — solved network-analysis layers.
//!
//! The network engine is a black box that has already solved an OD cost
//! matrix.  A *layer file* (JSON) captures what the exporter needs from it:
//! the solver settings, the deduplicated result, the `Origins` and
//! `Destinations` location classes, and the placement-key → matrix-index
//! table.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`session`] | `EngineSession` (scoped; the only way to open a layer)      |
//! | [`source`]  | `CostMatrixSource`, `LocationSource` traits                 |
//! | [`layer`]   | `SolvedLayer` (implements both traits and `IndexLookup`)    |
//! | [`model`]   | Serde records mirroring the layer file                      |
//! | [`error`]   | `LayerError`, `LayerResult<T>`                              |
//!
//! # Usage
//!
//! ```rust,ignore
//! let session = EngineSession::acquire();
//! let layer = session.open_layer(Path::new("commute.json"))?;
//! let sparse = layer.cost_matrix()?;
//! let origins = layer.locations(Role::Origin, UnresolvedPolicy::Skip)?;
//! ```

pub mod error;
pub mod layer;
pub mod model;
pub mod session;
pub mod source;

#[cfg(test)]
mod tests;

pub use error::{LayerError, LayerResult};
pub use layer::SolvedLayer;
pub use session::EngineSession;
pub use source::{CostMatrixSource, LocationSource};
