//! `od-matrix` — rebuild dense OD cost matrices from a deduplicated result.
//!
//! A network solver stores one matrix row per *unique* placed origin and one
//! column per unique placed destination; co-located names share a row or
//! column, and locations that could not be placed have none at all.  This
//! crate turns that back into one row per named origin and one column per
//! named destination.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`lookup`]  | `IndexLookup` trait (placement key → matrix slot)           |
//! | [`mapping`] | `IndexMapping`, `build_mapping`                             |
//! | [`sparse`]  | `SparseCosts` trait, `SparseCostMatrix`                     |
//! | [`dense`]   | `DenseCostMatrix`, `ExpandedCosts`                          |
//! | [`expand`]  | `expand`                                                    |
//! | [`error`]   | `MatrixError`, `MatrixResult<T>`                            |
//!
//! # Usage
//!
//! ```rust,ignore
//! let origins = build_mapping(&origin_locations, Role::Origin, &layer)?;
//! let destinations = build_mapping(&destination_locations, Role::Destination, &layer)?;
//! let expanded = expand(&sparse, &origins, &destinations)?;
//! for m in &expanded.matrices {
//!     println!("{}: {} x {}", m.attribute, m.rows(), m.cols());
//! }
//! ```

pub mod dense;
pub mod error;
pub mod expand;
pub mod lookup;
pub mod mapping;
pub mod sparse;


pub use dense::{DenseCostMatrix, ExpandedCosts};
pub use error::{MatrixError, MatrixResult};
pub use expand::expand;
pub use lookup::IndexLookup;
pub use mapping::{IndexMapping, build_mapping};
pub use sparse::{SparseCostMatrix, SparseCosts};
