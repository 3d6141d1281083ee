//! Serde records mirroring the layer file.
//!
//! # File format
//!
//! ```json
//! {
//!   "layer_type": "network_analysis",
//!   "solver": { "kind": "od_cost_matrix", "matrix_result": "full", "populate_od_lines": false },
//!   "result": {
//!     "has_valid_result": true,
//!     "cost_attribute_names": ["Minutes", "Miles"],
//!     "origin_count": 1,
//!     "destination_count": 1,
//!     "default_values": [-1.0, -1.0],
//!     "values": [12.0, 4.5]
//!   },
//!   "classes": {
//!     "Origins": {
//!       "fields": ["Name", "CurbApproach"],
//!       "rows": [
//!         { "name": "A", "curb_approach": "either_side", "location": { "located": true, "position": 10 } }
//!       ]
//!     },
//!     "Destinations": { "fields": ["Name", "CurbApproach"], "rows": [] }
//!   },
//!   "index_table": {
//!     "origins": [ { "position": 10, "curb_approach": "either_side", "index": 0 } ],
//!     "destinations": []
//!   }
//! }
//! ```
//!
//! **`location`** on a class row:
//!
//! | Value                                  | Meaning                        |
//! |----------------------------------------|--------------------------------|
//! | `{ "located": true, "position": n }`   | placed at network position `n` |
//! | `{ "located": false }`                 | unplaced (default costs)       |
//! | `null` / absent                        | unresolved row                 |

use rustc_hash::FxHashMap;
use serde::Deserialize;

use od_core::CurbApproach;

pub const LAYER_TYPE_NETWORK_ANALYSIS: &str = "network_analysis";
pub const SOLVER_OD_COST_MATRIX: &str = "od_cost_matrix";
pub const FIELD_NAME: &str = "Name";
pub const FIELD_CURB_APPROACH: &str = "CurbApproach";

#[derive(Debug, Deserialize)]
pub struct LayerDocument {
    pub layer_type:  String,
    #[serde(default)]
    pub solver:      Option<SolverRecord>,
    #[serde(default)]
    pub result:      Option<ResultRecord>,
    #[serde(default)]
    pub classes:     FxHashMap<String, ClassRecord>,
    #[serde(default)]
    pub index_table: IndexTableRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolverRecord {
    pub kind:              String,
    #[serde(default)]
    pub matrix_result:     MatrixResultType,
    #[serde(default)]
    pub populate_od_lines: bool,
}

/// What the solver was asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixResultType {
    None,
    #[default]
    Full,
}

#[derive(Debug, Deserialize)]
pub struct ResultRecord {
    pub has_valid_result:     bool,
    pub cost_attribute_names: Vec<String>,
    pub origin_count:         usize,
    pub destination_count:    usize,
    pub default_values:       Vec<f64>,
    /// Flat `[origin][destination][attribute]` costs.
    pub values:               Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ClassRecord {
    pub fields: Vec<String>,
    #[serde(default)]
    pub rows:   Vec<RowRecord>,
}

#[derive(Debug, Deserialize)]
pub struct RowRecord {
    #[serde(default)]
    pub name:          Option<String>,
    #[serde(default)]
    pub curb_approach: CurbApproach,
    #[serde(default)]
    pub location:      Option<NetworkLocationRecord>,
}

#[derive(Debug, Deserialize)]
pub struct NetworkLocationRecord {
    pub located:  bool,
    #[serde(default)]
    pub position: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexTableRecord {
    #[serde(default)]
    pub origins:      Vec<IndexEntry>,
    #[serde(default)]
    pub destinations: Vec<IndexEntry>,
}

#[derive(Debug, Deserialize)]
pub struct IndexEntry {
    pub position:      u64,
    #[serde(default)]
    pub curb_approach: CurbApproach,
    /// Engine index; negative means unplaced.
    pub index:         i64,
}
