//! `SolvedLayer` — a layer file loaded and checked.
//!
//! Structural checks (layer type, solver kind, index table) happen at load
//! time.  Result validity and the location classes are checked when they are
//! first asked for, so a caller gets the most specific error for the stage it
//! reached.

use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rustc_hash::FxHashMap;

use od_core::{Location, MatrixSlot, PlacementKey, Role, UnresolvedPolicy};
use od_matrix::{IndexLookup, SparseCostMatrix};

use crate::model::{
    ClassRecord, FIELD_CURB_APPROACH, FIELD_NAME, IndexEntry, LAYER_TYPE_NETWORK_ANALYSIS,
    LayerDocument, MatrixResultType, SOLVER_OD_COST_MATRIX, SolverRecord,
};
use crate::{CostMatrixSource, LayerError, LayerResult, LocationSource};

// ── Result state ──────────────────────────────────────────────────────────────

#[derive(Debug)]
enum SolvedResult {
    Missing,
    Invalid,
    Ready(SparseCostMatrix),
}

// ── SolvedLayer ───────────────────────────────────────────────────────────────

/// A solved OD cost-matrix layer.
///
/// Open one through [`EngineSession::open_layer`](crate::EngineSession::open_layer).
#[derive(Debug)]
pub struct SolvedLayer {
    path:    PathBuf,
    solver:  SolverRecord,
    result:  SolvedResult,
    classes: FxHashMap<String, ClassRecord>,
    index:   FxHashMap<(PlacementKey, Role), MatrixSlot>,
}

impl SolvedLayer {
    /// Load and check the layer file at `path`.
    pub(crate) fn load(path: &Path) -> LayerResult<Self> {
        let file = File::open(path).map_err(|source| LayerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Like [`load`](Self::load) but reads from any `Read` source; `path` is
    /// only used in diagnostics.
    pub(crate) fn from_reader<R: Read>(reader: R, path: &Path) -> LayerResult<Self> {
        let doc: LayerDocument = serde_json::from_reader(reader).map_err(|source| LayerError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // ── Layer / solver kind ───────────────────────────────────────────
        if doc.layer_type != LAYER_TYPE_NETWORK_ANALYSIS {
            return Err(LayerError::NotNetworkAnalysisLayer {
                path:  path.to_path_buf(),
                found: doc.layer_type,
            });
        }
        let solver = match doc.solver {
            Some(s) if s.kind == SOLVER_OD_COST_MATRIX => s,
            other => {
                return Err(LayerError::NotOdCostMatrix {
                    path:  path.to_path_buf(),
                    found: other.map_or_else(|| "none".to_string(), |s| s.kind),
                });
            }
        };

        // ── Result ────────────────────────────────────────────────────────
        let result = match doc.result {
            None => SolvedResult::Missing,
            Some(r) if !r.has_valid_result => SolvedResult::Invalid,
            Some(r) => SolvedResult::Ready(SparseCostMatrix::new(
                r.cost_attribute_names,
                r.origin_count,
                r.destination_count,
                r.default_values,
                r.values,
            )?),
        };

        // ── Index table ───────────────────────────────────────────────────
        let mut index = FxHashMap::default();
        insert_entries(&mut index, Role::Origin, &doc.index_table.origins)?;
        insert_entries(&mut index, Role::Destination, &doc.index_table.destinations)?;

        debug!(
            "loaded layer {}: {} class table(s), {} index entries",
            path.display(),
            doc.classes.len(),
            index.len(),
        );

        Ok(Self {
            path: path.to_path_buf(),
            solver,
            result,
            classes: doc.classes,
            index,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn class(&self, role: Role) -> LayerResult<&ClassRecord> {
        let class = self
            .classes
            .get(role.class_name())
            .ok_or(LayerError::MissingClass(role))?;

        let missing: Vec<&'static str> = [FIELD_CURB_APPROACH, FIELD_NAME]
            .into_iter()
            .filter(|f| !class.fields.iter().any(|have| have == f))
            .collect();
        if !missing.is_empty() {
            return Err(LayerError::MissingFields { class: role.class_name(), missing });
        }
        Ok(class)
    }

    fn not_solved(&self, reason: &'static str) -> LayerError {
        LayerError::NotSolved { path: self.path.clone(), reason }
    }
}

// ── Collaborator traits ───────────────────────────────────────────────────────

impl CostMatrixSource for SolvedLayer {
    fn cost_matrix(&self) -> LayerResult<&SparseCostMatrix> {
        if self.solver.matrix_result == MatrixResultType::None {
            return Err(self.not_solved("solver matrix result type is none"));
        }
        if self.solver.populate_od_lines {
            return Err(self.not_solved("solver populates OD lines instead of a matrix"));
        }
        match &self.result {
            SolvedResult::Missing => Err(self.not_solved("layer has no result")),
            SolvedResult::Invalid => Err(self.not_solved("result is flagged invalid")),
            SolvedResult::Ready(m) => Ok(m),
        }
    }
}

impl LocationSource for SolvedLayer {
    fn locations(&self, role: Role, policy: UnresolvedPolicy) -> LayerResult<Vec<Location>> {
        let class = self.class(role)?;
        let mut locations = Vec::with_capacity(class.rows.len());

        for (row, record) in class.rows.iter().enumerate() {
            let Some(net) = &record.location else {
                match policy {
                    UnresolvedPolicy::Skip => {
                        warn!("skipping {role} row {row} ({:?}): no network location", record.name);
                        continue;
                    }
                    UnresolvedPolicy::Reject => {
                        return Err(LayerError::UnresolvedLocation { role, row });
                    }
                }
            };

            let placement = if net.located {
                let position = net.position.ok_or(LayerError::MissingPosition { role, row })?;
                Some(PlacementKey::new(position, record.curb_approach))
            } else {
                None
            };

            locations.push(Location { name: record.name.clone(), placement });
        }

        debug!("{} {role} location(s) listed from {}", locations.len(), role.class_name());
        Ok(locations)
    }
}

impl IndexLookup for SolvedLayer {
    fn find_index(&self, key: &PlacementKey, role: Role) -> MatrixSlot {
        match self.index.get(&(*key, role)) {
            Some(slot) => *slot,
            None => {
                warn!("{role} placement {key} has no matrix index; treating as unplaced");
                MatrixSlot::Unplaced
            }
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn insert_entries(
    index:   &mut FxHashMap<(PlacementKey, Role), MatrixSlot>,
    role:    Role,
    entries: &[IndexEntry],
) -> LayerResult<()> {
    for e in entries {
        let key = PlacementKey::new(e.position, e.curb_approach);
        let slot = MatrixSlot::from_raw(e.index)?;
        match index.entry((key, role)) {
            Entry::Vacant(v) => {
                v.insert(slot);
            }
            Entry::Occupied(o) if *o.get() != slot => {
                return Err(LayerError::ConflictingIndex {
                    role,
                    key,
                    first:  raw_index(*o.get()),
                    second: e.index,
                });
            }
            Entry::Occupied(_) => {}
        }
    }
    Ok(())
}

fn raw_index(slot: MatrixSlot) -> i64 {
    slot.index().map_or(-1, |i| i64::from(i.0))
}
