//! Unit tests for od-layer.
//!
//! Layer files are built in memory with `serde_json::json!` and either parsed
//! from a cursor or written to a temp dir and opened through a session.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;
    use std::path::Path;

    use serde_json::{Value, json};

    use crate::{LayerResult, SolvedLayer};

    /// Two origins co-located at index 0, one unplaced origin, one origin row
    /// with no network location; one placed and one unplaced destination.
    pub fn fixture() -> Value {
        json!({
            "layer_type": "network_analysis",
            "solver": { "kind": "od_cost_matrix", "matrix_result": "full", "populate_od_lines": false },
            "result": {
                "has_valid_result": true,
                "cost_attribute_names": ["Minutes", "Miles"],
                "origin_count": 1,
                "destination_count": 1,
                "default_values": [-1.0, -2.0],
                "values": [12.0, 4.5]
            },
            "classes": {
                "Origins": {
                    "fields": ["ObjectID", "Name", "CurbApproach"],
                    "rows": [
                        { "name": "A", "curb_approach": "either_side", "location": { "located": true, "position": 10 } },
                        { "name": "B", "curb_approach": "either_side", "location": { "located": true, "position": 10 } },
                        { "name": "C", "location": { "located": false } },
                        { "name": "Ghost", "location": null }
                    ]
                },
                "Destinations": {
                    "fields": ["Name", "CurbApproach"],
                    "rows": [
                        { "name": "X", "curb_approach": "right_side", "location": { "located": true, "position": 20 } },
                        { "name": "Y", "location": { "located": false } }
                    ]
                }
            },
            "index_table": {
                "origins": [ { "position": 10, "curb_approach": "either_side", "index": 0 } ],
                "destinations": [ { "position": 20, "curb_approach": "right_side", "index": 0 } ]
            }
        })
    }

    pub fn parse(doc: &Value) -> LayerResult<SolvedLayer> {
        let bytes = serde_json::to_vec(doc).unwrap();
        SolvedLayer::from_reader(Cursor::new(bytes), Path::new("fixture.json"))
    }
}

// ── Load-time validation ──────────────────────────────────────────────────────

#[cfg(test)]
mod load {
    use std::io::Cursor;
    use std::path::Path;

    use od_matrix::MatrixError;
    use serde_json::json;

    use super::helpers::{fixture, parse};
    use crate::{LayerError, SolvedLayer};

    #[test]
    fn fixture_loads() {
        let layer = parse(&fixture()).unwrap();
        assert_eq!(layer.path(), Path::new("fixture.json"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = SolvedLayer::from_reader(Cursor::new(b"{ not json"), Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, LayerError::Parse { .. }));
    }

    #[test]
    fn wrong_layer_type() {
        let mut doc = fixture();
        doc["layer_type"] = json!("feature");
        let err = parse(&doc).unwrap_err();
        assert!(matches!(err, LayerError::NotNetworkAnalysisLayer { ref found, .. } if found == "feature"));
    }

    #[test]
    fn missing_solver() {
        let mut doc = fixture();
        doc.as_object_mut().unwrap().remove("solver");
        let err = parse(&doc).unwrap_err();
        assert!(matches!(err, LayerError::NotOdCostMatrix { ref found, .. } if found == "none"));
    }

    #[test]
    fn route_solver_is_not_od() {
        let mut doc = fixture();
        doc["solver"]["kind"] = json!("route");
        let err = parse(&doc).unwrap_err();
        assert!(err.to_string().contains("must be an od_cost_matrix layer"), "{err}");
    }

    #[test]
    fn result_buffer_must_match_counts() {
        let mut doc = fixture();
        doc["result"]["values"] = json!([12.0]);
        let err = parse(&doc).unwrap_err();
        assert!(matches!(err, LayerError::Matrix(_)));
    }

    #[test]
    fn oversized_result_counts_are_an_error() {
        let mut doc = fixture();
        doc["result"]["cost_attribute_names"] = json!(["Minutes"]);
        doc["result"]["default_values"] = json!([-1.0]);
        doc["result"]["origin_count"] = json!(1u64 << 63);
        doc["result"]["destination_count"] = json!(2);
        doc["result"]["values"] = json!([]);
        let err = parse(&doc).unwrap_err();
        assert!(matches!(err, LayerError::Matrix(MatrixError::CountOverflow { .. })), "{err}");
    }

    #[test]
    fn conflicting_index_entries() {
        let mut doc = fixture();
        doc["index_table"]["origins"] = json!([
            { "position": 10, "curb_approach": "either_side", "index": 0 },
            { "position": 10, "curb_approach": "either_side", "index": 3 }
        ]);
        let err = parse(&doc).unwrap_err();
        assert!(matches!(err, LayerError::ConflictingIndex { first: 0, second: 3, .. }));
    }

    #[test]
    fn repeated_identical_index_entry_is_fine() {
        let mut doc = fixture();
        doc["index_table"]["origins"] = json!([
            { "position": 10, "index": 0 },
            { "position": 10, "index": 0 }
        ]);
        assert!(parse(&doc).is_ok());
    }
}

// ── Cost matrix ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost_matrix {
    use serde_json::json;

    use od_core::MatrixIndex;
    use od_matrix::SparseCosts;

    use super::helpers::{fixture, parse};
    use crate::{CostMatrixSource, LayerError};

    #[test]
    fn ready_result() {
        let layer = parse(&fixture()).unwrap();
        let m = layer.cost_matrix().unwrap();
        assert_eq!(m.attribute_names(), ["Minutes", "Miles"]);
        assert_eq!(m.value(MatrixIndex(0), MatrixIndex(0), 1), 4.5);
        assert_eq!(m.default_value(1), -2.0);
    }

    fn reason(doc: serde_json::Value) -> &'static str {
        match parse(&doc).unwrap().cost_matrix() {
            Err(LayerError::NotSolved { reason, .. }) => reason,
            other => panic!("expected NotSolved, got {other:?}"),
        }
    }

    #[test]
    fn missing_result() {
        let mut doc = fixture();
        doc.as_object_mut().unwrap().remove("result");
        assert_eq!(reason(doc), "layer has no result");
    }

    #[test]
    fn invalid_result() {
        let mut doc = fixture();
        doc["result"]["has_valid_result"] = json!(false);
        assert_eq!(reason(doc), "result is flagged invalid");
    }

    #[test]
    fn matrix_type_none() {
        let mut doc = fixture();
        doc["solver"]["matrix_result"] = json!("none");
        assert_eq!(reason(doc), "solver matrix result type is none");
    }

    #[test]
    fn od_lines_instead_of_matrix() {
        let mut doc = fixture();
        doc["solver"]["populate_od_lines"] = json!(true);
        assert_eq!(reason(doc), "solver populates OD lines instead of a matrix");
    }
}

// ── Locations & index lookup ──────────────────────────────────────────────────

#[cfg(test)]
mod locations {
    use serde_json::json;

    use od_core::{CurbApproach, MatrixIndex, MatrixSlot, PlacementKey, Role, UnresolvedPolicy};
    use od_matrix::IndexLookup;

    use super::helpers::{fixture, parse};
    use crate::{LayerError, LocationSource};

    #[test]
    fn skip_policy_drops_unresolved_rows() {
        let layer = parse(&fixture()).unwrap();
        let origins = layer.locations(Role::Origin, UnresolvedPolicy::Skip).unwrap();
        let names: Vec<_> = origins.iter().map(|l| l.name_or_empty()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert!(origins[0].is_placed());
        assert!(!origins[2].is_placed());
    }

    #[test]
    fn reject_policy_fails_on_unresolved_row() {
        let layer = parse(&fixture()).unwrap();
        let err = layer.locations(Role::Origin, UnresolvedPolicy::Reject).unwrap_err();
        assert!(matches!(err, LayerError::UnresolvedLocation { role: Role::Origin, row: 3 }));
    }

    #[test]
    fn reject_policy_passes_when_all_rows_resolve() {
        let layer = parse(&fixture()).unwrap();
        let dests = layer.locations(Role::Destination, UnresolvedPolicy::Reject).unwrap();
        assert_eq!(dests.len(), 2);
        assert_eq!(
            dests[0].placement,
            Some(PlacementKey::new(20, CurbApproach::RightSide))
        );
    }

    #[test]
    fn missing_class_table() {
        let mut doc = fixture();
        doc["classes"].as_object_mut().unwrap().remove("Destinations");
        let layer = parse(&doc).unwrap();
        let err = layer.locations(Role::Destination, UnresolvedPolicy::Skip).unwrap_err();
        assert!(matches!(err, LayerError::MissingClass(Role::Destination)));
        assert_eq!(err.to_string(), "unable to get Destinations table from the layer's location classes");
    }

    #[test]
    fn missing_required_fields() {
        let mut doc = fixture();
        doc["classes"]["Origins"]["fields"] = json!(["Name"]);
        let layer = parse(&doc).unwrap();
        let err = layer.locations(Role::Origin, UnresolvedPolicy::Skip).unwrap_err();
        assert!(
            matches!(err, LayerError::MissingFields { class: "Origins", ref missing } if missing == &["CurbApproach"])
        );
    }

    #[test]
    fn located_row_without_position() {
        let mut doc = fixture();
        doc["classes"]["Destinations"]["rows"][1]["location"] = json!({ "located": true });
        let layer = parse(&doc).unwrap();
        let err = layer.locations(Role::Destination, UnresolvedPolicy::Skip).unwrap_err();
        assert!(matches!(err, LayerError::MissingPosition { role: Role::Destination, row: 1 }));
    }

    #[test]
    fn lookup_uses_position_approach_and_role() {
        let layer = parse(&fixture()).unwrap();
        let origin_key = PlacementKey::new(10, CurbApproach::EitherSide);
        assert_eq!(layer.find_index(&origin_key, Role::Origin), MatrixSlot::Placed(MatrixIndex(0)));
        // Same position, other role: not in the destination table.
        assert_eq!(layer.find_index(&origin_key, Role::Destination), MatrixSlot::Unplaced);
        // Same position, other approach.
        let left = PlacementKey::new(10, CurbApproach::LeftSide);
        assert_eq!(layer.find_index(&left, Role::Origin), MatrixSlot::Unplaced);
    }

    #[test]
    fn negative_table_index_is_unplaced() {
        let mut doc = fixture();
        doc["index_table"]["origins"] = json!([{ "position": 10, "index": -1 }]);
        let layer = parse(&doc).unwrap();
        let key = PlacementKey::new(10, CurbApproach::EitherSide);
        assert_eq!(layer.find_index(&key, Role::Origin), MatrixSlot::Unplaced);
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod session {
    use tempfile::TempDir;

    use super::helpers::fixture;
    use crate::{EngineSession, LayerError};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn open_through_session() {
        let dir = tmp();
        let path = dir.path().join("commute.json");
        std::fs::write(&path, serde_json::to_vec_pretty(&fixture()).unwrap()).unwrap();

        let session = EngineSession::acquire();
        let layer = session.open_layer(&path).unwrap();
        assert_eq!(layer.path(), path);
        assert_eq!(session.layers_opened(), 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tmp();
        let path = dir.path().join("Nope.json");
        let session = EngineSession::acquire();
        let err = session.open_layer(&path).unwrap_err();
        assert!(matches!(err, LayerError::NotFound(_)));
        assert_eq!(err.to_string(), format!("Layer file does not exist: {}", path.display()));
        assert_eq!(session.layers_opened(), 0);
    }

    #[test]
    fn failed_load_is_not_counted() {
        let dir = tmp();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[]").unwrap();
        let session = EngineSession::acquire();
        assert!(matches!(session.open_layer(&path), Err(LayerError::Parse { .. })));
        assert_eq!(session.layers_opened(), 0);
    }
}
