//! Output file names.
//!
//! ```text
//! {layer_stem}_ODCost{Matrix|FlatTable}_{OptimizedOn|AccumulationOf}_{attribute}.csv
//! ```
//!
//! Attribute 0 is the impedance (`OptimizedOn`); every other attribute is
//! accumulated (`AccumulationOf`).

use std::fmt;

/// Which of the two CSV layouts a file holds.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputKind {
    /// `Name,<dest>...` header, one row per origin.
    Matrix,
    /// `Origin,Destination,<attr>...` header, one row per OD pair.
    FlatTable,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Matrix => f.write_str("Matrix"),
            OutputKind::FlatTable => f.write_str("FlatTable"),
        }
    }
}

/// `OptimizedOn_<name>` for the impedance, `AccumulationOf_<name>` otherwise.
pub fn attribute_description(index: usize, name: &str) -> String {
    let role = if index == 0 { "OptimizedOn" } else { "AccumulationOf" };
    format!("{role}_{}", file_safe(name))
}

/// File name (no directory) for one output file.
pub fn output_file_name(layer_stem: &str, kind: OutputKind, index: usize, attribute: &str) -> String {
    format!("{layer_stem}_ODCost{kind}_{}.csv", attribute_description(index, attribute))
}

// Path separators in an attribute name would point the file elsewhere.
fn file_safe(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}
