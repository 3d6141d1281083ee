//! `od-output` — CSV files for expanded OD cost matrices.
//!
//! For a layer `commute.json` solved on `Minutes` and accumulating `Miles`,
//! [`write_all`] creates:
//!
//! | File                                             | Contents                     |
//! |--------------------------------------------------|------------------------------|
//! | `commute_ODCostFlatTable_OptimizedOn_Minutes.csv`| one row per OD pair, all attributes |
//! | `commute_ODCostMatrix_OptimizedOn_Minutes.csv`   | origins × destinations       |
//! | `commute_ODCostMatrix_AccumulationOf_Miles.csv`  | origins × destinations       |
//!
//! Every location and attribute name is passed through
//! [`normalize_csv_name`] before it is written.
//!
//! # Usage
//!
//! ```rust,ignore
//! use od_output::{CsvWriter, write_all};
//!
//! let mut writer = CsvWriter::new(&config.resolved_output_dir(), &config.layer_stem());
//! write_all(&mut writer, &expanded)?;
//! for path in writer.written() {
//!     println!("wrote {}", path.display());
//! }
//! ```

pub mod csv;
pub mod error;
pub mod naming;
pub mod normalize;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use naming::{OutputKind, attribute_description, output_file_name};
pub use normalize::normalize_csv_name;
pub use writer::{OutputWriter, write_all};
