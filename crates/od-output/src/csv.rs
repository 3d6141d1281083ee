//! CSV output backend.
//!
//! Each call creates (or truncates) one file in the configured directory,
//! writes it completely and flushes it before returning.

use std::path::{Path, PathBuf};

use csv::Writer;
use log::info;

use od_matrix::ExpandedCosts;

use crate::naming::{OutputKind, output_file_name};
use crate::normalize::normalize_csv_name;
use crate::writer::{OutputWriter, validate};
use crate::{OutputError, OutputResult};

/// Writes matrix and flat-table CSV files into one directory.
pub struct CsvWriter {
    dir:        PathBuf,
    layer_stem: String,
    written:    Vec<PathBuf>,
}

impl CsvWriter {
    /// Files go to `dir`, named after `layer_stem`.  Nothing is created until
    /// the first write.
    pub fn new(dir: &Path, layer_stem: &str) -> Self {
        Self {
            dir:        dir.to_path_buf(),
            layer_stem: layer_stem.to_string(),
            written:    Vec::new(),
        }
    }

    /// Paths of every file written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn path_for(&self, kind: OutputKind, attribute: usize, name: &str) -> PathBuf {
        self.dir.join(output_file_name(&self.layer_stem, kind, attribute, name))
    }

    fn finish_file(&mut self, mut out: Writer<std::fs::File>, path: PathBuf) -> OutputResult<()> {
        out.flush()?;
        info!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

impl OutputWriter for CsvWriter {
    fn write_matrix(&mut self, costs: &ExpandedCosts, attribute: usize) -> OutputResult<()> {
        validate(costs)?;
        let matrix = costs.matrices.get(attribute).ok_or(OutputError::NoSuchAttribute {
            index: attribute,
            count: costs.matrices.len(),
        })?;

        let path = self.path_for(OutputKind::Matrix, attribute, &costs.attribute_names[attribute]);
        let mut out = Writer::from_path(&path)?;

        let mut record: Vec<String> = Vec::with_capacity(costs.destination_names.len() + 1);
        record.push("Name".to_string());
        record.extend(costs.destination_names.iter().map(|n| normalize_csv_name(n)));
        out.write_record(&record)?;

        for (origin, row) in costs.origin_names.iter().zip(matrix.iter_rows()) {
            record.clear();
            record.push(normalize_csv_name(origin));
            record.extend(row.iter().map(f64::to_string));
            out.write_record(&record)?;
        }

        self.finish_file(out, path)
    }

    fn write_flat_table(&mut self, costs: &ExpandedCosts) -> OutputResult<()> {
        validate(costs)?;

        let path = self.path_for(OutputKind::FlatTable, 0, &costs.attribute_names[0]);
        let mut out = Writer::from_path(&path)?;

        let mut record: Vec<String> = Vec::with_capacity(costs.attribute_names.len() + 2);
        record.push("Origin".to_string());
        record.push("Destination".to_string());
        record.extend(costs.attribute_names.iter().map(|n| normalize_csv_name(n)));
        out.write_record(&record)?;

        let destinations: Vec<String> =
            costs.destination_names.iter().map(|n| normalize_csv_name(n)).collect();

        for (row, origin) in costs.origin_names.iter().enumerate() {
            let origin = normalize_csv_name(origin);
            for (col, destination) in destinations.iter().enumerate() {
                record.clear();
                record.push(origin.clone());
                record.push(destination.clone());
                record.extend(costs.costs_at(row, col).map(|c| c.to_string()));
                out.write_record(&record)?;
            }
        }

        self.finish_file(out, path)
    }
}
