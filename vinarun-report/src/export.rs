//! TSV export
//!
//! Serializes an aggregated dataset to tab-separated text. Every row maps
//! to exactly one output line; nothing is dropped or reordered.

use crate::ReportError;
use crate::aggregate::{AggregatedDataset, Row};
use std::fmt::Write as _;
use std::path::Path;

/// Render the dataset as tab-separated text.
///
/// A `Round\tMode\tAffinity` header, then one tab-joined line per record
/// and an empty line per separator. An empty dataset renders as the header
/// alone.
pub fn write_tsv(dataset: &AggregatedDataset) -> String {
    let mut out = String::from("Round\tMode\tAffinity\n");
    for row in &dataset.rows {
        match row {
            Row::Record(rec) => {
                let _ = writeln!(out, "{}\t{}\t{}", rec.round, rec.mode, rec.affinity);
            }
            Row::Separator => out.push('\n'),
        }
    }
    out
}

/// Write the rendered dataset to `destination`, overwriting any existing
/// file.
pub fn export(dataset: &AggregatedDataset, destination: &Path) -> Result<(), ReportError> {
    std::fs::write(destination, write_tsv(dataset)).map_err(|source| ReportError::Io {
        path: destination.display().to_string(),
        source,
    })
}
