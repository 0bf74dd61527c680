//! Raw CSV row loading for bridge inventory exports.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Leading lines of the raw export that are titles/headers, not bridges
const HEADER_LINES: usize = 2;

/// Read raw bridge rows from a CSV export.
///
/// Rows are flexible width since the BCI history columns vary per bridge.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line, result) in csv_reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read CSV record {}", line + 1))?;
        if line < HEADER_LINES {
            continue;
        }
        rows.push(record.iter().map(String::from).collect());
    }

    info!("Read {} raw bridge rows", rows.len());
    Ok(rows)
}

/// Read raw bridge rows from a CSV file on disk.
pub fn load_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    info!("Loading bridge data from {}", path.display());

    let file = File::open(path).context("Failed to open bridge data file")?;
    read_rows(file)
}
