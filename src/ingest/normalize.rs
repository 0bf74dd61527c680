//! Turns raw string rows into typed bridge records.
//!
//! Raw layout (one row per bridge):
//!
//! ```text
//! id, name, highway, lat, lon, year built, last major rehab, last minor rehab,
//! span count, span summary, total length, last inspection, current BCI,
//! BCI history...
//! ```
//!
//! The BCI history columns are variable width and sparse; the newest
//! historical value comes first.

use tracing::{debug, info};

use crate::error::NormalizeError;
use crate::models::{BridgeId, BridgeRecord, GeoPoint};

const NAME_COLUMN: usize = 1;
const HIGHWAY_COLUMN: usize = 2;
const LAT_COLUMN: usize = 3;
const LON_COLUMN: usize = 4;
const YEAR_COLUMN: usize = 5;
const LAST_MAJOR_COLUMN: usize = 6;
const LAST_MINOR_COLUMN: usize = 7;
const NUM_SPANS_COLUMN: usize = 8;
const SPAN_DETAILS_COLUMN: usize = 9;
const LENGTH_COLUMN: usize = 10;
const LAST_INSPECTED_COLUMN: usize = 11;
const BCI_COLUMN: usize = 12;

/// Normalize all rows, assigning ids by row position.
///
/// The first malformed row aborts the whole batch.
pub fn normalize<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Vec<BridgeRecord>, NormalizeError> {
    let records = rows
        .iter()
        .enumerate()
        .map(|(i, row)| normalize_row(i as BridgeId + 1, row))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Normalized {} bridge records", records.len());
    Ok(records)
}

/// Normalize a single raw row. The identifier embedded in the raw text is
/// discarded in favour of `id`.
pub fn normalize_row<S: AsRef<str>>(
    id: BridgeId,
    row: &[S],
) -> Result<BridgeRecord, NormalizeError> {
    let row_no = id as usize;
    let cell = |index: usize, column: &'static str| cell_at(row, row_no, index, column);

    let lat = parse_float(row_no, "latitude", cell(LAT_COLUMN, "latitude")?)?;
    let lon = parse_float(row_no, "longitude", cell(LON_COLUMN, "longitude")?)?;

    let span_count_raw = cell(NUM_SPANS_COLUMN, "span_count")?;
    let span_count: u32 =
        span_count_raw
            .trim()
            .parse()
            .map_err(|_| NormalizeError::InvalidNumber {
                row: row_no,
                column: "span_count",
                value: span_count_raw.to_string(),
            })?;

    let span_lengths = parse_spans(row_no, cell(SPAN_DETAILS_COLUMN, "span_details")?)?;
    if span_lengths.len() != span_count as usize {
        return Err(NormalizeError::SpanCountMismatch {
            row: row_no,
            expected: span_count,
            found: span_lengths.len(),
        });
    }

    let length_raw = cell(LENGTH_COLUMN, "total_length")?;
    let total_length = if length_raw.trim().is_empty() {
        0.0
    } else {
        parse_float(row_no, "total_length", length_raw)?
    };

    // Only the current BCI column is required; history may be absent.
    cell(BCI_COLUMN, "bci")?;
    let bci_history = parse_bci_history(row_no, row)?;
    if bci_history.is_empty() {
        debug!("Bridge {} has no BCI history", id);
    }

    Ok(BridgeRecord {
        id,
        name: cell(NAME_COLUMN, "name")?.to_string(),
        highway: cell(HIGHWAY_COLUMN, "highway")?.to_string(),
        location: GeoPoint::new(lat, lon),
        year_built: cell(YEAR_COLUMN, "year_built")?.to_string(),
        last_major_rehab_year: cell(LAST_MAJOR_COLUMN, "last_major_rehab")?.to_string(),
        last_minor_rehab_year: cell(LAST_MINOR_COLUMN, "last_minor_rehab")?.to_string(),
        span_count,
        span_lengths,
        total_length,
        last_inspection_date: cell(LAST_INSPECTED_COLUMN, "last_inspected")?.to_string(),
        bci_history,
    })
}

/// Parse a span summary such as `Total=64  (1)=12;(2)=19;(3)=21;(4)=12;`.
///
/// The total and the separator after it are dropped; every remaining
/// `(n)=<len>` segment contributes its length in order. A summary without
/// the two leading pieces is rejected.
pub fn parse_spans(row: usize, summary: &str) -> Result<Vec<f64>, NormalizeError> {
    let pieces: Vec<&str> = summary.split(' ').collect();
    if pieces.len() < 2 {
        return Err(NormalizeError::MalformedSpans {
            row,
            summary: summary.to_string(),
        });
    }
    let details: String = pieces[2..].concat();

    let mut segments: Vec<&str> = details.split(';').collect();
    if segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    segments
        .into_iter()
        .map(|segment| {
            let value = segment.split_once('=').map_or(segment, |(_, v)| v);
            parse_float(row, "span_details", value)
        })
        .collect()
}

/// Collect the BCI history, most recent first.
///
/// Cells are scanned from the end of the row back to just past the current
/// BCI column, skipping empty cells, and the collected list is reversed.
fn parse_bci_history<S: AsRef<str>>(row_no: usize, row: &[S]) -> Result<Vec<f64>, NormalizeError> {
    let mut history = Vec::new();
    for raw in row.iter().skip(BCI_COLUMN + 1).rev() {
        let raw = raw.as_ref();
        if !raw.trim().is_empty() {
            history.push(parse_float(row_no, "bci", raw)?);
        }
    }
    history.reverse();
    Ok(history)
}

fn cell_at<'a, S: AsRef<str>>(
    row: &'a [S],
    row_no: usize,
    index: usize,
    column: &'static str,
) -> Result<&'a str, NormalizeError> {
    row.get(index)
        .map(|c| c.as_ref())
        .ok_or(NormalizeError::MissingColumn {
            row: row_no,
            column,
        })
}

fn parse_float(row: usize, column: &'static str, raw: &str) -> Result<f64, NormalizeError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| NormalizeError::InvalidNumber {
            row,
            column,
            value: raw.to_string(),
        })
}
