//! Reading the raw export: preamble skipping, header mapping, row parsing.
//!
//! The export opens with a fixed number of metadata lines, then a header
//! row, then semicolon-delimited records. Reading drops structural
//! artifacts (blank lines, separator runs) and tolerates malformed
//! records; only an unreadable file or a header missing a required column
//! is fatal.

mod classify;
mod wire;

pub use classify::{PartitionedRows, RowKind, classify, partition};
pub use wire::RawRow;

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::core::OwnershipError;
use wire::ColumnMap;

/// Number of metadata lines the export carries before its header row.
pub const DEFAULT_SKIP_LINES: usize = 12;

/// The export's field delimiter.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Reads the export at `path` and parses it into raw rows.
pub fn read_report(
    path: impl AsRef<Path>,
    delimiter: u8,
    skip_lines: usize,
) -> Result<Vec<RawRow>, OwnershipError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| OwnershipError::SourceRead {
        path: path.display().to_string(),
        source,
    })?;
    parse_report(&content, delimiter, skip_lines)
}

/// Parses an already-read export body into raw rows.
pub fn parse_report(
    content: &str,
    delimiter: u8,
    skip_lines: usize,
) -> Result<Vec<RawRow>, OwnershipError> {
    let body = content
        .lines()
        .skip(skip_lines)
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                debug!(%err, "skipping malformed record");
                continue;
            }
        };
        if is_structural_artifact(&record) {
            continue;
        }
        rows.push(columns.row(&record));
    }
    Ok(rows)
}

/// Blank lines and separator runs parse as records; neither carries data.
fn is_structural_artifact(record: &csv::StringRecord) -> bool {
    let blank = record.iter().all(|cell| cell.trim().is_empty());
    let separator_run = record
        .get(0)
        .is_some_and(|cell| !cell.is_empty() && cell.chars().all(|c| c == ';'));
    blank || separator_run
}
