//! CSV loading into an in-memory [`Table`].

use std::path::Path;

use crate::error::EngineResult;
use crate::table::{Cell, Table};

/// Load a CSV file into a [`Table`].
///
/// Rules:
///
/// - The CSV must have a header row; header names are trimmed of surrounding
///   whitespace (survey exports pad the question text).
/// - Empty fields become [`Cell::Null`]; every other field is kept verbatim.
///   Header trimming is the only normalization performed.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> EngineResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> EngineResult<Table> {
    let columns: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(parse_cell).collect());
    }

    Ok(Table::new(columns, rows))
}

fn parse_cell(raw: &str) -> Cell {
    if raw.is_empty() {
        Cell::Null
    } else {
        Cell::Text(raw.to_owned())
    }
}
