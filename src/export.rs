//! Export of (typically filtered) tables for the dashboard's download buttons.
//!
//! Null cells round-trip as empty fields, matching how [`crate::load::csv`]
//! reads them back in.

use std::io::Write;

use crate::error::EngineResult;
use crate::table::Table;

/// Write `table` as CSV (header row first) to `writer`.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> EngineResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&table.columns)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(|cell| cell.as_str().unwrap_or("")))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Serialize `table` to a CSV string (the "Download CSV" payload).
pub fn to_csv_string(table: &Table) -> EngineResult<String> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    // csv::Writer only ever emits UTF-8.
    Ok(String::from_utf8(buf).expect("csv output is utf-8"))
}

/// Write `table` as a single-sheet `.xlsx` workbook (the "Download Excel"
/// payload). Requires the `excel` cargo feature.
#[cfg(feature = "excel")]
pub fn write_xlsx(table: &Table, path: impl AsRef<std::path::Path>) -> EngineResult<()> {
    use rust_xlsxwriter::Workbook;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }
    for (row, cells) in table.rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(text) = cell.as_str() {
                worksheet.write_string((row + 1) as u32, col as u16, text)?;
            }
        }
    }

    workbook.save(path.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::to_csv_string;
    use crate::table::{Cell, Table};

    #[test]
    fn writes_header_and_rows() {
        let t = Table::new(
            ["age", "device"],
            vec![
                vec![Cell::text("13-15"), Cell::text("Phone")],
                vec![Cell::text("16-18"), Cell::text("Laptop")],
            ],
        );
        assert_eq!(
            to_csv_string(&t).unwrap(),
            "age,device\n13-15,Phone\n16-18,Laptop\n"
        );
    }

    #[test]
    fn null_cells_export_as_empty_fields() {
        let t = Table::new(
            ["age", "device"],
            vec![vec![Cell::Null, Cell::text("Phone")]],
        );
        assert_eq!(to_csv_string(&t).unwrap(), "age,device\n,Phone\n");
    }

    #[test]
    fn commas_in_headers_are_quoted() {
        let t = Table::new(["focus (1 = low, 5 = high)"], vec![vec![Cell::text("4")]]);
        assert_eq!(
            to_csv_string(&t).unwrap(),
            "\"focus (1 = low, 5 = high)\"\n4\n"
        );
    }
}
