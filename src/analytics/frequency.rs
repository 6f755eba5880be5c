//! Frequency tables (value → count) for bar and pie charts.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::EngineResult;
use crate::table::Table;

/// Occurrence counts for the distinct values of one column.
///
/// Entries are held in first-seen row order. Charts usually want one of the
/// derived orderings instead: [`FrequencyTable::by_count_desc`] for the usual
/// "largest slice first" bar/pie layout, or [`FrequencyTable::by_label`] for
/// axes that are meaningful sorted by label (the 1–5 focus rating).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// `(value, count)` entries in first-seen row order.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Count for one value, or `None` if it never occurs.
    pub fn count(&self, value: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, n)| *n)
    }

    /// Sum of all counts, i.e. the number of non-null cells counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the column had no non-null cells.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by descending count; ties keep first-seen order.
    pub fn by_count_desc(&self) -> Vec<(String, usize)> {
        let mut out = self.entries.clone();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    /// Entries sorted ascending by label (e.g. focus levels 1..5).
    pub fn by_label(&self) -> Vec<(String, usize)> {
        let mut out = self.entries.clone();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }
}

/// Count occurrences of each distinct value in `column`, skipping null cells.
///
/// Fails with [`crate::EngineError::ColumnNotFound`] if the column is absent.
/// An empty (or all-null) column yields an empty table, not an error: a chart
/// with no slices is a presentation concern, unlike an undefined mean.
///
/// # Examples
///
/// ```rust
/// use survey_analytics::analytics::frequency;
/// use survey_analytics::table::{Cell, Table};
///
/// let t = Table::new(
///     ["age"],
///     vec![
///         vec![Cell::text("13-15")],
///         vec![Cell::text("16-18")],
///         vec![Cell::text("16-18")],
///     ],
/// );
///
/// let freq = frequency(&t, "age").unwrap();
/// assert_eq!(freq.count("13-15"), Some(1));
/// assert_eq!(freq.count("16-18"), Some(2));
/// assert_eq!(freq.total(), 3);
/// ```
pub fn frequency(table: &Table, column: &str) -> EngineResult<FrequencyTable> {
    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for cell in table.column_cells(column)? {
        let Some(value) = cell.as_str() else { continue };
        match index.get(value) {
            Some(&i) => entries[i].1 += 1,
            None => {
                index.insert(value.to_owned(), entries.len());
                entries.push((value.to_owned(), 1));
            }
        }
    }

    Ok(FrequencyTable { entries })
}

/// Number of distinct non-null values in `column` (the "Age Groups" metric).
pub fn distinct_count(table: &Table, column: &str) -> EngineResult<usize> {
    Ok(frequency(table, column)?.len())
}
