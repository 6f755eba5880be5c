//! Core data model: the in-memory survey [`Table`].
//!
//! One row = one respondent; column names are the survey questions (free-form,
//! often long strings, trimmed of surrounding whitespace at load). Cells are
//! untyped at load time: every response is kept as raw [`Cell::Text`], and
//! anything numeric is coerced explicitly, per operation, by the
//! [`crate::analytics`] layer.

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// A single cell in a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Missing/empty response.
    Null,
    /// Raw response text, exactly as it appeared in the source file.
    Text(String),
}

impl Cell {
    /// Create a text cell.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Returns the cell text, or `None` for a missing cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Null => None,
            Self::Text(s) => Some(s.as_str()),
        }
    }

    /// Returns `true` for a missing cell.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// In-memory rectangular table of survey responses.
///
/// Immutable after load: every engine operation that "changes" a table
/// ([`Table::filter_rows`], [`crate::analytics::filter`]) returns a fresh copy
/// and never mutates its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Ordered column names (the questions asked).
    pub columns: Vec<String>,
    /// Row-major cell storage, one inner `Vec` per respondent.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table from column names and rows.
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    /// Number of rows (respondents).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (questions).
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns the index of a column by name, or [`EngineError::ColumnNotFound`].
    pub fn require_column(&self, name: &str) -> EngineResult<usize> {
        self.column_index(name)
            .ok_or_else(|| EngineError::column_not_found(name))
    }

    /// Iterate the cells of one column top-to-bottom.
    ///
    /// Fails with [`EngineError::ColumnNotFound`] if the column is absent.
    pub fn column_cells(&self, name: &str) -> EngineResult<impl Iterator<Item = &Cell>> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Create a new table containing only rows that match `predicate`.
    ///
    /// Row order is preserved and the original table is left unchanged.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Cell]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Returns a copy of the first `n` rows (fewer if the table is shorter).
    ///
    /// Used for data-grid previews.
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Table};

    fn sample_table() -> Table {
        Table::new(
            ["name", "age", "device"],
            vec![
                vec![Cell::text("Ada"), Cell::text("13-15"), Cell::text("Phone")],
                vec![Cell::text("Ben"), Cell::text("16-18"), Cell::Null],
                vec![Cell::text("Cam"), Cell::text("16-18"), Cell::text("Laptop")],
            ],
        )
    }

    #[test]
    fn column_index_and_require_column() {
        let t = sample_table();
        assert_eq!(t.column_index("name"), Some(0));
        assert_eq!(t.column_index("device"), Some(2));
        assert_eq!(t.column_index("missing"), None);
        assert_eq!(t.require_column("age").unwrap(), 1);

        let err = t.require_column("missing").unwrap_err();
        assert!(err.to_string().contains("column not found: 'missing'"));
    }

    #[test]
    fn column_cells_iterates_top_to_bottom() {
        let t = sample_table();
        let ages: Vec<_> = t.column_cells("age").unwrap().collect();
        assert_eq!(
            ages,
            vec![&Cell::text("13-15"), &Cell::text("16-18"), &Cell::text("16-18")]
        );
    }

    #[test]
    fn filter_rows_preserves_order_and_source() {
        let t = sample_table();
        let out = t.filter_rows(|row| row[1] == Cell::text("16-18"));

        assert_eq!(out.columns, t.columns);
        assert_eq!(out.row_count(), 2);
        assert_eq!(out.rows[0][0], Cell::text("Ben"));
        assert_eq!(out.rows[1][0], Cell::text("Cam"));
        // Original unchanged
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn head_truncates_or_copies() {
        let t = sample_table();
        assert_eq!(t.head(2).row_count(), 2);
        assert_eq!(t.head(10).row_count(), 3);
        assert_eq!(t.head(0).columns, t.columns);
    }

    #[test]
    fn null_cells_have_no_text() {
        assert_eq!(Cell::Null.as_str(), None);
        assert!(Cell::Null.is_null());
        assert_eq!(Cell::text("x").as_str(), Some("x"));
    }
}
