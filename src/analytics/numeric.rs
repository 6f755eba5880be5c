//! Explicit numeric coercion of free-text survey cells.
//!
//! Survey answers that look numeric (study hours, the 1–5 focus rating) arrive
//! as text. Coercion is per-cell and total: a cell that does not parse becomes
//! [`NumericCell::Missing`], never a zero and never an aborted operation.

use serde::Serialize;

use crate::error::EngineResult;
use crate::table::{Cell, Table};

/// Result of coercing one cell to a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumericCell {
    /// The cell parsed as a floating-point number.
    Number(f64),
    /// The cell was null or did not parse; excluded from aggregates.
    Missing,
}

impl NumericCell {
    /// Parse a [`Cell`] into a [`NumericCell`].
    ///
    /// Surrounding whitespace is tolerated; anything else that fails to parse
    /// (including the empty string) is `Missing`.
    pub fn from_cell(cell: &Cell) -> Self {
        match cell.as_str() {
            Some(s) => match s.trim().parse::<f64>() {
                Ok(v) => Self::Number(v),
                Err(_) => Self::Missing,
            },
            None => Self::Missing,
        }
    }

    /// Returns the number, or `None` for `Missing`.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(v),
            Self::Missing => None,
        }
    }
}

/// Coerce every cell of `column` to a [`NumericCell`], top-to-bottom.
///
/// Fails with [`crate::EngineError::ColumnNotFound`] if the column is absent;
/// individual unparseable cells do not fail the call.
///
/// # Examples
///
/// ```rust
/// use survey_analytics::analytics::{coerce_numeric, NumericCell};
/// use survey_analytics::table::{Cell, Table};
///
/// let t = Table::new(
///     ["focus"],
///     vec![vec![Cell::text("4")], vec![Cell::text("often")], vec![Cell::Null]],
/// );
///
/// let cells = coerce_numeric(&t, "focus").unwrap();
/// assert_eq!(cells[0], NumericCell::Number(4.0));
/// assert_eq!(cells[1], NumericCell::Missing);
/// assert_eq!(cells[2], NumericCell::Missing);
/// ```
pub fn coerce_numeric(table: &Table, column: &str) -> EngineResult<Vec<NumericCell>> {
    Ok(table.column_cells(column)?.map(NumericCell::from_cell).collect())
}
