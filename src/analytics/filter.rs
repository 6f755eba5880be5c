//! Multiselect-style row filtering for [`crate::table::Table`].
//!
//! Each [`Predicate`] pairs a column with the set of values a multiselect
//! widget currently allows. A row survives when every predicate admits it.

use std::collections::HashSet;

use crate::error::EngineResult;
use crate::table::{Cell, Table};

/// A `(column, allowed-value-set)` filter condition.
///
/// The dashboard default is "all distinct values selected", which admits every
/// row; deselecting values narrows the set. A missing cell is never a member
/// of an allowed set, so a predicate with an empty set excludes every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Column the predicate applies to.
    pub column: String,
    /// Values admitted for that column.
    pub allowed: HashSet<String>,
}

impl Predicate {
    /// Create a predicate from a column name and allowed values.
    pub fn new(
        column: impl Into<String>,
        allowed: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            column: column.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this predicate admits `cell`.
    pub fn matches(&self, cell: &Cell) -> bool {
        match cell.as_str() {
            Some(s) => self.allowed.contains(s),
            None => false,
        }
    }
}

/// Returns a new table containing exactly the rows admitted by every predicate.
///
/// - An empty predicate list is the identity: the result has the same rows and
///   columns as the input.
/// - Row order is preserved; the input table is never mutated.
/// - Fails with [`crate::EngineError::ColumnNotFound`] if any predicate names
///   an absent column (checked up front, before any row is examined).
///
/// # Examples
///
/// ```rust
/// use survey_analytics::analytics::{filter, Predicate};
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
/// let out = filter(&t, &[Predicate::new("age", ["16-18"])]).unwrap();
/// assert_eq!(out.row_count(), 2);
/// ```
pub fn filter(table: &Table, predicates: &[Predicate]) -> EngineResult<Table> {
    // Resolve all columns first so a bad predicate fails even on an empty table.
    let mut resolved = Vec::with_capacity(predicates.len());
    for pred in predicates {
        resolved.push((table.require_column(&pred.column)?, pred));
    }

    Ok(table.filter_rows(|row| resolved.iter().all(|(idx, pred)| pred.matches(&row[*idx]))))
}
