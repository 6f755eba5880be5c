//! Scalar summary statistics for metric displays.
//!
//! Each statistic is local to one requested column: a statistic that is
//! undefined under the current filter returns [`crate::EngineError::Undefined`]
//! and must not take unrelated statistics (or the page) down with it.

use crate::error::{EngineError, EngineResult};
use crate::table::Table;

use super::numeric::coerce_numeric;

/// Arithmetic mean of the numerically-coercible cells of `column`.
///
/// Cells that do not parse as numbers are excluded, not counted as zero.
/// Fails with [`crate::EngineError::Undefined`] when no coercible cells exist
/// (empty filter result, or an all-text column), never a silent `0.0`.
///
/// # Examples
///
/// ```rust
/// use survey_analytics::analytics::summary_mean;
/// use survey_analytics::table::{Cell, Table};
///
/// let t = Table::new(
///     ["focus"],
///     vec![
///         vec![Cell::text("3")],
///         vec![Cell::text("4")],
///         vec![Cell::text("x")],
///         vec![Cell::text("5")],
///     ],
/// );
/// assert_eq!(summary_mean(&t, "focus").unwrap(), 4.0);
/// ```
pub fn summary_mean(table: &Table, column: &str) -> EngineResult<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for cell in coerce_numeric(table, column)? {
        if let Some(v) = cell.as_f64() {
            sum += v;
            n += 1;
        }
    }

    if n == 0 {
        return Err(EngineError::undefined("mean", column));
    }
    Ok(sum / n as f64)
}

/// Most frequent non-null value of `column`.
///
/// Ties are broken by first row-order occurrence: among all values sharing the
/// maximum count, the one whose first appearance is earliest wins. Fails with
/// [`crate::EngineError::Undefined`] on an empty or all-null column.
///
/// # Examples
///
/// ```rust
/// use survey_analytics::analytics::summary_mode;
/// use survey_analytics::table::{Cell, Table};
///
/// let t = Table::new(
///     ["loc"],
///     vec![
///         vec![Cell::text("A")],
///         vec![Cell::text("B")],
///         vec![Cell::text("A")],
///         vec![Cell::text("B")],
///     ],
/// );
/// assert_eq!(summary_mode(&t, "loc").unwrap(), "A");
/// ```
pub fn summary_mode(table: &Table, column: &str) -> EngineResult<String> {
    // Entries are accumulated in first-seen order, so a strictly-greater scan
    // lands on the earliest value among those sharing the maximum count.
    let freq = super::frequency(table, column)?;

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in freq.entries() {
        match best {
            Some((_, best_count)) if *count <= best_count => {}
            _ => best = Some((value, *count)),
        }
    }

    match best {
        Some((value, _)) => Ok(value.to_owned()),
        None => Err(EngineError::undefined("mode", column)),
    }
}

#[cfg(test)]
mod tests {
    use super::{summary_mean, summary_mode};
    use crate::error::EngineError;
    use crate::table::{Cell, Table};

    fn column(values: &[&str]) -> Table {
        Table::new(
            ["v"],
            values.iter().map(|v| vec![Cell::text(*v)]).collect(),
        )
    }

    #[test]
    fn mean_excludes_non_numeric_cells() {
        let t = column(&["3", "4", "x", "5"]);
        assert_eq!(summary_mean(&t, "v").unwrap(), 4.0);
    }

    #[test]
    fn mean_over_empty_table_is_undefined_not_zero() {
        let t = Table::new(["v"], vec![]);
        let err = summary_mean(&t, "v").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Undefined { statistic: "mean", .. }
        ));
    }

    #[test]
    fn mean_over_all_text_column_is_undefined() {
        let t = column(&["often", "rarely"]);
        assert!(matches!(
            summary_mean(&t, "v").unwrap_err(),
            EngineError::Undefined { .. }
        ));
    }

    #[test]
    fn mode_picks_most_frequent() {
        let t = column(&["Home", "Library", "Home", "Cafe"]);
        assert_eq!(summary_mode(&t, "v").unwrap(), "Home");
    }

    #[test]
    fn mode_tie_breaks_by_first_row_order() {
        let t = column(&["A", "B", "A", "B"]);
        assert_eq!(summary_mode(&t, "v").unwrap(), "A");

        // First row is not the winner when a later value outcounts it.
        let t = column(&["A", "B", "B"]);
        assert_eq!(summary_mode(&t, "v").unwrap(), "B");
    }

    #[test]
    fn mode_skips_nulls_and_fails_on_all_null() {
        let t = Table::new(
            ["v"],
            vec![vec![Cell::Null], vec![Cell::text("A")], vec![Cell::Null]],
        );
        assert_eq!(summary_mode(&t, "v").unwrap(), "A");

        let all_null = Table::new(["v"], vec![vec![Cell::Null], vec![Cell::Null]]);
        assert!(matches!(
            summary_mode(&all_null, "v").unwrap_err(),
            EngineError::Undefined { statistic: "mode", .. }
        ));
    }

    #[test]
    fn missing_column_is_column_not_found_not_undefined() {
        let t = column(&["A"]);
        assert!(matches!(
            summary_mean(&t, "nope").unwrap_err(),
            EngineError::ColumnNotFound { .. }
        ));
        assert!(matches!(
            summary_mode(&t, "nope").unwrap_err(),
            EngineError::ColumnNotFound { .. }
        ));
    }
}
