//! Categorical-to-numeric encoding for 3D scatter axes.
//!
//! Plot axes need numbers; survey answers are labels. Each selected
//! categorical column is replaced by dense integer codes assigned in
//! first-seen row order, with a parallel code→label lookup used for axis tick
//! text. Codes are stable within one derivation (the same value always gets
//! the same code), but a reordered input can assign differently across
//! derivations, so labels must always come from the same derivation as the
//! codes they annotate.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::EngineResult;
use crate::table::Table;

use super::numeric::{coerce_numeric, NumericCell};

/// One categorical column encoded as dense integer codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedColumn {
    /// Per-row code, top-to-bottom; `None` for a missing cell.
    pub codes: Vec<Option<usize>>,
    /// Distinct values indexed by code: `labels[codes[i]]` is row `i`'s label.
    pub labels: Vec<String>,
}

/// Assign each distinct value of `column` a dense code `0..k-1` by first-seen
/// scan order.
///
/// Fails with [`crate::EngineError::ColumnNotFound`] if the column is absent.
///
/// # Examples
///
/// ```rust
/// use survey_analytics::analytics::encode_categorical;
/// use survey_analytics::table::{Cell, Table};
///
/// let t = Table::new(
///     ["c"],
///     vec![
///         vec![Cell::text("X")],
///         vec![Cell::text("Y")],
///         vec![Cell::text("X")],
///         vec![Cell::text("Z")],
///     ],
/// );
///
/// let enc = encode_categorical(&t, "c").unwrap();
/// assert_eq!(enc.codes, vec![Some(0), Some(1), Some(0), Some(2)]);
/// assert_eq!(enc.labels, vec!["X", "Y", "Z"]);
/// ```
pub fn encode_categorical(table: &Table, column: &str) -> EngineResult<EncodedColumn> {
    let mut labels: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut codes: Vec<Option<usize>> = Vec::with_capacity(table.row_count());

    for cell in table.column_cells(column)? {
        codes.push(cell.as_str().map(|value| match index.get(value) {
            Some(&code) => code,
            None => {
                let code = labels.len();
                index.insert(value.to_owned(), code);
                labels.push(value.to_owned());
                code
            }
        }));
    }

    Ok(EncodedColumn { codes, labels })
}

/// A coded axis of a [`CodedTable`]: the source column name plus its encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodedAxis {
    /// Source column name.
    pub column: String,
    /// First-seen encoding of that column.
    pub encoded: EncodedColumn,
}

/// A numeric axis of a [`CodedTable`]: the source column name plus its
/// per-cell coercion (the 1–5 focus rating, treated as continuous).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericAxis {
    /// Source column name.
    pub column: String,
    /// Per-row coerced values, top-to-bottom.
    pub values: Vec<NumericCell>,
}

/// The derived table backing a 3D scatter page: coded categorical axes plus
/// coerced numeric axes, all derived from one table in one pass each.
///
/// Deriving codes and labels from the same table (full or filtered, the
/// caller's choice) keeps coordinates and tick labels consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodedTable {
    /// Coded categorical axes, in the order requested.
    pub coded: Vec<CodedAxis>,
    /// Numeric axes, in the order requested.
    pub numeric: Vec<NumericAxis>,
}

impl CodedTable {
    /// Derive a coded table from `table`.
    ///
    /// Fails with [`crate::EngineError::ColumnNotFound`] if any named column is
    /// absent; no partial result is produced.
    pub fn build(
        table: &Table,
        categorical_columns: &[&str],
        numeric_columns: &[&str],
    ) -> EngineResult<Self> {
        let mut coded = Vec::with_capacity(categorical_columns.len());
        for &column in categorical_columns {
            coded.push(CodedAxis {
                column: column.to_owned(),
                encoded: encode_categorical(table, column)?,
            });
        }

        let mut numeric = Vec::with_capacity(numeric_columns.len());
        for &column in numeric_columns {
            numeric.push(NumericAxis {
                column: column.to_owned(),
                values: coerce_numeric(table, column)?,
            });
        }

        Ok(Self { coded, numeric })
    }

    /// Look up a coded axis by source column name.
    pub fn coded_axis(&self, column: &str) -> Option<&CodedAxis> {
        self.coded.iter().find(|a| a.column == column)
    }

    /// Look up a numeric axis by source column name.
    pub fn numeric_axis(&self, column: &str) -> Option<&NumericAxis> {
        self.numeric.iter().find(|a| a.column == column)
    }
}
