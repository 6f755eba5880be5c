use thiserror::Error;

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type shared across the engine: loading, filtering, aggregation, export.
///
/// Per-cell coercion failure is deliberately *not* a variant here: a cell that does
/// not parse as a number becomes [`crate::analytics::NumericCell::Missing`] and is
/// excluded from the aggregate, rather than aborting the whole operation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "excel")]
    /// Excel export error (feature-gated behind `excel`).
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// The requested column is absent from the table.
    #[error("column not found: '{column}'")]
    ColumnNotFound {
        /// The column name that was requested.
        column: String,
    },

    /// An aggregate over an empty or all-non-coercible set of cells.
    ///
    /// This is an explicit "no data" signal, distinguishable from a legitimate
    /// computed `0.0` or empty string. Callers render it per statistic (e.g.
    /// "no data for current filter") instead of failing the whole view.
    #[error("{statistic} over column '{column}' is undefined: no usable values")]
    Undefined {
        /// Which statistic was requested (e.g. `"mean"`, `"mode"`).
        statistic: &'static str,
        /// The column the statistic was requested over.
        column: String,
    },
}

impl EngineError {
    pub(crate) fn column_not_found(column: &str) -> Self {
        Self::ColumnNotFound {
            column: column.to_owned(),
        }
    }

    pub(crate) fn undefined(statistic: &'static str, column: &str) -> Self {
        Self::Undefined {
            statistic,
            column: column.to_owned(),
        }
    }
}
