//! Dataset loading: CSV into a [`crate::table::Table`], with optional
//! observer reporting and a load-once session cache.
//!
//! Most callers use [`load_from_path`], which:
//!
//! - reads the survey CSV (headers required and whitespace-trimmed, empty
//!   fields become nulls)
//! - reports success/failure to an optional [`LoadObserver`]
//!
//! Pair it with [`cache::DatasetCache`] to load once per session.

pub mod cache;
pub mod csv;
pub mod observability;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::EngineResult;
use crate::table::Table;

pub use cache::DatasetCache;
pub use csv::{load_csv_from_path, load_csv_from_reader};
pub use observability::{CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadStats, StdErrObserver};

/// Options controlling dataset loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// Optional observer for load logging/metrics.
    pub observer: Option<Arc<dyn LoadObserver>>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Load the survey dataset from `path`, reporting the outcome to the
/// configured observer.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use survey_analytics::load::{load_from_path, LoadOptions, StdErrObserver};
///
/// # fn main() -> Result<(), survey_analytics::EngineError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
/// };
/// let table = load_from_path("responses.csv", &opts)?;
/// println!("rows={}", table.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> EngineResult<Table> {
    let path = path.as_ref();
    let result = load_csv_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = LoadContext {
            path: path.to_path_buf(),
        };
        match &result {
            Ok(table) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: table.row_count(),
                    columns: table.column_count(),
                },
            ),
            Err(e) => obs.on_failure(&ctx, e),
        }
    }

    result
}
