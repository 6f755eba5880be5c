//! `survey-analytics` is the aggregation and filtering engine behind a survey
//! dashboard: it loads one CSV of survey responses (student screen-time and
//! study-habit answers) into an in-memory [`table::Table`] and derives
//! everything the dashboard pages render from it.
//!
//! ## What the engine produces
//!
//! Given the loaded table and the current multiselect filter selection:
//!
//! - the filtered row subset ([`analytics::filter`]) for data grids and export
//! - per-column frequency tables ([`analytics::frequency`]) for bar/pie charts
//! - scalar summaries ([`analytics::summary_mean`], [`analytics::summary_mode`])
//!   for metric displays
//! - categorical-to-code axes ([`analytics::CodedTable`]) for 3D scatter plots
//!
//! Everything is a pure derivation: the loaded table is immutable, results
//! carry no state, and a page render recomputes what it needs.
//!
//! ## Quick example
//!
//! ```rust
//! use survey_analytics::analytics::{filter, frequency, summary_mean, summary_mode, Predicate};
//! use survey_analytics::table::{Cell, Table};
//!
//! let table = Table::new(
//!     ["What is your age?", "Where do you usually study?", "Focus (1-5)"],
//!     vec![
//!         vec![Cell::text("13-15"), Cell::text("Home"), Cell::text("3")],
//!         vec![Cell::text("13-15"), Cell::text("Library"), Cell::text("4")],
//!         vec![Cell::text("16-18"), Cell::text("Home"), Cell::text("5")],
//!         vec![Cell::text("16-18"), Cell::text("Home"), Cell::text("4")],
//!         vec![Cell::text("16-18"), Cell::text("Cafe"), Cell::text("5")],
//!     ],
//! );
//!
//! // Frequency table for the age pie chart.
//! let ages = frequency(&table, "What is your age?").unwrap();
//! assert_eq!(ages.count("13-15"), Some(2));
//! assert_eq!(ages.count("16-18"), Some(3));
//!
//! // Filtered Analysis: age ∈ {16-18}, then per-metric summaries.
//! let shown = filter(&table, &[Predicate::new("What is your age?", ["16-18"])]).unwrap();
//! assert_eq!(shown.row_count(), 3);
//! assert!((summary_mean(&shown, "Focus (1-5)").unwrap() - 14.0 / 3.0).abs() < 1e-12);
//! assert_eq!(summary_mode(&shown, "Where do you usually study?").unwrap(), "Home");
//! ```
//!
//! ## Loading and caching
//!
//! ```no_run
//! use survey_analytics::load::{load_from_path, DatasetCache, LoadOptions};
//!
//! # fn main() -> Result<(), survey_analytics::EngineError> {
//! static DATASET: DatasetCache = DatasetCache::new();
//!
//! // Loaded once per session; later calls serve the cached copy.
//! let table = DATASET.get_or_load(|| load_from_path("responses.csv", &LoadOptions::default()))?;
//! println!("{} responses", table.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## "No data" is explicit
//!
//! An aggregate over an empty filter result (or an all-non-numeric column) is
//! [`EngineError::Undefined`], never a fabricated `0.0` or empty string; a
//! single unparseable cell is [`analytics::NumericCell::Missing`] and is
//! excluded from the aggregate rather than aborting it. Each failure is local
//! to its statistic, so one empty metric never takes down the rest of a page.
//!
//! ## Modules
//!
//! - [`table`]: the in-memory survey table (untyped cells, one row per
//!   respondent)
//! - [`analytics`]: pure aggregation/filtering operations over a table
//! - [`load`]: CSV loading, load observability, and the per-session dataset
//!   cache
//! - [`export`]: CSV (and optional `.xlsx`) serialization of filtered tables
//! - [`error`]: the engine-wide error type

pub mod analytics;
pub mod error;
pub mod export;
pub mod load;
pub mod table;

pub use error::{EngineError, EngineResult};
