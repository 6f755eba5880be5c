//! The aggregation and filtering engine.
//!
//! Every operation here is a pure function of a [`crate::table::Table`] and
//! its arguments: no state, no memory of past calls, no mutation of the input.
//! A page render recomputes whatever it needs from the current filter
//! selection.
//!
//! - [`filter()`]: multiselect-style row filtering by `(column, allowed-set)`
//!   predicates
//! - [`frequency()`] / [`distinct_count()`]: value→count tables for bar/pie
//!   charts
//! - [`summary_mean()`] / [`summary_mode()`]: scalar metrics
//! - [`coerce_numeric()`]: explicit per-cell text→number coercion
//! - [`encode_categorical()`] / [`CodedTable`]: categorical→code axes for 3D
//!   scatter plots
//!
//! ## Example: the "Filtered Analysis" page, end to end
//!
//! ```rust
//! use survey_analytics::analytics::{filter, frequency, summary_mean, Predicate};
//! use survey_analytics::table::{Cell, Table};
//!
//! let t = Table::new(
//!     ["age", "focus"],
//!     vec![
//!         vec![Cell::text("13-15"), Cell::text("3")],
//!         vec![Cell::text("16-18"), Cell::text("5")],
//!         vec![Cell::text("16-18"), Cell::text("4")],
//!     ],
//! );
//!
//! let shown = filter(&t, &[Predicate::new("age", ["16-18"])]).unwrap();
//! assert_eq!(shown.row_count(), 2);
//! assert_eq!(summary_mean(&shown, "focus").unwrap(), 4.5);
//! assert_eq!(frequency(&shown, "age").unwrap().count("16-18"), Some(2));
//! ```
//!
//! Failures are local to a single requested statistic: an undefined mean over
//! the current filter is an [`crate::EngineError::Undefined`] for that metric
//! and says nothing about the frequency table next to it.

pub mod encode;
pub mod filter;
pub mod frequency;
pub mod numeric;
pub mod summary;

pub use encode::{encode_categorical, CodedAxis, CodedTable, EncodedColumn, NumericAxis};
pub use filter::{filter, Predicate};
pub use frequency::{distinct_count, frequency, FrequencyTable};
pub use numeric::{coerce_numeric, NumericCell};
pub use summary::{summary_mean, summary_mode};
