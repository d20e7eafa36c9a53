//! Column profiling over an ingested relation.
//!
//! - [`extract_metadata`] - row count plus per-column null/distinct counts
//! - [`summarize_column`] - type-aware statistics for one column
//! - [`compile`] - the pure query compiler both are built on
//!
//! Nothing is cached: every call reads the live relation.

pub mod compile;
mod metadata;
mod model;
mod summary;

pub use metadata::extract_metadata;
pub use model::{ColumnStat, ColumnSummary, DatasetMetadata, NumericValue};
pub use summary::summarize_column;
