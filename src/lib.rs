//! # LookSee
//!
//! Ingests a tabular file (CSV, Parquet, JSON) into an embedded DuckDB session
//! and profiles it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Source file (.csv/.parquet/.json)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [ingest: FormatResolver → Ingestor]
//! ┌─────────────────────────────────────────────────────────┐
//! │           Relation in the engine Session                 │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [catalog: describe + TypeTag]
//! ┌─────────────────────────────────────────────────────────┐
//! │                ColumnDescriptor list                     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [profile::compile → sql]
//! ┌─────────────────────────────────────────────────────────┐
//! │      DatasetMetadata / ColumnSummary (one scan each)     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use looksee::prelude::*;
//! use std::path::Path;
//!
//! let mut tool = LookSee::new(Settings::default())?;
//! tool.load(Path::new("sales.parquet"))?;
//!
//! let metadata = tool.metadata()?;
//! println!("{} rows", metadata.row_count);
//!
//! let price = tool.summarize("price")?;
//! println!("mean price: {:?}", price.mean);
//!
//! tool.close()?;
//! # Ok::<(), looksee::error::ProfileError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod profile;
pub mod sql;
pub mod tool;

pub use tool::LookSee;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::catalog::{describe, ColumnDescriptor, TypeTag};
    pub use crate::config::Settings;
    pub use crate::engine::Session;
    pub use crate::error::{ProfileError, ProfileResult};
    pub use crate::ingest::{FormatResolver, IngestStrategy, Ingestor, Relation};
    pub use crate::profile::{
        extract_metadata, summarize_column, ColumnStat, ColumnSummary, DatasetMetadata,
        NumericValue,
    };
    pub use crate::tool::LookSee;
}
