//! SQL Dialect definitions and formatting rules.
//!
//! The profiler only ever talks to the embedded DuckDB engine, but rendering
//! still goes through the `SqlDialect` trait so that every quoting decision
//! lives in one place:
//!
//! - Identifiers are always double-quoted, embedded `"` doubled
//! - String literals are single-quoted, embedded `'` doubled
//! - Parameters are positional (`?`)
//!
//! # Usage
//!
//! ```
//! use looksee::sql::dialect::{Dialect, SqlDialect};
//!
//! let dialect = Dialect::DuckDb;
//! assert_eq!(dialect.quote_identifier("user"), "\"user\"");
//! ```

mod duckdb;
pub mod helpers;

pub use duckdb::DuckDb;

use super::token::TokenStream;
use super::types::DataType;

/// SQL dialect trait - defines how SQL constructs are rendered.
pub trait SqlDialect: std::fmt::Debug {
    /// Dialect name for display/logging.
    fn name(&self) -> &'static str;

    // =========================================================================
    // Identifier and Literal Quoting
    // =========================================================================

    /// Quote an identifier (table, column, alias).
    fn quote_identifier(&self, ident: &str) -> String;

    /// Quote a string literal.
    ///
    /// Single quotes with `''` for escaping.
    fn quote_string(&self, s: &str) -> String {
        helpers::quote_string_single(s)
    }

    /// Positional parameter marker.
    fn placeholder(&self) -> &'static str {
        "?"
    }

    /// Render a CAST target type.
    fn emit_data_type(&self, dt: &DataType) -> String {
        dt.to_string()
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Emit a LIMIT clause.
    fn emit_limit(&self, limit: u64) -> TokenStream {
        helpers::emit_limit_standard(limit)
    }

    // =========================================================================
    // DDL
    // =========================================================================

    /// Whether `CREATE OR REPLACE TABLE` is a single atomic statement.
    ///
    /// Re-ingestion relies on it: without it the old relation would have to be
    /// dropped first, leaving a window where neither version exists.
    fn supports_create_or_replace_table(&self) -> bool {
        false
    }
}

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    DuckDb,
}

impl Dialect {
    /// Get the dialect implementation.
    pub fn dialect(&self) -> &'static dyn SqlDialect {
        match self {
            Dialect::DuckDb => &DuckDb,
        }
    }
}

// Implement SqlDialect for Dialect enum by delegating to concrete types
impl SqlDialect for Dialect {
    fn name(&self) -> &'static str {
        self.dialect().name()
    }

    fn quote_identifier(&self, ident: &str) -> String {
        self.dialect().quote_identifier(ident)
    }

    fn quote_string(&self, s: &str) -> String {
        self.dialect().quote_string(s)
    }

    fn placeholder(&self) -> &'static str {
        self.dialect().placeholder()
    }

    fn emit_data_type(&self, dt: &DataType) -> String {
        self.dialect().emit_data_type(dt)
    }

    fn emit_limit(&self, limit: u64) -> TokenStream {
        self.dialect().emit_limit(limit)
    }

    fn supports_create_or_replace_table(&self) -> bool {
        self.dialect().supports_create_or_replace_table()
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dialect().name())
    }
}
