//! DuckDB SQL dialect.
//!
//! DuckDB is PostgreSQL-compatible with extensions:
//! - ANSI identifier quoting (`"`)
//! - `CREATE OR REPLACE TABLE ... AS SELECT`
//! - Table functions in FROM (`read_csv_auto`, `read_parquet`, ...)

use super::helpers;
use super::SqlDialect;

/// DuckDB SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct DuckDb;

impl SqlDialect for DuckDb {
    fn name(&self) -> &'static str {
        "duckdb"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_double(ident)
    }

    // Uses default emit_limit (LIMIT n)

    fn supports_create_or_replace_table(&self) -> bool {
        true
    }
}
