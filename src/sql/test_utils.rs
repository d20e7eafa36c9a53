//! Test utilities for SQL emission validation.
//!
//! Provides helpers for validating that emitted SQL is syntactically correct
//! using sqlparser-rs for roundtrip validation.

use sqlparser::dialect::DuckDbDialect;
use sqlparser::parser::Parser;

use super::dialect::Dialect;

/// Validates that a SQL string is syntactically valid for the given dialect.
///
/// Uses sqlparser-rs to parse the SQL and returns an error if parsing fails.
pub fn validate_sql(sql: &str, dialect: Dialect) -> Result<(), String> {
    let parser_dialect = match dialect {
        Dialect::DuckDb => DuckDbDialect {},
    };

    Parser::parse_sql(&parser_dialect, sql)
        .map(|_| ())
        .map_err(|e| format!("Invalid SQL for {:?}: {}\nSQL: {}", dialect, e, sql))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_sql() {
        validate_sql("SELECT * FROM dataset", Dialect::DuckDb).unwrap();
        validate_sql(
            "CREATE OR REPLACE TABLE \"t\" AS SELECT * FROM READ_CSV_AUTO('a.csv')",
            Dialect::DuckDb,
        )
        .unwrap();
    }

    #[test]
    fn test_validate_invalid_sql() {
        let result = validate_sql("SELEC * FORM dataset", Dialect::DuckDb);
        assert!(result.is_err());
    }
}
