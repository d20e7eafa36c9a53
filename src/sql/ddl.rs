//! DDL (Data Definition Language) support.
//!
//! Ingestion materializes a file as a relation with a single statement:
//!
//! ```
//! use looksee::sql::ddl::CreateTable;
//! use looksee::sql::dialect::Dialect;
//! use looksee::sql::expr::lit_str;
//! use looksee::sql::query::{Query, TableRef};
//!
//! let source = Query::new()
//!     .select_star()
//!     .from(TableRef::function("read_parquet", vec![lit_str("sales.parquet")]));
//! let stmt = CreateTable::new("dataset").or_replace().as_select(source);
//!
//! assert_eq!(
//!     stmt.to_sql(Dialect::DuckDb),
//!     "CREATE OR REPLACE TABLE \"dataset\" AS SELECT\n  *\nFROM READ_PARQUET('sales.parquet')"
//! );
//! ```

use super::dialect::{Dialect, SqlDialect};
use super::query::Query;
use super::token::{Token, TokenStream};

/// CREATE TABLE ... AS SELECT statement.
#[derive(Debug, Clone)]
#[must_use = "builders have no effect until used"]
pub struct CreateTable {
    pub or_replace: bool,
    pub name: String,
    pub as_query: Option<Box<Query>>,
}

impl CreateTable {
    /// Create a new CREATE TABLE statement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            or_replace: false,
            name: name.into(),
            as_query: None,
        }
    }

    /// Add OR REPLACE, so an existing relation of the same name is swapped out.
    pub fn or_replace(mut self) -> Self {
        self.or_replace = true;
        self
    }

    /// Create table from a SELECT query (CREATE TABLE AS SELECT).
    pub fn as_select(mut self, query: Query) -> Self {
        self.as_query = Some(Box::new(query));
        self
    }

    /// Convert to SQL for the given dialect.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        self.to_tokens(dialect).serialize(dialect)
    }

    /// Convert to token stream.
    pub fn to_tokens(&self, dialect: Dialect) -> TokenStream {
        let mut ts = TokenStream::new();

        ts.push(Token::Create);

        // OR REPLACE (dialect-specific)
        if self.or_replace && dialect.supports_create_or_replace_table() {
            ts.space()
                .push(Token::Or)
                .space()
                .push(Token::Replace);
        }

        ts.space().push(Token::Table);

        // Table name
        ts.space();
        ts.push(Token::Ident(self.name.clone()));

        if let Some(ref query) = self.as_query {
            ts.space()
                .push(Token::As)
                .space()
                .append(&query.to_tokens_for_dialect(dialect));
        }

        ts
    }
}
