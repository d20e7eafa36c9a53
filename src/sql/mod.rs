//! SQL generation module.
//!
//! This module provides a type-safe SQL builder for the statements the
//! profiler sends to the engine. It includes:
//!
//! - [`query`] - SELECT query builder
//! - [`expr`] - Expression AST and builder DSL
//! - [`ddl`] - CREATE TABLE ... AS SELECT
//! - [`token`] - Token types for SQL generation
//! - [`dialect`] - SQL dialect implementation
//! - [`types`] - Engine column types

pub mod ddl;
pub mod dialect;
pub mod expr;
pub mod query;
pub mod token;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types at the sql module level
pub use ddl::CreateTable;
pub use dialect::{Dialect, SqlDialect};
pub use expr::{
    avg, cast, col, count, count_distinct, count_star, func, isfinite, lit_str, max, min,
    not, param, star, stddev_samp, BinaryOperator, Expr, ExprExt, Literal,
};
pub use query::{OrderByExpr, Query, SelectExpr, TableRef};
pub use token::{Token, TokenStream};
pub use types::DataType;
