//! Aggregate query compilation.
//!
//! Pure functions from a relation name and its column descriptors to the
//! single-scan aggregate queries the profiler runs. Nothing here touches the
//! engine, so the generated SQL is tested against synthetic catalogs.
//!
//! Result columns are addressed by position. Aliases use ordinals rather than
//! column names so arbitrary source names can never collide.

use crate::catalog::ColumnDescriptor;
use crate::sql::expr::{
    avg, cast, col, count, count_distinct, count_star, isfinite, max, min, not, stddev_samp,
    Expr, ExprExt,
};
use crate::sql::query::{Query, SelectExpr, TableRef};
use crate::sql::types::DataType;

/// Position of the row count in both query shapes.
pub const ROW_COUNT_INDEX: usize = 0;

/// Position of a column's null count in the metadata query.
pub fn null_count_index(ordinal: usize) -> usize {
    1 + 2 * ordinal
}

/// Position of a column's distinct count in the metadata query.
pub fn distinct_count_index(ordinal: usize) -> usize {
    2 + 2 * ordinal
}

/// Summary query result positions.
pub mod summary_index {
    pub const ROW_COUNT: usize = 0;
    pub const NULL_COUNT: usize = 1;
    pub const DISTINCT_COUNT: usize = 2;
    pub const MIN: usize = 3;
    pub const MAX: usize = 4;
    pub const MEAN: usize = 5;
    pub const STDDEV: usize = 6;
    pub const NON_FINITE_COUNT: usize = 7;
}

/// `COUNT(*)` plus, for each column, `COUNT(*) - COUNT(c)` and
/// `COUNT(DISTINCT c)`, in one pass over `table`.
pub fn metadata_query(table: &str, columns: &[ColumnDescriptor]) -> Query {
    let mut select: Vec<SelectExpr> = Vec::with_capacity(1 + 2 * columns.len());
    select.push(count_star().alias("row_count"));

    for (i, column) in columns.iter().enumerate() {
        select.push(null_count(&column.name).alias(&format!("null_count_{}", i)));
        select.push(count_distinct(col(&column.name)).alias(&format!("distinct_count_{}", i)));
    }

    Query::new().select(select).from(TableRef::new(table))
}

/// Counts for one column, plus the numeric aggregates when its type supports
/// them.
///
/// MIN/MAX are cast to [`ColumnDescriptor::extreme_type`]. AVG and
/// STDDEV_SAMP run over the column as DOUBLE, restricted to finite values so
/// an infinity or NaN cannot fail the whole query; the count of non-finite
/// values is returned alongside so the caller can tell.
pub fn summary_query(table: &str, column: &ColumnDescriptor) -> Query {
    let name = column.name.as_str();
    let mut select = vec![
        count_star().alias("row_count"),
        null_count(name).alias("null_count"),
        count_distinct(col(name)).alias("distinct_count"),
    ];

    if let Some(extreme_type) = column.extreme_type() {
        let value = || cast(col(name), DataType::Float64);
        select.push(cast(min(col(name)), extreme_type.clone()).alias("min"));
        select.push(cast(max(col(name)), extreme_type).alias("max"));
        select.push(avg(value()).filter(isfinite(value())).alias("mean"));
        select.push(stddev_samp(value()).filter(isfinite(value())).alias("stddev"));
        select.push(count_star().filter(not(isfinite(value()))).alias("non_finite_count"));
    }

    Query::new().select(select).from(TableRef::new(table))
}

fn null_count(column: &str) -> Expr {
    count_star().sub(count(col(column)))
}
