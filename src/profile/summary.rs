//! Per-column summary statistics.

use duckdb::Row;
use tracing::{debug, error};

use super::compile::{summary_index as idx, summary_query};
use super::model::{ColumnSummary, NumericValue};
use crate::catalog::{self, ColumnDescriptor};
use crate::engine::Session;
use crate::error::{ProfileError, ProfileResult};
use crate::sql::dialect::Dialect;
use crate::sql::types::DataType;

/// Summarize one column of `table`.
///
/// The column name must match exactly. Integer and float columns also get
/// min, max, mean and sample standard deviation; an engine NULL for any of
/// those (all-null column, or a single value for stddev) is left absent.
/// Infinities and NaN in a float column show up in the mean and stddev
/// rather than failing the query.
pub fn summarize_column(
    session: &Session,
    table: &str,
    column: &str,
) -> ProfileResult<ColumnSummary> {
    try_summarize(session, table, column)
        .inspect_err(|e| error!(table, column, "column summary failed: {}", e))
}

fn try_summarize(session: &Session, table: &str, column: &str) -> ProfileResult<ColumnSummary> {
    let descriptor = catalog::describe(session, table)?
        .into_iter()
        .find(|c| c.name == column)
        .ok_or_else(|| ProfileError::UnknownColumn {
            table: table.to_string(),
            column: column.to_string(),
        })?;

    let sql = summary_query(table, &descriptor).to_sql(Dialect::DuckDb);
    debug!(table, column, declared_type = %descriptor.declared_type, "summarizing column");

    session.query_row(&sql, [], |row| read_summary(row, &descriptor))
}

fn read_summary(row: &Row<'_>, descriptor: &ColumnDescriptor) -> duckdb::Result<ColumnSummary> {
    let row_count: i64 = row.get(idx::ROW_COUNT)?;
    let null_count: i64 = row.get(idx::NULL_COUNT)?;
    let distinct_count: i64 = row.get(idx::DISTINCT_COUNT)?;

    let mut summary = ColumnSummary {
        name: descriptor.name.clone(),
        declared_type: descriptor.declared_type,
        native_type: descriptor.native_type.clone(),
        row_count: row_count as u64,
        null_count: null_count as u64,
        distinct_count: distinct_count as u64,
        min: None,
        max: None,
        mean: None,
        stddev: None,
    };

    if !descriptor.declared_type.supports_numeric_aggregates() {
        return Ok(summary);
    }

    let (min, max) = match descriptor.extreme_type() {
        Some(DataType::Int128) => (
            row.get::<_, Option<i128>>(idx::MIN)?.map(NumericValue::Integer),
            row.get::<_, Option<i128>>(idx::MAX)?.map(NumericValue::Integer),
        ),
        Some(DataType::UInt128) => (
            row.get::<_, Option<u128>>(idx::MIN)?.map(NumericValue::Unsigned),
            row.get::<_, Option<u128>>(idx::MAX)?.map(NumericValue::Unsigned),
        ),
        _ => (
            row.get::<_, Option<f64>>(idx::MIN)?.map(NumericValue::Float),
            row.get::<_, Option<f64>>(idx::MAX)?.map(NumericValue::Float),
        ),
    };
    summary.min = min;
    summary.max = max;

    let non_finite: i64 = row.get(idx::NON_FINITE_COUNT)?;
    if non_finite > 0 {
        summary.mean = Some(non_finite_mean(min, max));
        summary.stddev = Some(f64::NAN);
    } else {
        summary.mean = row.get(idx::MEAN)?;
        summary.stddev = row.get(idx::STDDEV)?;
    }

    Ok(summary)
}

/// Mean of a column known to hold at least one infinity or NaN.
///
/// The engine orders NaN above every other value, so a NaN anywhere makes
/// `max` NaN. Otherwise the infinities present decide: one sign gives that
/// infinity, both give NaN.
fn non_finite_mean(min: Option<NumericValue>, max: Option<NumericValue>) -> f64 {
    let min = min.map_or(f64::NAN, |v| v.as_f64());
    let max = max.map_or(f64::NAN, |v| v.as_f64());

    if min.is_nan() || max.is_nan() {
        f64::NAN
    } else if min == f64::NEG_INFINITY && max == f64::INFINITY {
        f64::NAN
    } else if max == f64::INFINITY {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    }
}
