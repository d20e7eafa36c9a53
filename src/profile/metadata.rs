//! Dataset-wide metadata extraction.

use tracing::{error, info};

use super::compile::{distinct_count_index, metadata_query, null_count_index, ROW_COUNT_INDEX};
use super::model::{ColumnStat, DatasetMetadata};
use crate::catalog;
use crate::engine::Session;
use crate::error::ProfileResult;
use crate::sql::dialect::Dialect;

/// Row count and per-column null/distinct counts for `table`.
///
/// One catalog read plus one aggregate scan. Either the whole snapshot is
/// returned or an error is; there are no partial results.
pub fn extract_metadata(session: &Session, table: &str) -> ProfileResult<DatasetMetadata> {
    try_extract(session, table).inspect_err(|e| error!(table, "metadata extraction failed: {}", e))
}

fn try_extract(session: &Session, table: &str) -> ProfileResult<DatasetMetadata> {
    let columns = catalog::describe(session, table)?;
    let sql = metadata_query(table, &columns).to_sql(Dialect::DuckDb);

    let (row_count, counts) = session.query_row(&sql, [], |row| {
        let row_count: i64 = row.get(ROW_COUNT_INDEX)?;
        let counts = (0..columns.len())
            .map(|i| {
                let nulls: i64 = row.get(null_count_index(i))?;
                let distinct: i64 = row.get(distinct_count_index(i))?;
                Ok((nulls as u64, distinct as u64))
            })
            .collect::<duckdb::Result<Vec<_>>>()?;
        Ok((row_count as u64, counts))
    })?;

    let columns: Vec<ColumnStat> = columns
        .into_iter()
        .zip(counts)
        .map(|(descriptor, (nulls, distinct))| ColumnStat::new(descriptor, nulls, distinct))
        .collect();

    info!(table, row_count, columns = columns.len(), "extracted metadata");

    Ok(DatasetMetadata {
        table_name: table.to_string(),
        row_count,
        columns,
    })
}
