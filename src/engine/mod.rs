//! Embedded DuckDB session.
//!
//! A [`Session`] owns exactly one engine connection. Every other component
//! borrows it; nothing in the crate opens a connection of its own.
//!
//! # Design
//!
//! - Synchronous, single connection, no pooling
//! - Engine errors are wrapped as [`ProfileError::Query`] with the statement
//!   that triggered them and the engine's message untouched
//! - `close` consumes the session, so it can only happen once

use std::path::{Path, PathBuf};

use duckdb::{Connection, Params, Row};
use tracing::{debug, info};

use crate::error::{ProfileError, ProfileResult};

/// A live connection to the embedded analytical engine.
pub struct Session {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Session {
    /// Open an in-memory engine instance.
    pub fn open() -> ProfileResult<Self> {
        let conn = Connection::open_in_memory().map_err(ProfileError::query("open in-memory"))?;
        info!("opened in-memory duckdb session");
        Ok(Self { conn, path: None })
    }

    /// Open (or create) a file-backed database.
    pub fn open_path<P: AsRef<Path>>(path: P) -> ProfileResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .map_err(ProfileError::query(format!("open {}", path.display())))?;
        info!(path = %path.display(), "opened duckdb session");
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Database file backing this session, `None` when in-memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Execute a statement, returning the number of rows changed.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> ProfileResult<usize> {
        debug!(sql = %sql, "execute");
        self.conn
            .execute(sql, params)
            .map_err(ProfileError::query(compact(sql)))
    }

    /// Run a query and map every result row.
    pub fn query<T, P, F>(&self, sql: &str, params: P, map: F) -> ProfileResult<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> duckdb::Result<T>,
    {
        debug!(sql = %sql, "query");
        let run = || -> duckdb::Result<Vec<T>> {
            let mut stmt = self.conn.prepare(sql)?;
            let rows = stmt.query_map(params, map)?;
            rows.collect()
        };
        run().map_err(ProfileError::query(compact(sql)))
    }

    /// Run a query that yields exactly one row and map it.
    pub fn query_row<T, P, F>(&self, sql: &str, params: P, map: F) -> ProfileResult<T>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> duckdb::Result<T>,
    {
        debug!(sql = %sql, "query_row");
        self.conn
            .query_row(sql, params, map)
            .map_err(ProfileError::query(compact(sql)))
    }

    /// Release the engine, reporting any failure to shut down cleanly.
    pub fn close(self) -> ProfileResult<()> {
        self.conn
            .close()
            .map_err(|(_, source)| ProfileError::Query {
                context: "close".into(),
                source,
            })?;
        info!("closed duckdb session");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("path", &self.path).finish()
    }
}

/// Collapse a multi-line statement into one line for error context.
fn compact(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}
