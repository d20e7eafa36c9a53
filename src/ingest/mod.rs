//! Loading source files into the session as named relations.
//!
//! Ingestion is a single `CREATE OR REPLACE TABLE ... AS SELECT * FROM
//! <read_function>('<path>')` statement. The format is resolved from the file
//! extension before the file system or the engine is touched, so an
//! unsupported file never reaches DuckDB.

mod format;

pub use format::{FormatResolver, IngestStrategy};

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info};

use crate::config::Settings;
use crate::engine::Session;
use crate::error::{ProfileError, ProfileResult};
use crate::sql::ddl::CreateTable;
use crate::sql::dialect::Dialect;

/// A table registered in the session by one ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relation {
    pub table_name: String,
    pub source_path: PathBuf,
    pub strategy: IngestStrategy,
}

/// Loads files into a [`Session`].
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    resolver: FormatResolver,
}

impl Ingestor {
    pub fn new(resolver: FormatResolver) -> Self {
        Self { resolver }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(FormatResolver::from_settings(settings))
    }

    /// Load `path` into `table_name`, replacing any relation of that name.
    pub fn ingest(
        &self,
        session: &Session,
        path: &Path,
        table_name: &str,
    ) -> ProfileResult<Relation> {
        self.try_ingest(session, path, table_name)
            .inspect_err(|e| error!(path = %path.display(), table = table_name, "{}", e))
    }

    fn try_ingest(
        &self,
        session: &Session,
        path: &Path,
        table_name: &str,
    ) -> ProfileResult<Relation> {
        let strategy = self.resolver.resolve_path(path)?;
        check_readable(path)?;

        let path_literal = path.to_str().ok_or_else(|| {
            ProfileError::ingestion(path, "path is not valid UTF-8")
        })?;

        let sql = CreateTable::new(table_name)
            .or_replace()
            .as_select(strategy.source_query(path_literal))
            .to_sql(Dialect::DuckDb);

        session.execute(&sql, []).map_err(|err| match err {
            ProfileError::Query { source, .. } => ProfileError::ingestion(path, source.to_string()),
            other => other,
        })?;

        info!(
            path = %path.display(),
            table = table_name,
            read_function = %strategy.read_function,
            "ingested file"
        );

        Ok(Relation {
            table_name: table_name.to_string(),
            source_path: path.to_path_buf(),
            strategy,
        })
    }
}

/// The source must be an existing regular file that can be opened for reading.
fn check_readable(path: &Path) -> ProfileResult<()> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| ProfileError::ingestion(path, format!("cannot access file: {}", e)))?;
    if !metadata.is_file() {
        return Err(ProfileError::ingestion(path, "not a regular file"));
    }
    File::open(path)
        .map_err(|e| ProfileError::ingestion(path, format!("cannot read file: {}", e)))?;
    Ok(())
}
