//! Profiling error types.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for profiling operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors raised while ingesting or profiling a dataset.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// No read function is configured for the file's extension.
    #[error("unsupported file format '{extension}'{}", describe_path(.path))]
    UnsupportedFormat {
        extension: String,
        path: Option<PathBuf>,
    },

    /// The source file is missing or unreadable, or the engine could not parse it.
    #[error("failed to ingest {}: {message}", .path.display())]
    Ingestion { path: PathBuf, message: String },

    /// The requested column is not part of the relation.
    #[error("column '{column}' not found in table '{table}'")]
    UnknownColumn { table: String, column: String },

    /// The engine rejected a statement.
    #[error("query failed ({context}): {source}")]
    Query {
        context: String,
        #[source]
        source: duckdb::Error,
    },
}

impl ProfileError {
    /// Build a closure that wraps an engine error with the given context.
    pub fn query(context: impl Into<String>) -> impl FnOnce(duckdb::Error) -> Self {
        let context = context.into();
        move |source| Self::Query { context, source }
    }

    /// Create an ingestion error for `path`.
    pub fn ingestion(path: &Path, message: impl Into<String>) -> Self {
        Self::Ingestion {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// The engine's own error, if this came from the engine.
    pub fn engine_error(&self) -> Option<&duckdb::Error> {
        match self {
            Self::Query { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn describe_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" for {}", p.display()),
        None => String::new(),
    }
}
