//! File extension to read-function resolution.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::config::{default_read_functions, Settings};
use crate::error::{ProfileError, ProfileResult};
use crate::sql::expr::lit_str;
use crate::sql::query::{Query, TableRef};

/// How a file format is read: the engine table function for one extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestStrategy {
    /// Lower-case extension without the dot.
    pub extension: String,
    /// Engine table function, e.g. `read_parquet`.
    pub read_function: String,
}

impl IngestStrategy {
    /// `SELECT * FROM <read_function>('<path>')`
    pub fn source_query(&self, path: &str) -> Query {
        Query::new()
            .select_star()
            .from(TableRef::function(&self.read_function, vec![lit_str(path)]))
    }
}

impl fmt::Display for IngestStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{} -> {}", self.extension, self.read_function)
    }
}

/// Maps file extensions to [`IngestStrategy`] values.
#[derive(Debug, Clone)]
pub struct FormatResolver {
    read_functions: BTreeMap<String, String>,
}

impl Default for FormatResolver {
    fn default() -> Self {
        Self::new(default_read_functions())
    }
}

impl FormatResolver {
    /// Build a resolver from an extension -> read function table.
    ///
    /// Keys are normalized to lower case.
    pub fn new(read_functions: BTreeMap<String, String>) -> Self {
        let read_functions = read_functions
            .into_iter()
            .map(|(ext, func)| (ext.to_lowercase(), func))
            .collect();
        Self { read_functions }
    }

    /// Build a resolver from the `[read_functions]` table of the settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.read_functions.clone())
    }

    /// Resolve an extension (no leading dot, any case).
    pub fn resolve(&self, extension: &str) -> ProfileResult<IngestStrategy> {
        let ext = extension.to_lowercase();
        match self.read_functions.get(&ext) {
            Some(func) => Ok(IngestStrategy {
                extension: ext,
                read_function: func.clone(),
            }),
            None => Err(ProfileError::UnsupportedFormat {
                extension: extension.to_string(),
                path: None,
            }),
        }
    }

    /// Resolve the strategy for a file from its extension.
    ///
    /// A path without an extension resolves as the empty extension, which is
    /// never configured.
    pub fn resolve_path(&self, path: &Path) -> ProfileResult<IngestStrategy> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.resolve(&extension).map_err(|err| match err {
            ProfileError::UnsupportedFormat { extension, .. } => ProfileError::UnsupportedFormat {
                extension,
                path: Some(path.to_path_buf()),
            },
            other => other,
        })
    }

    /// Configured extensions, sorted.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.read_functions.keys().map(String::as_str)
    }

    /// All configured strategies, sorted by extension.
    pub fn strategies(&self) -> impl Iterator<Item = IngestStrategy> + '_ {
        self.read_functions.iter().map(|(ext, func)| IngestStrategy {
            extension: ext.clone(),
            read_function: func.clone(),
        })
    }
}
