//! The top-level profiling tool.
//!
//! [`LookSee`] owns the engine session for its whole lifetime and tracks the
//! relation most recently loaded. Front ends (the CLI, a UI) drive it; they
//! never touch the session directly.

use std::path::Path;

use tracing::info;

use crate::catalog::{self, ColumnDescriptor};
use crate::config::Settings;
use crate::engine::Session;
use crate::error::ProfileResult;
use crate::ingest::{Ingestor, Relation};
use crate::profile::{self, ColumnSummary, DatasetMetadata};

/// A profiling tool instance: one session, one current relation.
#[derive(Debug)]
pub struct LookSee {
    session: Session,
    settings: Settings,
    ingestor: Ingestor,
    relation: Option<Relation>,
}

impl LookSee {
    /// Start a tool over a fresh in-memory session.
    pub fn new(settings: Settings) -> ProfileResult<Self> {
        Ok(Self::with_session(Session::open()?, settings))
    }

    /// Start a tool over an existing session.
    pub fn with_session(session: Session, settings: Settings) -> Self {
        let ingestor = Ingestor::from_settings(&settings);
        Self {
            session,
            settings,
            ingestor,
            relation: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The relation from the last successful load.
    pub fn relation(&self) -> Option<&Relation> {
        self.relation.as_ref()
    }

    /// Name profiling operations run against: the loaded relation, or the
    /// configured default before anything is loaded.
    pub fn table_name(&self) -> &str {
        match &self.relation {
            Some(relation) => &relation.table_name,
            None => &self.settings.settings.default_table_name,
        }
    }

    /// Load `path` into the configured default table.
    pub fn load(&mut self, path: &Path) -> ProfileResult<&Relation> {
        let table = self.settings.settings.default_table_name.clone();
        self.load_as(path, &table)
    }

    /// Load `path` into `table`, replacing whatever was there.
    ///
    /// A failed load leaves the previous relation current.
    pub fn load_as(&mut self, path: &Path, table: &str) -> ProfileResult<&Relation> {
        let relation = self.ingestor.ingest(&self.session, path, table)?;
        Ok(&*self.relation.insert(relation))
    }

    pub fn metadata(&self) -> ProfileResult<DatasetMetadata> {
        profile::extract_metadata(&self.session, self.table_name())
    }

    pub fn summarize(&self, column: &str) -> ProfileResult<ColumnSummary> {
        profile::summarize_column(&self.session, self.table_name(), column)
    }

    pub fn columns(&self) -> ProfileResult<Vec<ColumnDescriptor>> {
        catalog::describe(&self.session, self.table_name())
    }

    /// Shut the tool down, closing the session.
    pub fn close(self) -> ProfileResult<()> {
        info!("shutting down");
        self.session.close()
    }
}
