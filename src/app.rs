// src/app.rs

use crate::config::DirectoryConfig;
use crate::domain::Directory;
use crate::errors::{ConfigError, LoadFailure};
use crate::loader::load_directory;
use crate::session::{Session, SessionSettings};
use crate::surface::{Document, Element, LeafletMap};
use crate::templates::CategoryOptions;
use std::sync::Arc;
use std::time::Duration;

/// What every request shares: the outcome of the one load at startup and
/// the page settings. Read-only once built.
pub struct App {
    outcome: Result<Arc<Directory>, LoadFailure>,
    settings: SessionSettings,
    options: CategoryOptions,
}

impl App {
    pub fn new(outcome: Result<Arc<Directory>, LoadFailure>, settings: SessionSettings) -> Self {
        let options = match &outcome {
            Ok(directory) => CategoryOptions::from_directory(directory),
            Err(_) => CategoryOptions::default(),
        };
        Self {
            outcome,
            settings,
            options,
        }
    }

    /// Loads the datasets named by `config`. A load failure is kept, not
    /// returned: the page still renders and reports it.
    pub fn from_config(config: &DirectoryConfig) -> Result<Self, ConfigError> {
        let source = config.data.data_source()?;
        let outcome = load_directory(source, &config.data.paths()).map(Arc::new);
        Ok(Self::new(outcome, config.session_settings()))
    }

    pub fn is_loaded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// A fresh page session over the shared datasets.
    pub fn open_session(&self) -> Session<LeafletMap, Document> {
        Session::open(
            self.outcome.clone(),
            LeafletMap::new(Element::LeafletMap),
            Document::new(),
            &self.settings,
        )
    }

    pub fn category_options(&self) -> &CategoryOptions {
        &self.options
    }

    pub fn search_quiet(&self) -> Duration {
        self.settings.search_quiet
    }
}
