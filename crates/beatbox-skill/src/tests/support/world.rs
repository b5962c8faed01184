//! BDD world for the bootstrap scenarios: loader, reporter and outcome.

use std::cell::RefCell;
use std::sync::Arc;

use beatbox_config::default_catalog_url;

use crate::bootstrap::{BootstrapError, ConfigLoader, bootstrap_with};
use crate::catalog::HttpCatalog;
use crate::dispatch::Skill;

use super::config_loader::{FailingConfigLoader, TestConfigLoader};
use super::reporter::RecordingHealthReporter;

/// Scenario world shared across bootstrap steps.
pub struct BootstrapWorld {
    loader: Box<dyn ConfigLoader>,
    pub reporter: Arc<RecordingHealthReporter>,
    skill: Option<Skill<HttpCatalog>>,
    bootstrap_error: Option<BootstrapError>,
}

impl BootstrapWorld {
    /// Builds a world whose loader resolves the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            loader: Box::new(TestConfigLoader::new(default_catalog_url())),
            reporter: Arc::new(RecordingHealthReporter::default()),
            skill: None,
            bootstrap_error: None,
        }
    }

    /// Installs a loader that resolves `catalog_url`.
    pub fn use_catalog_url(&mut self, catalog_url: &str) {
        self.loader = Box::new(TestConfigLoader::new(catalog_url));
        self.reset_results();
    }

    /// Installs a loader that always fails.
    pub fn use_failing_loader(&mut self) {
        self.loader = Box::new(FailingConfigLoader);
        self.reset_results();
    }

    /// Runs the bootstrap sequence once.
    pub fn bootstrap(&mut self) {
        if self.skill.is_some() || self.bootstrap_error.is_some() {
            return;
        }

        match bootstrap_with(&*self.loader, self.reporter.clone()) {
            Ok(skill) => self.skill = Some(skill),
            Err(error) => self.bootstrap_error = Some(error),
        }
    }

    /// Returns the bootstrap error, if any.
    #[must_use]
    pub fn bootstrap_error(&self) -> Option<&BootstrapError> {
        self.bootstrap_error.as_ref()
    }

    /// Returns the bootstrapped skill, if any.
    #[must_use]
    pub fn skill(&self) -> Option<&Skill<HttpCatalog>> {
        self.skill.as_ref()
    }

    fn reset_results(&mut self) {
        self.skill = None;
        self.bootstrap_error = None;
    }
}

impl Default for BootstrapWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Default bootstrap world fixture.
#[must_use]
pub fn bootstrap_world() -> RefCell<BootstrapWorld> {
    RefCell::new(BootstrapWorld::new())
}
