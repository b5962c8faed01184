//! Skill bootstrap orchestration.
//!
//! Bootstrap runs once per process: it loads configuration, installs
//! telemetry, validates the catalog endpoint, and parses the bundled visual
//! template. Everything it builds is immutable afterwards.

use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;
use url::Url;

use beatbox_config::Config;

use crate::catalog::HttpCatalog;
use crate::dispatch::Skill;
use crate::health::HealthReporter;
use crate::telemetry::{self, TelemetryError};
use crate::template::{TemplateError, VisualTemplate};

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the skill configuration.
    ///
    /// # Errors
    ///
    /// Returns the loader's error when no configuration can be resolved.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that delegates to [`Config::load`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Loader that returns a fixed configuration.
#[derive(Debug, Clone)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    /// Wraps `config`.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
    /// The configured catalog endpoint is not an absolute URL.
    #[error("invalid catalog URL '{url}': {source}")]
    CatalogUrl {
        /// Value as configured.
        url: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The bundled visual template could not be loaded.
    #[error("failed to load visual template: {source}")]
    Template {
        /// Underlying template error.
        #[source]
        source: TemplateError,
    },
}

/// Bootstraps the skill using the supplied collaborators.
///
/// # Errors
///
/// Returns the first failing step as a [`BootstrapError`]; the reporter is
/// notified before the error is returned.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
) -> Result<Skill<HttpCatalog>, BootstrapError> {
    reporter.bootstrap_starting();
    match build_skill(loader) {
        Ok((config, skill)) => {
            reporter.bootstrap_succeeded(&config);
            Ok(skill)
        }
        Err(error) => {
            reporter.bootstrap_failed(&error);
            Err(error)
        }
    }
}

fn build_skill(loader: &dyn ConfigLoader) -> Result<(Config, Skill<HttpCatalog>), BootstrapError> {
    let config = loader
        .load()
        .map_err(|source| BootstrapError::Configuration { source })?;

    telemetry::initialise(&config).map_err(|source| BootstrapError::Telemetry { source })?;

    let endpoint =
        Url::parse(config.catalog_url()).map_err(|source| BootstrapError::CatalogUrl {
            url: config.catalog_url().to_owned(),
            source,
        })?;

    let template =
        VisualTemplate::bundled().map_err(|source| BootstrapError::Template { source })?;

    Ok((config, Skill::new(HttpCatalog::new(endpoint), template)))
}
