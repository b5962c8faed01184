//! Layered configuration for the Beatbox playlist skill.
//!
//! Values are resolved by `ortho_config` in increasing order of precedence:
//! built-in defaults, a configuration file (`--config-path` or
//! `BEATBOX_CONFIG_PATH`), `BEATBOX_*` environment variables, and finally
//! command-line flags.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_CATALOG_URL, DEFAULT_LOG_FILTER, default_catalog_url, default_catalog_url_string,
    default_log_filter, default_log_filter_string, default_log_format,
};
pub use logging::LogFormat;

/// Resolved skill configuration.
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig, PartialEq, Eq)]
#[ortho_config(prefix = "BEATBOX")]
pub struct Config {
    /// Endpoint returning the JSON array of playlist records.
    #[ortho_config(default = default_catalog_url_string())]
    pub catalog_url: String,
    /// Tracing filter expression applied to the subscriber.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format of the tracing subscriber.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url_string(),
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Catalog endpoint as configured (not yet validated as a URL).
    #[must_use]
    pub fn catalog_url(&self) -> &str {
        self.catalog_url.as_str()
    }

    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Tracing output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
