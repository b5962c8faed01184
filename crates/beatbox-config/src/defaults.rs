use crate::logging::LogFormat;

/// Playlist catalog endpoint queried when no override is configured.
pub const DEFAULT_CATALOG_URL: &str =
    "https://backend-beatboxbackend.qvmevn.easypanel.host/playlists/all";

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default catalog endpoint.
#[must_use]
pub const fn default_catalog_url() -> &'static str {
    DEFAULT_CATALOG_URL
}

/// Owned catalog endpoint used where allocation is required (e.g. serde).
#[must_use]
pub fn default_catalog_url_string() -> String {
    DEFAULT_CATALOG_URL.to_owned()
}

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}
