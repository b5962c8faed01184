//! Blocking HTTP catalog client.

use url::Url;

use super::errors::CatalogError;
use super::record::PlaylistRecord;
use super::CatalogSource;

/// Catalog fetched with a single `GET` against a fixed endpoint.
///
/// The agent keeps `ureq`'s default timeouts and performs no retries.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    agent: ureq::Agent,
    endpoint: Url,
}

impl HttpCatalog {
    /// Creates a client for the given catalog endpoint.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            endpoint,
        }
    }

    /// Endpoint queried by [`CatalogSource::fetch_all`].
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch_all(&self) -> Result<Vec<PlaylistRecord>, CatalogError> {
        let response = self
            .agent
            .get(self.endpoint.as_str())
            .set("Accept", "application/json")
            .call()
            .map_err(CatalogError::from_ureq)?;
        response
            .into_json::<Vec<PlaylistRecord>>()
            .map_err(CatalogError::decode)
    }
}
