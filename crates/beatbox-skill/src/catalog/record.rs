//! Playlist record as served by the catalog backend.

use serde::{Deserialize, Deserializer, Serialize};

/// One playlist entry of the catalog.
///
/// Field names on the wire follow the backend schema
/// (`tipo`, `nombre`, `url`, `vigente`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaylistRecord {
    #[serde(rename = "tipo")]
    kind: String,
    #[serde(rename = "nombre")]
    name: String,
    url: String,
    #[serde(rename = "vigente", default, deserialize_with = "null_as_false")]
    active: bool,
}

impl PlaylistRecord {
    /// Builds a record from its parts.
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            url: url.into(),
            active,
        }
    }

    /// Workout category (`tipo`).
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Display name of the playlist (`nombre`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Link to the playlist.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the record is currently valid (`vigente`).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}
