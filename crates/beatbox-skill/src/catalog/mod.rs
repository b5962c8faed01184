//! Playlist catalog access and selection.
//!
//! The catalog lives on a remote backend and is fetched in full for every
//! invocation; nothing is cached between requests. Selection is a linear scan
//! that returns the first active record whose category matches the requested
//! one case-insensitively, so duplicate active records are resolved by their
//! order in the fetched array.

mod errors;
mod http;
mod record;

pub use self::errors::CatalogError;
pub use self::http::HttpCatalog;
pub use self::record::PlaylistRecord;

/// Source of playlist records.
///
/// Implementations perform at most one fetch per call and never retry.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    /// Fetches every playlist record known to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the backend is unreachable, answers with
    /// a non-success status, or the body is not a JSON array of records.
    fn fetch_all(&self) -> Result<Vec<PlaylistRecord>, CatalogError>;
}

/// Returns the first active record whose category matches `requested`.
///
/// Categories are compared after Unicode lower-casing on both sides.
#[must_use]
pub fn select<'a>(records: &'a [PlaylistRecord], requested: &str) -> Option<&'a PlaylistRecord> {
    let wanted = requested.to_lowercase();
    records
        .iter()
        .find(|record| record.is_active() && record.kind().to_lowercase() == wanted)
}
