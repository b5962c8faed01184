//! Invocation-scoped logging capability handed to the request handlers.
//!
//! Handlers never reach for a process-wide logger. The dispatcher receives a
//! [`SkillLogger`] for each invocation and passes it down explicitly, which
//! lets tests record the events a request produced.

use crate::catalog::{CatalogError, PlaylistRecord};
use crate::dispatch::DispatchError;

/// Tracing target for request handling events.
pub(crate) const SKILL_TARGET: &str = "beatbox_skill::skill";

/// Observer for the events of one invocation.
pub trait SkillLogger {
    /// A request envelope was parsed.
    fn request_received(&self, request_id: Option<&str>, request_type: &str, intent: Option<&str>);

    /// The request was classified and is about to be handled.
    fn request_routed(&self, route: &str);

    /// A playlist matched the requested category.
    fn playlist_selected(&self, record: &PlaylistRecord);

    /// No active playlist exists for the requested category.
    fn playlist_not_found(&self, requested: &str);

    /// Fetching or decoding the catalog failed.
    fn catalog_fetch_failed(&self, error: &CatalogError);

    /// The request could not be handled and the fallback answered it.
    fn request_failed(&self, error: &DispatchError);
}

/// Logger that emits `tracing` events tagged with the invocation number.
#[derive(Debug, Clone, Copy)]
pub struct StructuredSkillLogger {
    invocation: u64,
}

impl StructuredSkillLogger {
    /// Creates the logger for one invocation.
    #[must_use]
    pub const fn new(invocation: u64) -> Self {
        Self { invocation }
    }
}

impl SkillLogger for StructuredSkillLogger {
    fn request_received(&self, request_id: Option<&str>, request_type: &str, intent: Option<&str>) {
        tracing::debug!(
            target: SKILL_TARGET,
            invocation = self.invocation,
            request_id = request_id.unwrap_or_default(),
            request_type,
            intent = intent.unwrap_or_default(),
            "request received"
        );
    }

    fn request_routed(&self, route: &str) {
        tracing::debug!(
            target: SKILL_TARGET,
            invocation = self.invocation,
            route,
            "routing request"
        );
    }

    fn playlist_selected(&self, record: &PlaylistRecord) {
        tracing::info!(
            target: SKILL_TARGET,
            invocation = self.invocation,
            tipo = record.kind(),
            nombre = record.name(),
            "playlist selected"
        );
    }

    fn playlist_not_found(&self, requested: &str) {
        tracing::info!(
            target: SKILL_TARGET,
            invocation = self.invocation,
            requested,
            "no active playlist for category"
        );
    }

    fn catalog_fetch_failed(&self, error: &CatalogError) {
        tracing::error!(
            target: SKILL_TARGET,
            invocation = self.invocation,
            error = %error,
            "failed to fetch playlists"
        );
    }

    fn request_failed(&self, error: &DispatchError) {
        tracing::error!(
            target: SKILL_TARGET,
            invocation = self.invocation,
            error = %error,
            "request handled by fallback"
        );
    }
}
