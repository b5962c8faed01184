//! Test double for [`SkillLogger`] that records invocation events.

use std::sync::Mutex;

use crate::catalog::{CatalogError, PlaylistRecord};
use crate::dispatch::DispatchError;
use crate::logger::SkillLogger;

/// Events captured during one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    RequestReceived {
        request_id: Option<String>,
        request_type: String,
        intent: Option<String>,
    },
    RequestRouted(String),
    /// Name of the selected playlist.
    PlaylistSelected(String),
    /// Category that had no active playlist.
    PlaylistNotFound(String),
    /// Rendered catalog error.
    CatalogFetchFailed(String),
    /// Rendered dispatch error.
    RequestFailed(String),
}

/// Records every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSkillLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl RecordingSkillLogger {
    /// Captures a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().expect("logger mutex poisoned").clone()
    }

    fn record(&self, event: LogEvent) {
        self.events.lock().expect("logger mutex poisoned").push(event);
    }
}

impl SkillLogger for RecordingSkillLogger {
    fn request_received(&self, request_id: Option<&str>, request_type: &str, intent: Option<&str>) {
        self.record(LogEvent::RequestReceived {
            request_id: request_id.map(str::to_owned),
            request_type: request_type.to_owned(),
            intent: intent.map(str::to_owned),
        });
    }

    fn request_routed(&self, route: &str) {
        self.record(LogEvent::RequestRouted(route.to_owned()));
    }

    fn playlist_selected(&self, record: &PlaylistRecord) {
        self.record(LogEvent::PlaylistSelected(record.name().to_owned()));
    }

    fn playlist_not_found(&self, requested: &str) {
        self.record(LogEvent::PlaylistNotFound(requested.to_owned()));
    }

    fn catalog_fetch_failed(&self, error: &CatalogError) {
        self.record(LogEvent::CatalogFetchFailed(error.to_string()));
    }

    fn request_failed(&self, error: &DispatchError) {
        self.record(LogEvent::RequestFailed(error.to_string()));
    }
}
