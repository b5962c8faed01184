//! Classification of request envelopes into handler variants.
//!
//! Routing is an ordered, exhaustive match over the request type and intent
//! name. Requests that match no variant are reported as
//! [`DispatchError::Unhandled`] and answered by the fallback handler.

use serde_json::Value;

use super::errors::DispatchError;
use super::request::RequestEnvelope;

/// Intent asking for a workout playlist.
pub const SELECT_PLAYLIST_INTENT: &str = "SeleccionarEntrenamientoIntent";
/// Slot carrying the requested workout category.
pub const WORKOUT_TYPE_SLOT: &str = "tipo_entrenamiento";
/// Built-in help intent.
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
/// Built-in cancel intent.
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
/// Built-in stop intent.
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

/// Known request types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    /// A classified user utterance (`IntentRequest`).
    Intent,
    /// A user interaction on the visual surface
    /// (`Alexa.Presentation.APL.UserEvent`).
    VisualEvent,
    /// Any other request type (launch, session ended, ...).
    Other,
}

impl RequestType {
    /// Maps the envelope's request type string.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "IntentRequest" => Self::Intent,
            "Alexa.Presentation.APL.UserEvent" => Self::VisualEvent,
            _ => Self::Other,
        }
    }
}

/// Request categories served by the skill, in routing order.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillRequest {
    /// Playlist lookup for a workout category.
    SelectPlaylist {
        /// Category as spoken by the user.
        workout_type: String,
    },
    /// Interaction event raised by the visual template.
    VisualEvent {
        /// Event arguments, forwarded verbatim.
        arguments: Vec<Value>,
    },
    /// Help request.
    Help,
    /// Cancel or stop request.
    CancelOrStop,
}

impl SkillRequest {
    /// Classifies an envelope.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::MissingSlot` when a playlist request lacks the
    /// workout type, and `DispatchError::Unhandled` when no variant accepts
    /// the request.
    pub fn classify(envelope: &RequestEnvelope) -> Result<Self, DispatchError> {
        let request_type = envelope.request_type();
        let intent = envelope.intent_name();

        match (RequestType::parse(request_type), intent) {
            (RequestType::Intent, Some(SELECT_PLAYLIST_INTENT)) => envelope
                .slot_value(WORKOUT_TYPE_SLOT)
                .map(|value| Self::SelectPlaylist {
                    workout_type: value.to_owned(),
                })
                .ok_or_else(|| {
                    DispatchError::missing_slot(SELECT_PLAYLIST_INTENT, WORKOUT_TYPE_SLOT)
                }),
            (RequestType::VisualEvent, _) => Ok(Self::VisualEvent {
                arguments: envelope.arguments().to_vec(),
            }),
            (RequestType::Intent, Some(HELP_INTENT)) => Ok(Self::Help),
            (RequestType::Intent, Some(CANCEL_INTENT | STOP_INTENT)) => Ok(Self::CancelOrStop),
            (RequestType::Intent | RequestType::Other, _) => {
                Err(DispatchError::unhandled(request_type, intent))
            }
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelectPlaylist { .. } => "select-playlist",
            Self::VisualEvent { .. } => "visual-event",
            Self::Help => "help",
            Self::CancelOrStop => "cancel-or-stop",
        }
    }
}
