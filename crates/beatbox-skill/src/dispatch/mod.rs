//! JSONL request dispatch for skill invocations.
//!
//! Each line of input is one request envelope. The dispatcher parses it,
//! classifies it into a [`SkillRequest`], runs the matching handler, and writes
//! one response envelope line back:
//!
//! ```json
//! {"request":{"type":"IntentRequest","intent":{"name":"AMAZON.StopIntent"}}}
//! ```
//!
//! ```json
//! {"version":"1.0","response":{"outputSpeech":{"type":"SSML","ssml":"<speak>¡Hasta luego!</speak>"}}}
//! ```
//!
//! Parse failures, oversized lines and unmatched requests are answered by the
//! fallback handler, so every input line produces exactly one response line.

mod errors;
mod handler;
mod request;
mod response;
mod router;

pub use self::errors::DispatchError;
pub use self::handler::{MAX_REQUEST_BYTES, Skill};
pub use self::request::{APL_INTERFACE, RequestEnvelope};
pub use self::response::{
    Command, DataSources, Directive, PLAYLIST_TOKEN, PlaylistBinding, ResponseBuilder,
    ResponseEnvelope, ResponsePayload, ResponseWriter,
};
pub use self::router::{
    CANCEL_INTENT, HELP_INTENT, RequestType, SELECT_PLAYLIST_INTENT, STOP_INTENT, SkillRequest,
    WORKOUT_TYPE_SLOT,
};
