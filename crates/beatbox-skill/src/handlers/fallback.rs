//! Catch-all handler for requests that no other handler can answer.

use crate::dispatch::{DispatchError, ResponseBuilder, ResponsePayload};
use crate::logger::SkillLogger;

pub(crate) const FALLBACK_SPEECH: &str = "Lo siento, ocurrió un error. Inténtalo otra vez.";

/// Logs `error` and apologises, keeping the session open.
pub(crate) fn handle(error: &DispatchError, logger: &dyn SkillLogger) -> ResponsePayload {
    logger.request_failed(error);
    ResponseBuilder::new()
        .speak(FALLBACK_SPEECH)
        .reprompt(FALLBACK_SPEECH)
        .build()
}
