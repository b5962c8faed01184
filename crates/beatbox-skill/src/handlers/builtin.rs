//! Help, cancel and stop handlers.

use crate::dispatch::{ResponseBuilder, ResponsePayload};

pub(crate) const HELP_SPEECH: &str = "Puedes decir por ejemplo: \"quiero una playlist para fuerza\"";
pub(crate) const GOODBYE_SPEECH: &str = "¡Hasta luego!";

/// Suggests an example utterance and waits for the user.
pub(crate) fn help() -> ResponsePayload {
    ResponseBuilder::new()
        .speak(HELP_SPEECH)
        .reprompt(HELP_SPEECH)
        .build()
}

/// Says goodbye and lets the session end.
pub(crate) fn goodbye() -> ResponsePayload {
    ResponseBuilder::new().speak(GOODBYE_SPEECH).build()
}
