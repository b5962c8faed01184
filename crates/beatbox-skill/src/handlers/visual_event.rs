//! Handler for interaction events raised by the visual template.

use serde_json::Value;

use crate::dispatch::{Directive, ResponseBuilder, ResponsePayload};

/// First event argument asking the device to open a link.
pub(crate) const OPEN_URL_COMMAND: &str = "abrir_url";

/// Opens the link carried by an `abrir_url` event; ignores anything else.
///
/// The link is forwarded as-is.
pub(crate) fn handle(arguments: &[Value]) -> ResponsePayload {
    match arguments {
        [Value::String(command), Value::String(source), ..]
            if command == OPEN_URL_COMMAND && !source.is_empty() =>
        {
            ResponseBuilder::new()
                .add_directive(Directive::open_url(source.as_str()))
                .build()
        }
        _ => ResponsePayload::empty(),
    }
}
