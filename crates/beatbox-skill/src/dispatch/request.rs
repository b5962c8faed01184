//! Request envelope deserialization.
//!
//! Only the fields the skill consumes are modelled; everything else in the
//! platform envelope is ignored.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::errors::DispatchError;

/// Interface key declared by devices able to render APL documents.
pub const APL_INTERFACE: &str = "Alexa.Presentation.APL";

/// Inbound request envelope delivered by the voice platform.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    context: Option<Context>,
    request: Request,
}

#[derive(Debug, Clone, Deserialize)]
struct Context {
    #[serde(rename = "System", default)]
    system: Option<SystemState>,
}

#[derive(Debug, Clone, Deserialize)]
struct SystemState {
    #[serde(default)]
    device: Option<Device>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Device {
    #[serde(default, deserialize_with = "null_as_empty")]
    supported_interfaces: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    #[serde(rename = "type")]
    request_type: String,
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    intent: Option<Intent>,
    #[serde(default, deserialize_with = "null_as_empty")]
    arguments: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct Intent {
    name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Deserialize)]
struct Slot {
    #[serde(default)]
    value: Option<String>,
}

/// Reads an explicit `null` the same as an absent field.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl RequestEnvelope {
    /// Parses one request line into an envelope.
    ///
    /// Trailing whitespace (including the newline delimiter) is trimmed before
    /// parsing.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::MalformedEnvelope` if the line is empty or is
    /// not a JSON object matching the envelope schema.
    pub fn parse(line: &[u8]) -> Result<Self, DispatchError> {
        let trimmed = line.trim_ascii_end();
        if trimmed.is_empty() {
            return Err(DispatchError::malformed("empty request line"));
        }

        serde_json::from_slice(trimmed).map_err(DispatchError::from_json_error)
    }

    /// Request type, for example `IntentRequest`.
    #[must_use]
    pub fn request_type(&self) -> &str {
        &self.request.request_type
    }

    /// Platform-assigned request identifier, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request.request_id.as_deref()
    }

    /// Intent name for intent requests.
    #[must_use]
    pub fn intent_name(&self) -> Option<&str> {
        self.request.intent.as_ref().map(|intent| intent.name.as_str())
    }

    /// Value of the named slot, if the slot is present and filled.
    #[must_use]
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.request
            .intent
            .as_ref()
            .and_then(|intent| intent.slots.get(name))
            .and_then(|slot| slot.value.as_deref())
    }

    /// Arguments attached to a visual user event.
    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.request.arguments
    }

    /// Whether the requesting device declares APL rendering support.
    #[must_use]
    pub fn supports_apl(&self) -> bool {
        self.context
            .as_ref()
            .and_then(|context| context.system.as_ref())
            .and_then(|system| system.device.as_ref())
            .is_some_and(|device| device.supported_interfaces.contains_key(APL_INTERFACE))
    }
}
