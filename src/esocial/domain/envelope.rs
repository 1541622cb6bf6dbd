//! Tagged event envelopes.

use super::{ErrorCode, EventType, FieldPath, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const TYPE_KEYS: [&str; 2] = ["type", "tipo"];
const PAYLOAD_KEY: &str = "payload";

/// An event type tag paired with its candidate payload.
///
/// The payload is kept as untyped JSON: its shape is checked by the schema
/// registered for `event_type`.
///
/// # Examples
///
/// ```
/// use esocial_guard::esocial::domain::{EventEnvelope, EventType};
/// use serde_json::json;
///
/// let envelope = EventEnvelope::from_json(&json!({
///     "tipo": { "codigo": "S2250", "descricao": "Aviso prévio" },
///     "payload": { "cpf": "111.444.777-35" }
/// }))
/// .expect("known event type");
/// assert_eq!(envelope.event_type(), EventType::S2250);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type", alias = "tipo")]
    event_type: EventType,
    payload: Value,
}

impl EventEnvelope {
    /// Creates an envelope from a known event type.
    #[must_use]
    pub const fn new(event_type: EventType, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// Reads an envelope from a raw JSON record.
    ///
    /// The tag is read from `type` or `tipo`, either as a string or as an
    /// object carrying a `codigo` string, and the payload from `payload`.
    ///
    /// # Errors
    ///
    /// Returns a root-level [`ErrorCode::FormatError`] when `raw` is not an
    /// object, [`ErrorCode::RequiredFieldMissing`] when the tag or payload is
    /// absent, [`ErrorCode::FormatError`] when the tag is not textual, and
    /// [`ErrorCode::UnknownEventType`] when the tag is not in the catalog.
    pub fn from_json(raw: &Value) -> Result<Self, ValidationError> {
        let Some(record) = raw.as_object() else {
            return Err(ValidationError::new(
                FieldPath::root(),
                ErrorCode::FormatError,
                "event envelope must be an object",
            ));
        };

        let Some((key, tag_value)) = TYPE_KEYS
            .iter()
            .find_map(|key| record.get(*key).filter(|v| !v.is_null()).map(|v| (*key, v)))
        else {
            return Err(ValidationError::required(FieldPath::root().key("type")));
        };

        let tag = tag_value
            .as_str()
            .or_else(|| tag_value.get("codigo").and_then(Value::as_str))
            .ok_or_else(|| {
                ValidationError::new(
                    FieldPath::root().key(key),
                    ErrorCode::FormatError,
                    "event type must be a string or an object with a 'codigo' string",
                )
            })?;

        let event_type = EventType::try_from(tag)
            .map_err(|_| ValidationError::unknown_event_type(tag))?;

        let payload = record
            .get(PAYLOAD_KEY)
            .filter(|value| !value.is_null())
            .cloned()
            .ok_or_else(|| ValidationError::required(FieldPath::root().key(PAYLOAD_KEY)))?;

        Ok(Self::new(event_type, payload))
    }

    /// Returns the event type tag.
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Returns the candidate payload.
    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }

    /// Consumes the envelope and returns its payload.
    #[must_use]
    pub fn into_payload(self) -> Value {
        self.payload
    }
}
