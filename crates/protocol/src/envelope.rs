//! Form-encoded request body for the Aura servlet.

use url::form_urlencoded;

use crate::context::AuraContext;
use crate::error::{ProtocolError, Result};
use crate::message::AuraMessage;

pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_CONTEXT: &str = "aura.context";
pub const FIELD_TOKEN: &str = "aura.token";

/// Complete POST body for one Aura call: the action batch, the framework
/// context, and the CSRF-like `aura.token`. Pure data; the sid cookie is
/// attached by the HTTP layer.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub message: AuraMessage,
    pub context: AuraContext,
    pub token: String,
}

impl Envelope {
    pub fn new(message: AuraMessage, context: AuraContext, token: impl Into<String>) -> Self {
        Self {
            message,
            context,
            token: token.into(),
        }
    }

    /// Serialize into an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> Result<String> {
        let message = serde_json::to_string(&self.message)
            .map_err(|e| ProtocolError::InvalidParameter(format!("unserializable message: {e}")))?;
        let context = serde_json::to_string(&self.context)
            .map_err(|e| ProtocolError::InvalidParameter(format!("unserializable context: {e}")))?;
        Ok(form_urlencoded::Serializer::new(String::new())
            .append_pair(FIELD_MESSAGE, &message)
            .append_pair(FIELD_CONTEXT, &context)
            .append_pair(FIELD_TOKEN, &self.token)
            .finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn decode(body: &str) -> HashMap<String, String> {
        form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn form_body_round_trips_descriptor_and_params() {
        let message = AuraMessage::single(
            "aura://ApexActionController/ACTION$execute",
            json!({"classname": "MyClass", "method": "run", "params": {"n": 3, "s": "a&b=c"}}),
        )
        .unwrap();
        let envelope = Envelope::new(message.clone(), AuraContext::minimal(), "tok");

        let fields = decode(&envelope.to_form_body().unwrap());
        assert_eq!(fields[FIELD_TOKEN], "tok");

        let decoded: AuraMessage = serde_json::from_str(&fields[FIELD_MESSAGE]).unwrap();
        assert_eq!(decoded, message);

        let context: AuraContext = serde_json::from_str(&fields[FIELD_CONTEXT]).unwrap();
        assert_eq!(context, AuraContext::minimal());
    }

    #[test]
    fn form_body_has_exactly_three_fields() {
        let message = AuraMessage::single("aura://X/ACTION$y", json!({})).unwrap();
        let body = Envelope::new(message, AuraContext::minimal(), "")
            .to_form_body()
            .unwrap();
        assert_eq!(decode(&body).len(), 3);
    }
}
