//! The `message` half of an Aura request: a batch of controller actions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProtocolError, Result};

/// One queued invocation of a server-side Aura controller method.
///
/// Wire format (inside the `message` form field):
/// ```json
/// {
///   "id": "0;a",
///   "descriptor": "serviceComponent://ui.force...HostConfigController/ACTION$getConfigData",
///   "callingDescriptor": "UNKNOWN",
///   "params": {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuraAction {
    /// Action id, echoed back by the server. Aura uses `N;a` strings.
    pub id: String,
    /// Fully-qualified controller method name.
    pub descriptor: String,
    #[serde(rename = "callingDescriptor")]
    pub calling_descriptor: String,
    /// Method parameters; schema varies per descriptor.
    pub params: Value,
}

impl AuraAction {
    fn new(index: usize, descriptor: &str, params: Value) -> Result<Self> {
        if descriptor.is_empty() {
            return Err(ProtocolError::InvalidParameter(
                "action descriptor must be a non-empty string".into(),
            ));
        }
        Ok(Self {
            id: format!("{index};a"),
            descriptor: descriptor.to_string(),
            calling_descriptor: "UNKNOWN".into(),
            params,
        })
    }

    /// Numeric prefix of the `N;a` id, used to restore submission order.
    pub fn index(&self) -> Option<usize> {
        self.id.split(';').next()?.parse().ok()
    }
}

/// An ordered batch of actions, serialized into the `message` form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuraMessage {
    pub actions: Vec<AuraAction>,
}

impl AuraMessage {
    /// Message carrying a single action.
    pub fn single(descriptor: &str, params: impl Serialize) -> Result<Self> {
        Self::batch([(descriptor.to_string(), to_params(params)?)])
    }

    /// Message carrying several actions; ids are assigned in submission order.
    pub fn batch(actions: impl IntoIterator<Item = (String, Value)>) -> Result<Self> {
        let actions = actions
            .into_iter()
            .enumerate()
            .map(|(i, (descriptor, params))| AuraAction::new(i, &descriptor, params))
            .collect::<Result<Vec<_>>>()?;
        if actions.is_empty() {
            return Err(ProtocolError::InvalidParameter(
                "an Aura message needs at least one action".into(),
            ));
        }
        Ok(Self { actions })
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

fn to_params(params: impl Serialize) -> Result<Value> {
    serde_json::to_value(params)
        .map_err(|e| ProtocolError::InvalidParameter(format!("params are not serializable: {e}")))
}
