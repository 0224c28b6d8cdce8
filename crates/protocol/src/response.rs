//! Parsing and unwrapping of raw Aura response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProtocolError, Result};

/// Event descriptor a live servlet answers with when the session is missing
/// or dead. Doubles as the liveness marker during endpoint probing.
pub const INVALID_SESSION_MARKER: &str = "aura:invalidSession";

/// Inline redirect script communities emit instead of an HTTP 302 when the
/// caller has to go through the login page.
pub const LOGIN_REDIRECT_MARKER: &str = "window.location.href ='";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionState {
    New,
    Success,
    Error,
    Incomplete,
}

/// Result of one action within a batch, matched to the request by `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionResult {
    pub id: String,
    pub state: ActionState,
    #[serde(rename = "returnValue", default)]
    pub return_value: Value,
    /// Server-side error descriptors, populated when `state` is `ERROR`.
    #[serde(default)]
    pub error: Vec<Value>,
}

impl ActionResult {
    fn index(&self) -> Option<usize> {
        self.id.split(';').next()?.parse().ok()
    }

    fn error_message(&self) -> String {
        self.error
            .first()
            .and_then(|e| e.get("message").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| "unknown server error".into())
    }
}

/// Top-level shape of an Aura servlet response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuraResponse {
    #[serde(default)]
    pub actions: Vec<ActionResult>,
    #[serde(rename = "exceptionEvent", default)]
    pub exception_event: bool,
    #[serde(rename = "exceptionMessage", default)]
    pub exception_message: Option<String>,
}

/// Heuristics for spotting a dead or unauthenticated session in a raw body.
///
/// The upstream API is undocumented, so detection is string probing: the
/// default markers are the inline login-page redirect script and the
/// `aura:invalidSession` exception event, both observed on real community
/// sites. When a site responds with something new, extend the set with
/// [`AuthDetector::with_marker`] rather than patching call sites.
#[derive(Debug, Clone)]
pub struct AuthDetector {
    markers: Vec<String>,
}

impl Default for AuthDetector {
    fn default() -> Self {
        Self {
            markers: vec![
                LOGIN_REDIRECT_MARKER.to_string(),
                INVALID_SESSION_MARKER.to_string(),
            ],
        }
    }
}

impl AuthDetector {
    /// Add a site-specific marker to the probe set.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    /// The marker found in `body`, if any. HTTP status is deliberately
    /// ignored; communities answer 200 for most failure modes.
    pub fn auth_failure(&self, body: &str) -> Option<&str> {
        self.markers
            .iter()
            .find(|m| body.contains(m.as_str()))
            .map(String::as_str)
    }
}

/// Extracts the per-action payloads out of a raw response body.
#[derive(Debug, Clone, Default)]
pub struct ResponseUnwrapper {
    detector: AuthDetector,
}

impl ResponseUnwrapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detector(detector: AuthDetector) -> Self {
        Self { detector }
    }

    /// Parse the body into the full JSON value without touching the action
    /// list. Used where the whole response gets scanned (component sweep).
    pub fn raw(&self, body: &str) -> Result<Value> {
        if let Some(marker) = self.detector.auth_failure(body) {
            return Err(ProtocolError::Authentication(format!(
                "response matched marker {marker:?}"
            )));
        }
        serde_json::from_str(body).map_err(|_| ProtocolError::Malformed(snippet(body)))
    }

    /// Return value of a single-action request.
    pub fn unwrap_single(&self, body: &str) -> Result<Value> {
        let mut results = self.unwrap_batch(body, 1)?;
        results.remove(0)
    }

    /// Per-action return values of a batch, in submission order. A failed
    /// action yields an `Err` slot without poisoning its siblings.
    pub fn unwrap_batch(&self, body: &str, submitted: usize) -> Result<Vec<Result<Value>>> {
        let response = self.parse(body)?;
        if response.actions.len() != submitted {
            return Err(ProtocolError::Malformed(format!(
                "submitted {submitted} actions but the response carries {}",
                response.actions.len()
            )));
        }
        let mut actions = response.actions;
        // The server echoes submission order, but the id is authoritative.
        actions.sort_by_key(|a| a.index().unwrap_or(usize::MAX));
        Ok(actions.into_iter().map(unwrap_action).collect())
    }

    fn parse(&self, body: &str) -> Result<AuraResponse> {
        let value = self.raw(body)?;
        let response: AuraResponse =
            serde_json::from_value(value).map_err(|_| ProtocolError::Malformed(snippet(body)))?;
        if response.exception_event {
            return Err(ProtocolError::Action {
                id: "batch".into(),
                message: response
                    .exception_message
                    .unwrap_or_else(|| "server raised an exception event".into()),
            });
        }
        if response.actions.is_empty() {
            return Err(ProtocolError::Malformed(
                "response carries no actions".into(),
            ));
        }
        Ok(response)
    }
}

fn unwrap_action(action: ActionResult) -> Result<Value> {
    match action.state {
        ActionState::Success => Ok(action.return_value),
        _ => Err(ProtocolError::Action {
            message: action.error_message(),
            id: action.id,
        }),
    }
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(160) {
        Some((i, _)) => format!("{}...", &trimmed[..i]),
        None => trimmed.to_string(),
    }
}
