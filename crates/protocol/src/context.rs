//! The `aura.context` blob the servlet uses to route a call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Framework context sent alongside every action batch.
///
/// The servlet rejects calls whose `fwuid` does not match the deployed
/// framework build, so the real values are normally scraped from the
/// community markup. For a handful of calls the server tolerates the
/// minimal placeholder from [`AuraContext::minimal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuraContext {
    pub mode: String,
    pub fwuid: String,
    pub app: String,
    /// Map of loaded component descriptors to their hashes.
    pub loaded: Value,
    pub dn: Vec<Value>,
    pub globals: Value,
    pub uad: bool,
}

impl AuraContext {
    /// Static placeholder context for sites where the fwuid blob cannot be
    /// scraped. Good enough for some undocumented calls, not all.
    pub fn minimal() -> Self {
        Self::from_markup("", "siteforce:communityApp", Value::Object(Map::new()))
    }

    /// Context built from the details extracted out of the site markup.
    pub fn from_markup(fwuid: impl Into<String>, app: impl Into<String>, loaded: Value) -> Self {
        Self {
            mode: "PROD".into(),
            fwuid: fwuid.into(),
            app: app.into(),
            loaded,
            dn: Vec::new(),
            globals: Value::Object(Map::new()),
            uad: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_markup_fills_fixed_fields() {
        let ctx = AuraContext::from_markup("ABC123", "siteforce:communityApp", json!({"a": "h"}));
        assert_eq!(ctx.mode, "PROD");
        assert!(!ctx.uad);
        assert!(ctx.dn.is_empty());
        let wire = serde_json::to_value(&ctx).unwrap();
        assert_eq!(wire["fwuid"], "ABC123");
        assert_eq!(wire["loaded"]["a"], "h");
    }
}
