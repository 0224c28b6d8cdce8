//! Discovery of custom Lightning components reachable through the site.
//!
//! For every scraped route the collector requests the page component tree
//! and scans the full response for `descriptor` keys carrying `markup://`
//! values. Standard-namespace components are filtered out; what remains is
//! org-specific attack surface.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::AuraClient;
use crate::descriptors;
use crate::error::Result;
use crate::routes::Route;

/// Namespaces shipped with the platform, never interesting in a sweep.
const STANDARD_NAMESPACES: [&str; 9] = [
    "aura:",
    "ui:",
    "force:",
    "forceChatter:",
    "forceCommunity:",
    "lightning:",
    "siteforce:",
    "instrumentation:",
    "performance:",
];

pub struct ComponentCollector<'a> {
    client: &'a AuraClient,
}

impl<'a> ComponentCollector<'a> {
    pub fn new(client: &'a AuraClient) -> Self {
        Self { client }
    }

    /// Sweep every route sequentially. A route that errors out is logged
    /// and skipped; the sweep itself only fails when nothing is reachable.
    pub async fn collect(&self, routes: &[Route]) -> Result<Vec<String>> {
        let mut found = BTreeSet::new();
        for route in routes {
            debug!(target = "aura_sniffer", path = %route.path, "scanning route");
            let response = self
                .client
                .execute_raw(
                    descriptors::GET_PAGE_COMPONENT,
                    descriptors::page_component_params(route),
                )
                .await;
            match response {
                Ok(tree) => scan_descriptors(&tree, &mut found),
                Err(err) => {
                    warn!(target = "aura_sniffer", path = %route.path, error = %err, "route skipped");
                }
            }
        }
        Ok(found.into_iter().filter(|c| is_custom(c)).collect())
    }
}

/// Recursively collect every `markup://` component descriptor in the tree.
pub(crate) fn scan_descriptors(value: &Value, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                if key == "descriptor" {
                    if let Some(markup) = value.as_str().and_then(|s| s.strip_prefix("markup://")) {
                        out.insert(markup.to_string());
                    }
                }
                scan_descriptors(value, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                scan_descriptors(item, out);
            }
        }
        _ => {}
    }
}

pub(crate) fn is_custom(component: &str) -> bool {
    !STANDARD_NAMESPACES
        .iter()
        .any(|ns| component.starts_with(ns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scan_finds_nested_markup_descriptors() {
        let tree = json!({
            "descriptor": "markup://c:customBanner",
            "children": [
                {"descriptor": "markup://lightning:card", "attributes": {"descriptor": "not-markup"}},
                {"inner": {"descriptor": "markup://c:leakyList"}},
            ],
        });
        let mut found = BTreeSet::new();
        scan_descriptors(&tree, &mut found);
        let found: Vec<_> = found.into_iter().collect();
        assert_eq!(found, ["c:customBanner", "c:leakyList", "lightning:card"]);
    }

    #[test]
    fn standard_namespaces_are_filtered() {
        assert!(is_custom("c:customBanner"));
        assert!(is_custom("mynamespace:widget"));
        assert!(!is_custom("lightning:card"));
        assert!(!is_custom("forceCommunity:profileMenu"));
        assert!(!is_custom("aura:iteration"));
    }
}
