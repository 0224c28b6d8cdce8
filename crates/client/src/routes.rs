//! Route discovery via the community bootstrap script.
//!
//! The bootstrap JS embeds a `routes":{...}` map of every Aura route the
//! site serves, and its own URL carries an `aura.attributes` query blob
//! with the theme/branding attributes the page-component call needs.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use url::Url;

use crate::error::{ClientError, Result};
use crate::http::HttpClient;

static ROUTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"routes":\{.+?,\s?.+?\}\s?\}"#).expect("ROUTES_RE should compile")
});

/// One navigable route plus the shared attributes every page-component
/// request has to echo back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    pub id: String,
    pub event: String,
    pub route_uddid: String,
    pub view_uuid: String,
    #[serde(rename = "themeLayoutType")]
    pub theme_layout_type: String,
    #[serde(rename = "publishedChangelistNum")]
    pub published_changelist_num: Value,
    #[serde(rename = "brandingSetId")]
    pub branding_set_id: String,
}

#[derive(Debug, Deserialize)]
struct RouteDetails {
    id: String,
    event: String,
    route_uddid: String,
    view_uuid: String,
}

#[derive(Debug, Deserialize)]
struct BootstrapAttributes {
    #[serde(rename = "themeLayoutType")]
    theme_layout_type: String,
    #[serde(rename = "publishedChangelistNum", default)]
    published_changelist_num: Value,
    #[serde(rename = "brandingSetId", default)]
    branding_set_id: String,
}

pub struct RoutesCollector {
    bootstrap_url: String,
    http: HttpClient,
}

impl RoutesCollector {
    pub fn new(bootstrap_url: impl Into<String>, http: HttpClient) -> Self {
        Self {
            bootstrap_url: bootstrap_url.into(),
            http,
        }
    }

    pub async fn collect(&self) -> Result<Vec<Route>> {
        let body = self.http.get(&self.bootstrap_url).await?;
        let routes = extract_routes(&body, &self.bootstrap_url)?;
        info!(target = "aura_sniffer", count = routes.len(), "routes collected");
        Ok(routes)
    }
}

fn extract_routes(body: &str, bootstrap_url: &str) -> Result<Vec<Route>> {
    let attributes = bootstrap_attributes(bootstrap_url)?;

    // The routes map spans minified lines; normalize whitespace first.
    let flattened = body.split_whitespace().collect::<Vec<_>>().join(" ");
    let matched = ROUTES_RE
        .find(&flattened)
        .ok_or_else(|| ClientError::Config("no routes map in the bootstrap script".into()))?;
    let routes_json = matched.as_str().trim_start_matches("routes\":");
    let routes_map: std::collections::BTreeMap<String, RouteDetails> =
        serde_json::from_str(routes_json)
            .map_err(|e| ClientError::Config(format!("routes map is not valid JSON: {e}")))?;

    Ok(routes_map
        .into_iter()
        .map(|(path, details)| Route {
            path,
            id: details.id,
            event: details.event,
            route_uddid: details.route_uddid,
            view_uuid: details.view_uuid,
            theme_layout_type: attributes.theme_layout_type.clone(),
            published_changelist_num: attributes.published_changelist_num.clone(),
            branding_set_id: attributes.branding_set_id.clone(),
        })
        .collect())
}

/// The `aura.attributes` query blob of the bootstrap URL.
fn bootstrap_attributes(bootstrap_url: &str) -> Result<BootstrapAttributes> {
    let url = Url::parse(bootstrap_url)
        .map_err(|e| ClientError::Config(format!("bad bootstrap URL: {e}")))?;
    let raw = url
        .query_pairs()
        .find(|(key, _)| key == "aura.attributes")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| {
            ClientError::Config("bootstrap URL carries no aura.attributes blob".into())
        })?;
    serde_json::from_str(&raw)
        .map_err(|e| ClientError::Config(format!("aura.attributes is not valid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BOOTSTRAP_URL: &str = "https://x.com/s/sfsites/c/bootstrap.js?aura.attributes=%7B%22themeLayoutType%22%3A%22Inner%22%2C%22publishedChangelistNum%22%3A42%2C%22brandingSetId%22%3A%22bs-1%22%7D&jwt=eyJ";

    fn bootstrap_body() -> String {
        let routes = json!({
            "/contact": {"id": "v-1", "event": "forceCommunity:routeContact", "route_uddid": "u-1", "view_uuid": "vw-1"},
            "/home": {"id": "v-2", "event": "forceCommunity:routeHome", "route_uddid": "u-2", "view_uuid": "vw-2"},
        });
        format!("var cfg = {{\"routes\":{routes} }};\nloadApp(cfg);")
    }

    #[test]
    fn extracts_routes_with_shared_attributes() {
        let routes = extract_routes(&bootstrap_body(), BOOTSTRAP_URL).unwrap();
        assert_eq!(routes.len(), 2);

        let contact = routes.iter().find(|r| r.path == "/contact").unwrap();
        assert_eq!(contact.id, "v-1");
        assert_eq!(contact.event, "forceCommunity:routeContact");
        assert_eq!(contact.view_uuid, "vw-1");
        assert_eq!(contact.theme_layout_type, "Inner");
        assert_eq!(contact.published_changelist_num, json!(42));
        assert_eq!(contact.branding_set_id, "bs-1");
    }

    #[test]
    fn missing_routes_map_is_config_error() {
        let err = extract_routes("var cfg = {};", BOOTSTRAP_URL).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn missing_attributes_blob_is_config_error() {
        let err = extract_routes(&bootstrap_body(), "https://x.com/bootstrap.js?jwt=e").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
