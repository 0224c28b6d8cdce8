//! The request-issuing facade: one method per known server action.

use aura_sniffer_protocol::{
    AuraContext, AuraMessage, AuthDetector, Envelope, ProtocolError, ResponseUnwrapper,
};
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::config::AuraConfigLoader;
use crate::descriptors;
use crate::endpoint::EndpointSelector;
use crate::error::{ClientError, Result};
use crate::http::HttpClient;
use crate::session::SessionCredentials;

/// Issues Aura action requests against one community site. Credentials and
/// context are fixed at construction; requests are strictly sequential.
pub struct AuraClient {
    http: HttpClient,
    endpoint: String,
    context: AuraContext,
    token: String,
    unwrapper: ResponseUnwrapper,
}

impl AuraClient {
    pub fn new(
        endpoint: impl Into<String>,
        context: AuraContext,
        credentials: Option<&SessionCredentials>,
    ) -> Result<Self> {
        let http = HttpClient::new(credentials.map(|c| c.sid.clone()))?;
        Ok(Self::from_parts(http, endpoint.into(), context, credentials))
    }

    /// Full bootstrap against a base URL: probe the servlet path, scrape
    /// the Aura config, build the client. Returns the bootstrap-JS URL
    /// alongside for the routes collector.
    pub async fn connect(
        base_url: &str,
        credentials: Option<&SessionCredentials>,
    ) -> Result<(Self, Option<String>)> {
        let endpoint = EndpointSelector::new(base_url)?.select().await?;
        let http = HttpClient::new(credentials.map(|c| c.sid.clone()))?;
        let config = AuraConfigLoader::new(base_url, http.clone()).load().await?;
        let client = Self::from_parts(http, endpoint, config.context, credentials);
        Ok((client, config.bootstrap_url))
    }

    fn from_parts(
        http: HttpClient,
        endpoint: String,
        context: AuraContext,
        credentials: Option<&SessionCredentials>,
    ) -> Self {
        Self {
            http,
            endpoint,
            context,
            token: credentials.map(|c| c.token.clone()).unwrap_or_default(),
            unwrapper: ResponseUnwrapper::new(),
        }
    }

    /// Swap in site-specific auth-failure markers.
    pub fn with_detector(mut self, detector: AuthDetector) -> Self {
        self.unwrapper = ResponseUnwrapper::with_detector(detector);
        self
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Invoke one action and unwrap its `returnValue`.
    pub async fn execute(&self, descriptor: &str, params: Value) -> Result<Value> {
        let message = AuraMessage::single(descriptor, params)?;
        let body = self.send(message).await?;
        Ok(self.unwrapper.unwrap_single(&body)?)
    }

    /// Invoke a batch; per-action results come back in submission order,
    /// failed actions as `Err` slots that leave their siblings intact.
    pub async fn execute_batch(
        &self,
        actions: Vec<(String, Value)>,
    ) -> Result<Vec<std::result::Result<Value, ProtocolError>>> {
        let submitted = actions.len();
        let message = AuraMessage::batch(actions)?;
        let body = self.send(message).await?;
        Ok(self.unwrapper.unwrap_batch(&body, submitted)?)
    }

    /// Invoke one action and keep the whole response JSON (the component
    /// sweep scans outside `returnValue`).
    pub async fn execute_raw(&self, descriptor: &str, params: Value) -> Result<Value> {
        let message = AuraMessage::single(descriptor, params)?;
        let body = self.send(message).await?;
        Ok(self.unwrapper.raw(&body)?)
    }

    async fn send(&self, message: AuraMessage) -> Result<String> {
        let descriptor = message.actions[0].descriptor.clone();
        debug!(
            target = "aura_sniffer",
            %descriptor,
            actions = message.len(),
            "sending aura message"
        );
        let body = Envelope::new(message, self.context.clone(), &self.token).to_form_body()?;
        self.http.post_form(&self.endpoint, body).await
    }

    /// Names of the sObjects the session can see.
    pub async fn sobjects(&self) -> Result<Vec<String>> {
        let config_data = self.execute(descriptors::GET_CONFIG_DATA, json!({})).await?;
        let names = sobject_names(&config_data);
        info!(target = "aura_sniffer", count = names.len(), "sObjects discovered");
        Ok(names)
    }

    /// One page of records for an sObject.
    pub async fn records(&self, entity: &str, page_size: u32, page: u32) -> Result<Value> {
        self.execute(
            descriptors::GET_ITEMS,
            descriptors::get_items_params(entity, page_size, page),
        )
        .await
    }

    pub async fn record(&self, record_id: &str) -> Result<Value> {
        self.execute(
            descriptors::GET_RECORD,
            descriptors::get_record_params(record_id),
        )
        .await
    }

    pub async fn search(&self, term: &str, entity: &str, fields: &[String]) -> Result<Value> {
        self.execute(
            descriptors::SEARCH_RECORDS,
            descriptors::search_params(term, entity, fields),
        )
        .await
    }

    pub async fn feed_items(&self, record_id: &str) -> Result<Value> {
        self.execute(
            descriptors::GET_FEED_ITEMS,
            descriptors::feed_items_params(record_id),
        )
        .await
    }

    pub async fn apex_methods(&self) -> Result<Value> {
        self.execute(descriptors::GET_EXPOSED_APEX_METHODS, json!({}))
            .await
    }

    /// Invoke an exposed Apex method with named parameters.
    pub async fn call_apex(
        &self,
        class: &str,
        method: &str,
        params: Value,
        namespace: &str,
    ) -> Result<Value> {
        if !params.is_object() {
            return Err(ClientError::InvalidParameter(
                "Apex params must be a JSON object of named parameters".into(),
            ));
        }
        self.execute(
            descriptors::EXECUTE_APEX,
            descriptors::execute_apex_params(class, method, params, namespace),
        )
        .await
    }

    pub async fn profile_menu(&self) -> Result<Value> {
        self.execute(descriptors::GET_PROFILE_MENU, json!({})).await
    }
}

/// sObject API names out of the `getConfigData` payload.
fn sobject_names(config_data: &Value) -> Vec<String> {
    config_data
        .get("apiNamesToKeyPrefixes")
        .and_then(Value::as_object)
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sobject_names_come_from_key_prefix_map() {
        let config_data = json!({
            "apiNamesToKeyPrefixes": {"Account": "001", "Case": "500", "Invoice__c": "a0A"},
            "somethingElse": true,
        });
        assert_eq!(
            sobject_names(&config_data),
            ["Account", "Case", "Invoice__c"]
        );
    }

    #[test]
    fn missing_prefix_map_yields_no_names() {
        assert!(sobject_names(&json!({"other": 1})).is_empty());
    }
}
