//! HTTP client for the undocumented Aura endpoints exposed by Salesforce
//! Experience Cloud community sites.
//!
//! The crate layers on top of `aura-sniffer-protocol`:
//!
//! * [`http`] - thin reqwest wrapper (fixed UA, sid cookie, lax TLS)
//! * [`endpoint`] - probes which Aura servlet path a site actually serves
//! * [`config`] - scrapes fwuid/app/bootstrap details out of the markup
//! * [`client`] - [`AuraClient`], one method per known server action
//! * [`routes`] / [`components`] - bootstrap-JS scraping collectors
//!
//! Everything is strictly sequential: one request in flight at a time.

pub mod client;
pub mod components;
pub mod config;
pub mod descriptors;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod routes;
pub mod session;

pub use client::AuraClient;
pub use components::ComponentCollector;
pub use config::{AuraConfig, AuraConfigLoader};
pub use endpoint::EndpointSelector;
pub use error::{ClientError, Result};
pub use http::HttpClient;
pub use routes::{Route, RoutesCollector};
pub use session::SessionCredentials;
