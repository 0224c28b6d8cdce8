use aura_sniffer_protocol::ProtocolError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// None of the known Aura servlet paths answered under the base URL.
    #[error("no live Aura endpoint under {0}; is the URL correct?")]
    NoEndpoint(String),

    /// The community markup did not yield the details a full context needs.
    #[error("could not bootstrap the Aura config: {0}")]
    Config(String),
}

impl ClientError {
    /// True when the operator has to re-acquire token/sid before retrying.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::Authentication(_)))
    }
}
