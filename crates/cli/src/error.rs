use aura_sniffer_client::ClientError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SnifferError>;

#[derive(Debug, Error)]
pub enum SnifferError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
