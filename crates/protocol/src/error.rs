use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors produced while building envelopes or unwrapping responses.
#[derive(Debug, Clone, Error)]
pub enum ProtocolError {
    /// Caller-supplied input that cannot be put on the wire.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The session is dead or the token is wrong; the operator has to
    /// re-acquire the Aura token and sid cookie.
    #[error("authentication failed ({0}); re-acquire the Aura token and sid")]
    Authentication(String),

    /// The server processed the batch but rejected this specific action.
    #[error("action {id} failed: {message}")]
    Action { id: String, message: String },

    /// Response body that is not a recognizable Aura response.
    #[error("malformed Aura response: {0}")]
    Malformed(String),
}
