//! Wire types for the Salesforce Aura protocol.
//!
//! This crate contains the serde-serializable types used for communication
//! with the Aura servlet exposed by Experience Cloud community sites. These
//! types represent the "protocol layer" - the shapes of data as they appear
//! on the wire, plus the pure transformations around them (form encoding of
//! the request envelope, unwrapping of the batched response).
//!
//! None of the Aura endpoints are documented by Salesforce; every shape here
//! was observed by proxying real community traffic. The HTTP layer lives in
//! `aura-sniffer-client`.

pub mod context;
pub mod envelope;
pub mod error;
pub mod message;
pub mod response;

pub use context::*;
pub use envelope::*;
pub use error::*;
pub use message::*;
pub use response::*;
