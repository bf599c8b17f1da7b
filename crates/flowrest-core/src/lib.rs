//! Typed client for the Flow access node REST API.
//!
//! [`RestClient`] maps each API operation onto one HTTP round trip and
//! returns typed records, or a [`CoreError`] when the transport fails or the
//! service answers with an error envelope.

pub mod cadence;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_util;

pub use cadence::Argument;
pub use client::RestClient;
pub use endpoint::{Endpoint, Network};
pub use error::{CoreError, ServiceError, TransportError};
pub use types::Identifier;
