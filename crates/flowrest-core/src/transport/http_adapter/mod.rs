//! `reqwest`-backed [`Transport`](super::Transport) for Flow access nodes.

mod client;
mod connection;

pub use client::{HttpTransport, HttpTransportConfig};
