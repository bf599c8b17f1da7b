//! Where a [`RestClient`](crate::RestClient) sends its requests.

use std::str::FromStr;
use std::sync::Arc;

use crate::transport::Transport;

pub const LOCALHOST_ENDPOINT: &str = "http://localhost:8888/v1";
pub const TESTNET_ENDPOINT: &str = "https://rest-testnet.onflow.org/v1";
pub const MAINNET_ENDPOINT: &str = "https://rest-mainnet.onflow.org/v1";

/// Well-known Flow networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// A local emulator.
    #[default]
    Localhost,
    Testnet,
    Mainnet,
}

impl Network {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Localhost => LOCALHOST_ENDPOINT,
            Self::Testnet => TESTNET_ENDPOINT,
            Self::Mainnet => MAINNET_ENDPOINT,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Localhost => write!(f, "localhost"),
            Self::Testnet => write!(f, "testnet"),
            Self::Mainnet => write!(f, "mainnet"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "localhost" | "local" | "emulator" => Ok(Self::Localhost),
            "testnet" => Ok(Self::Testnet),
            "mainnet" => Ok(Self::Mainnet),
            other => Err(format!(
                "unknown network `{other}`; expected localhost, testnet or mainnet"
            )),
        }
    }
}

/// The three ways to bind a client, resolved once at construction.
#[derive(Clone)]
pub enum Endpoint {
    Network(Network),
    Url(String),
    /// A pre-built transport, used as-is.
    Transport(Arc<dyn Transport>),
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(network) => f.debug_tuple("Network").field(network).finish(),
            Self::Url(url) => f.debug_tuple("Url").field(url).finish(),
            Self::Transport(transport) => f
                .debug_tuple("Transport")
                .field(&transport.base_url())
                .finish(),
        }
    }
}

impl From<Network> for Endpoint {
    fn from(network: Network) -> Self {
        Self::Network(network)
    }
}

impl From<&str> for Endpoint {
    fn from(url: &str) -> Self {
        Self::Url(url.to_owned())
    }
}

impl From<String> for Endpoint {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<Arc<dyn Transport>> for Endpoint {
    fn from(transport: Arc<dyn Transport>) -> Self {
        Self::Transport(transport)
    }
}
