//! Typed operations over the Flow access node REST API.
//!
//! Every operation is one round trip: build the path, call the transport,
//! reject service error envelopes, then project the body onto a record.

mod parsing;
mod paths;
mod wire;

use std::sync::Arc;

use tracing::debug;

use crate::endpoint::Endpoint;
use crate::error::CoreError;
use crate::transport::{HttpTransport, HttpTransportConfig, Transport};
use crate::types::{
    Account, Block, Collection, Event, ExecutionResult, Identifier, Script, Transaction,
    TransactionResult,
};

use parsing::{
    decode_script_result, flatten_events, parse_body, project, project_blocks,
    project_execution_results,
};

/// Client for one Flow REST endpoint.
///
/// Holds a single transport binding for its lifetime. Cloning is cheap and
/// clones share the binding.
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.transport.base_url())
            .finish()
    }
}

impl RestClient {
    /// Bind to a named network, a base URL, or an existing transport.
    pub fn new(endpoint: impl Into<Endpoint>) -> Result<Self, CoreError> {
        Self::with_config(endpoint, HttpTransportConfig::default())
    }

    /// Like [`RestClient::new`], with explicit HTTP settings. The settings
    /// are unused for [`Endpoint::Transport`].
    pub fn with_config(
        endpoint: impl Into<Endpoint>,
        config: HttpTransportConfig,
    ) -> Result<Self, CoreError> {
        let transport: Arc<dyn Transport> = match endpoint.into() {
            Endpoint::Network(network) => {
                Arc::new(HttpTransport::with_config(network.base_url(), config)?)
            }
            Endpoint::Url(url) => Arc::new(HttpTransport::with_config(&url, config)?),
            Endpoint::Transport(transport) => transport,
        };
        Ok(Self::from_transport(transport))
    }

    pub fn from_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    async fn get_json(&self, path: &str) -> Result<serde_json::Value, CoreError> {
        let body = self.transport.get(path).await?;
        parse_body(&body)
    }

    async fn post_json(&self, path: &str, body: String) -> Result<serde_json::Value, CoreError> {
        let body = self.transport.post(path, body).await?;
        parse_body(&body)
    }

    // ==========================================================================
    // Blocks
    // ==========================================================================

    /// The latest finalized block. The service answers with a one-element
    /// list.
    pub async fn get_latest_block(&self) -> Result<Vec<Block>, CoreError> {
        let raw = self.get_json(&paths::latest_block()).await?;
        project_blocks(raw)
    }

    pub async fn get_block(&self, id: impl Into<Identifier>) -> Result<Vec<Block>, CoreError> {
        let raw = self.get_json(&paths::block(&id.into())).await?;
        project_blocks(raw)
    }

    /// Blocks at each of the given heights.
    pub async fn get_block_height(&self, heights: &[u64]) -> Result<Vec<Block>, CoreError> {
        if heights.is_empty() {
            return Err(CoreError::InvalidArgument(
                "at least one block height is required".to_owned(),
            ));
        }
        let raw = self.get_json(&paths::blocks_at_heights(heights)).await?;
        project_blocks(raw)
    }

    /// Blocks from `start_height` to `end_height`, both inclusive.
    pub async fn get_blocks_in_range(
        &self,
        start_height: u64,
        end_height: u64,
    ) -> Result<Vec<Block>, CoreError> {
        check_height_range(start_height, end_height)?;
        let raw = self
            .get_json(&paths::blocks_in_range(start_height, end_height))
            .await?;
        project_blocks(raw)
    }

    // ==========================================================================
    // Transactions
    // ==========================================================================

    pub async fn get_transaction(
        &self,
        id: impl Into<Identifier>,
    ) -> Result<Transaction, CoreError> {
        let raw = self.get_json(&paths::transaction(&id.into())).await?;
        project(raw, "transaction")
    }

    pub async fn get_transaction_result(
        &self,
        id: impl Into<Identifier>,
    ) -> Result<TransactionResult, CoreError> {
        let raw = self.get_json(&paths::transaction_result(&id.into())).await?;
        project(raw, "transaction result")
    }

    /// Submit a signed transaction. Returns the service's response, which
    /// carries the assigned transaction `id`.
    pub async fn submit_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<serde_json::Value, CoreError> {
        let body = serde_json::to_string(transaction)
            .map_err(|e| CoreError::InvalidArgument(format!("encode transaction: {e}")))?;
        debug!(
            reference_block_id = %transaction.reference_block_id,
            payer = %transaction.payer,
            "submitting transaction"
        );
        self.post_json(paths::submit_transaction(), body).await
    }

    // ==========================================================================
    // Accounts and Scripts
    // ==========================================================================

    pub async fn get_account(&self, address: impl Into<Identifier>) -> Result<Account, CoreError> {
        let raw = self.get_json(&paths::account(&address.into())).await?;
        project(raw, "account")
    }

    /// Run a read-only script and decode its JSON-Cadence result.
    pub async fn execute_script(&self, script: &Script) -> Result<serde_json::Value, CoreError> {
        let body = serde_json::to_string(script)
            .map_err(|e| CoreError::InvalidArgument(format!("encode script: {e}")))?;
        let raw = self.post_json(paths::scripts(), body).await?;
        decode_script_result(raw)
    }

    // ==========================================================================
    // Events
    // ==========================================================================

    /// Events of `event_type` emitted between two heights (inclusive), in
    /// block order.
    pub async fn get_events_within_block_height(
        &self,
        event_type: &str,
        start_height: u64,
        end_height: u64,
    ) -> Result<Vec<Event>, CoreError> {
        check_height_range(start_height, end_height)?;
        let raw = self
            .get_json(&paths::events_in_range(event_type, start_height, end_height))
            .await?;
        flatten_events(raw)
    }

    /// Events of `event_type` emitted in the given blocks, in the order the
    /// service returns the blocks.
    pub async fn get_events<I, T>(
        &self,
        event_type: &str,
        block_ids: I,
    ) -> Result<Vec<Event>, CoreError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        let block_ids = collect_ids(block_ids, "block id")?;
        let raw = self
            .get_json(&paths::events_in_blocks(event_type, &block_ids))
            .await?;
        flatten_events(raw)
    }

    // ==========================================================================
    // Collections and Execution Results
    // ==========================================================================

    pub async fn get_collection(&self, id: impl Into<Identifier>) -> Result<Collection, CoreError> {
        let raw = self.get_json(&paths::collection(&id.into())).await?;
        project(raw, "collection")
    }

    pub async fn get_execution_results<I, T>(
        &self,
        block_ids: I,
    ) -> Result<Vec<ExecutionResult>, CoreError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        let block_ids = collect_ids(block_ids, "block id")?;
        let raw = self.get_json(&paths::execution_results(&block_ids)).await?;
        project_execution_results(raw)
    }
}

fn check_height_range(start_height: u64, end_height: u64) -> Result<(), CoreError> {
    if start_height > end_height {
        return Err(CoreError::InvalidArgument(format!(
            "start height {start_height} is above end height {end_height}"
        )));
    }
    Ok(())
}

fn collect_ids<I, T>(ids: I, what: &str) -> Result<Vec<Identifier>, CoreError>
where
    I: IntoIterator<Item = T>,
    T: Into<Identifier>,
{
    let ids: Vec<Identifier> = ids.into_iter().map(Into::into).collect();
    if ids.is_empty() {
        return Err(CoreError::InvalidArgument(format!(
            "at least one {what} is required"
        )));
    }
    Ok(ids)
}
