use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cadence::decode_payload;
use crate::error::{CoreError, ServiceError};
use crate::types::{
    Block, BlockSeal, CollectionGuarantee, Event, ExecutionResult, ExecutionResultSummary,
};

use super::wire::{RawBlock, RawBlockEvents, RawBlockSeal, RawCollectionGuarantee, RawExecutionResult};

/// Parse a response body and reject service error envelopes.
///
/// Any JSON object with a `code` field is an envelope, whatever shape the
/// caller expected.
pub(super) fn parse_body(body: &str) -> Result<serde_json::Value, CoreError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| CoreError::InvalidResponse(format!("decode JSON response: {e}; body={body}")))?;
    reject_envelope(value)
}

fn reject_envelope(value: serde_json::Value) -> Result<serde_json::Value, CoreError> {
    let is_envelope = value
        .as_object()
        .is_some_and(|object| object.contains_key("code"));
    if is_envelope {
        let err = ServiceError::from_envelope(value);
        debug!(code = ?err.code(), message = ?err.service_message(), "service returned error envelope");
        return Err(err.into());
    }
    Ok(value)
}

/// Deserialize an already-checked body into a record.
pub(super) fn project<T: DeserializeOwned>(
    value: serde_json::Value,
    what: &str,
) -> Result<T, CoreError> {
    serde_json::from_value(value)
        .map_err(|e| CoreError::InvalidResponse(format!("invalid {what} response: {e}")))
}

pub(super) fn project_blocks(value: serde_json::Value) -> Result<Vec<Block>, CoreError> {
    let raw: Vec<RawBlock> = project(value, "blocks")?;
    Ok(raw.into_iter().map(block_from_raw).collect())
}

fn block_from_raw(raw: RawBlock) -> Block {
    let (collection_guarantees, block_seals) = match raw.payload {
        Some(payload) => (
            payload
                .collection_guarantees
                .into_iter()
                .map(guarantee_from_raw)
                .collect(),
            payload.block_seals.into_iter().map(seal_from_raw).collect(),
        ),
        None => (Vec::new(), Vec::new()),
    };

    Block {
        id: raw.header.id,
        parent_id: raw.header.parent_id,
        parent_voter_signature: raw.header.parent_voter_signature,
        height: raw.header.height,
        timestamp: raw.header.timestamp,
        collection_guarantees,
        block_seals,
        execution_result: raw.execution_result.map(|result| ExecutionResultSummary {
            id: result.id,
            block_id: result.block_id,
            events: result.events,
        }),
    }
}

fn guarantee_from_raw(raw: RawCollectionGuarantee) -> CollectionGuarantee {
    let mut signatures = raw.signatures;
    if signatures.is_empty() {
        signatures.extend(raw.signature);
    }
    CollectionGuarantee {
        collection_id: raw.collection_id,
        signatures,
        signer_ids: raw.signer_ids,
    }
}

fn seal_from_raw(raw: RawBlockSeal) -> BlockSeal {
    let mut result_approval_signatures = raw.result_approval_signatures;
    result_approval_signatures.extend(
        raw.aggregated_approval_signatures
            .into_iter()
            .flat_map(|aggregated| aggregated.verifier_signatures),
    );
    BlockSeal {
        block_id: raw.block_id,
        execution_receipt_id: raw.execution_receipt_id,
        execution_receipt_signatures: raw.execution_receipt_signatures,
        result_approval_signatures,
    }
}

/// Flatten per-block event groups into one stream, keeping block order and
/// then event order within each block.
pub(super) fn flatten_events(value: serde_json::Value) -> Result<Vec<Event>, CoreError> {
    let groups: Vec<RawBlockEvents> = project(value, "events")?;
    Ok(groups.into_iter().flat_map(|group| group.events).collect())
}

pub(super) fn project_execution_results(
    value: serde_json::Value,
) -> Result<Vec<ExecutionResult>, CoreError> {
    let raw: Vec<RawExecutionResult> = project(value, "execution results")?;
    Ok(raw
        .into_iter()
        .map(|result| ExecutionResult {
            id: result.id,
            block_id: result.block_id,
            previous_result_id: result.previous_result_id,
            events: result.events,
        })
        .collect())
}

/// Script results arrive as a JSON string holding base64-encoded JSON.
pub(super) fn decode_script_result(value: serde_json::Value) -> Result<serde_json::Value, CoreError> {
    let encoded = value.as_str().ok_or_else(|| {
        CoreError::InvalidResponse(format!("expected base64 string script result, got: {value}"))
    })?;
    decode_payload(encoded)
}
