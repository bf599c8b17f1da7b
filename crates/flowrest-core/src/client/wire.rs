//! Response shapes as the REST service sends them. Fields the records do
//! not carry (`_links`, `_expandable`, chunk lists) are ignored.

use serde::Deserialize;

use crate::types::Event;

#[derive(Deserialize)]
pub(super) struct RawBlock {
    pub(super) header: RawBlockHeader,
    pub(super) payload: Option<RawBlockPayload>,
    pub(super) execution_result: Option<RawExecutionResult>,
}

#[derive(Deserialize)]
pub(super) struct RawBlockHeader {
    pub(super) id: String,
    pub(super) parent_id: String,
    pub(super) height: String,
    pub(super) timestamp: String,
    #[serde(default)]
    pub(super) parent_voter_signature: String,
}

#[derive(Deserialize)]
pub(super) struct RawBlockPayload {
    #[serde(default)]
    pub(super) collection_guarantees: Vec<RawCollectionGuarantee>,
    #[serde(default)]
    pub(super) block_seals: Vec<RawBlockSeal>,
}

#[derive(Deserialize)]
pub(super) struct RawCollectionGuarantee {
    pub(super) collection_id: String,
    #[serde(default)]
    pub(super) signer_ids: Vec<String>,
    #[serde(default)]
    pub(super) signatures: Vec<String>,
    /// Newer service versions send one aggregated signature.
    #[serde(default)]
    pub(super) signature: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct RawBlockSeal {
    pub(super) block_id: String,
    #[serde(alias = "result_id")]
    pub(super) execution_receipt_id: String,
    #[serde(default)]
    pub(super) execution_receipt_signatures: Vec<String>,
    #[serde(default)]
    pub(super) result_approval_signatures: Vec<String>,
    #[serde(default)]
    pub(super) aggregated_approval_signatures: Vec<RawAggregatedSignature>,
}

#[derive(Deserialize)]
pub(super) struct RawAggregatedSignature {
    #[serde(default)]
    pub(super) verifier_signatures: Vec<String>,
}

#[derive(Deserialize)]
pub(super) struct RawExecutionResult {
    pub(super) id: String,
    pub(super) block_id: String,
    #[serde(default)]
    pub(super) previous_result_id: String,
    #[serde(default)]
    pub(super) events: Vec<Event>,
}

/// One block's worth of events from `/events`.
#[derive(Deserialize)]
pub(super) struct RawBlockEvents {
    #[serde(default)]
    pub(super) events: Vec<Event>,
}
