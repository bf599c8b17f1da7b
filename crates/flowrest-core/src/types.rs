//! Domain records exchanged with the Flow REST API.
//!
//! Integers are kept exactly as the service encodes them (decimal strings),
//! so records round-trip without loss. List fields keep the order the
//! service returned: signatures line up positionally with their signers and
//! events follow execution order.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::cadence::decode_payload;
use crate::error::CoreError;

// ==============================================================================
// Identifiers
// ==============================================================================

/// A block, transaction, collection id or account address.
///
/// Callers may hold either the hex text or the raw bytes; raw bytes are
/// hex-encoded (lowercase) before they are placed in a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Hex(String),
    Raw(Vec<u8>),
}

impl Identifier {
    /// The form used in request paths.
    pub fn to_hex(&self) -> Cow<'_, str> {
        match self {
            Self::Hex(s) => Cow::Borrowed(s.as_str()),
            Self::Raw(bytes) => Cow::Owned(hex::encode(bytes)),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::Hex(s.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::Hex(s)
    }
}

impl From<&String> for Identifier {
    fn from(s: &String) -> Self {
        Self::Hex(s.clone())
    }
}

impl From<Vec<u8>> for Identifier {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Raw(bytes)
    }
}

impl From<&[u8]> for Identifier {
    fn from(bytes: &[u8]) -> Self {
        Self::Raw(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Identifier {
    fn from(bytes: [u8; N]) -> Self {
        Self::Raw(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Identifier {
    fn from(bytes: &[u8; N]) -> Self {
        Self::Raw(bytes.to_vec())
    }
}

// ==============================================================================
// Blocks
// ==============================================================================

/// A block with its header fields, payload and execution result summary
/// flattened into one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub parent_id: String,
    pub parent_voter_signature: String,
    pub height: String,
    pub timestamp: String,
    pub collection_guarantees: Vec<CollectionGuarantee>,
    pub block_seals: Vec<BlockSeal>,
    /// `None` when the service did not expand the execution result (for
    /// example, a block that is not executed yet).
    pub execution_result: Option<ExecutionResultSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionGuarantee {
    pub collection_id: String,
    pub signatures: Vec<String>,
    pub signer_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSeal {
    pub block_id: String,
    pub execution_receipt_id: String,
    pub execution_receipt_signatures: Vec<String>,
    pub result_approval_signatures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResultSummary {
    pub id: String,
    pub block_id: String,
    pub events: Vec<Event>,
}

// ==============================================================================
// Accounts
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    pub balance: String,
    #[serde(default)]
    pub keys: Vec<AccountKey>,
    /// Contract name to source mapping, kept as the service sent it.
    #[serde(default)]
    pub contracts: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountKey {
    pub index: String,
    pub public_key: String,
    pub signing_algorithm: String,
    pub hashing_algorithm: String,
    pub sequence_number: String,
    pub weight: String,
    pub revoked: bool,
}

// ==============================================================================
// Transactions
// ==============================================================================

/// A transaction as submitted to, or fetched from, the service.
///
/// Field order is the serialization order used for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Service-assigned id. Only present on fetched transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub script: String,
    #[serde(default)]
    pub arguments: Vec<String>,
    pub reference_block_id: String,
    pub gas_limit: String,
    pub proposal_key: ProposalKey,
    pub payer: String,
    #[serde(default)]
    pub authorizers: Vec<String>,
    #[serde(default)]
    pub payload_signatures: Vec<TransactionSignature>,
    #[serde(default)]
    pub envelope_signatures: Vec<TransactionSignature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalKey {
    pub address: String,
    pub key_index: String,
    pub sequence_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSignature {
    pub address: String,
    #[serde(alias = "key_id")]
    pub key_index: String,
    pub signature: String,
}

/// Lifecycle state of a transaction as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Pending,
    Finalized,
    Executed,
    Sealed,
    Expired,
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    /// `true` once the status can no longer change.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Sealed | Self::Expired)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Pending => write!(f, "Pending"),
            Self::Finalized => write!(f, "Finalized"),
            Self::Executed => write!(f, "Executed"),
            Self::Sealed => write!(f, "Sealed"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub block_id: String,
    pub status: TransactionStatus,
    /// Empty when execution succeeded.
    #[serde(default)]
    pub error_message: String,
    pub computation_used: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl TransactionResult {
    pub fn is_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

// ==============================================================================
// Events
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub transaction_id: String,
    pub transaction_index: String,
    pub event_index: String,
    /// Base64-encoded JSON-Cadence value.
    pub payload: String,
}

impl Event {
    /// Decode the base64 payload into its JSON-Cadence value.
    pub fn decoded_payload(&self) -> Result<serde_json::Value, CoreError> {
        decode_payload(&self.payload)
    }
}

// ==============================================================================
// Scripts, Collections, Execution Results
// ==============================================================================

/// A read-only script request: base64 source and base64 JSON-Cadence
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub script: String,
    #[serde(default)]
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    /// Empty when the service did not expand the transactions.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub id: String,
    pub block_id: String,
    pub previous_result_id: String,
    pub events: Vec<Event>,
}
