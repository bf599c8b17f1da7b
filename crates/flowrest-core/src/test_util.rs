//! Shared test helpers for `flowrest-core` unit tests.
//!
//! Holds canned REST response bodies and builders for request records so
//! tests across modules share a single source of truth for dummy data.

use std::sync::Arc;

use crate::client::RestClient;
use crate::transport::mock::MockTransport;
use crate::types::{ProposalKey, Transaction, TransactionSignature};

// ==============================================================================
// Response Bodies
// ==============================================================================

pub const ERROR_ENVELOPE: &str = r#"{"code": 404, "message": "Flow resource not found: block not found"}"#;

pub const ACCOUNT: &str = r#"{
  "address": "f8d6e0586b0a20c7",
  "balance": "99999999999700000",
  "keys": [
    {
      "index": "0",
      "public_key": "0xa6a1f28c43c89e8d04643378c93da88b52bf09c862d30a957ee403f1e7d3a6ab3723427c2bae6d13ec019e9ef892f0130caab47cae0da6b8da68f98be95d47fe",
      "signing_algorithm": "ECDSA_P256",
      "hashing_algorithm": "SHA3_256",
      "sequence_number": "0",
      "weight": "1000",
      "revoked": false
    }
  ],
  "contracts": {},
  "_expandable": {},
  "_links": { "_self": "/v1/accounts/f8d6e0586b0a20c7" }
}"#;

pub const UNEXPANDED_BLOCKS: &str = r#"[
  {
    "header": {
      "id": "7048b8707853af04ed412d669731e1a23e372a5386948ff406250e571bb68510",
      "parent_id": "f3c1ea0f81c50c4db827920c6028a6da3fc086ad2e68e9de97687f5409dea5cd",
      "height": "59554433",
      "timestamp": "2022-02-08T00:03:04.132691927Z",
      "parent_voter_signature": "pdyAoFpBYJufCD4zFHPEEut4HOSTGOPrC1CEWEdoD4aFR1K3+FwIzVymywqHzGNjjPe8LF3uMcanbep7Tjn+9APMT3PoMB3ySN6XcLJqVSfLRl2YXoc5L5PM/e9179tn"
    },
    "_expandable": {
      "payload": "/v1/blocks/7048b8707853af04ed412d669731e1a23e372a5386948ff406250e571bb68510/payload",
      "execution_result": "/v1/execution_results/42b600689ba2f9563b8ae0fbc97b79c39f43d018e29fd4ad9c1ee2f2bd8d01e2"
    },
    "_links": { "_self": "/v1/blocks/7048b8707853af04ed412d669731e1a23e372a5386948ff406250e571bb68510" }
  }
]"#;

pub const EXPANDED_BLOCKS: &str = r#"[
  {
    "header": {
      "id": "7048b8707853af04ed412d669731e1a23e372a5386948ff406250e571bb68510",
      "parent_id": "f3c1ea0f81c50c4db827920c6028a6da3fc086ad2e68e9de97687f5409dea5cd",
      "height": "59554433",
      "timestamp": "2022-02-08T00:03:04.132691927Z",
      "parent_voter_signature": "pdyAoFpB"
    },
    "payload": {
      "collection_guarantees": [
        { "collection_id": "c1", "signer_ids": ["n1", "n2"], "signature": "c2lnMQ==" }
      ],
      "block_seals": [
        {
          "block_id": "b0",
          "result_id": "r1",
          "final_state": "s1",
          "aggregated_approval_signatures": [
            { "verifier_signatures": ["v1", "v2"], "signer_ids": ["n3", "n4"] },
            { "verifier_signatures": ["v3"], "signer_ids": ["n5"] }
          ]
        }
      ]
    },
    "execution_result": {
      "id": "42b600689ba2f9563b8ae0fbc97b79c39f43d018e29fd4ad9c1ee2f2bd8d01e2",
      "block_id": "7048b8707853af04ed412d669731e1a23e372a5386948ff406250e571bb68510",
      "previous_result_id": "00",
      "events": [
        {
          "type": "flow.AccountCreated",
          "transaction_id": "t1",
          "transaction_index": "0",
          "event_index": "0",
          "payload": "eyJ0eXBlIjoiQWRkcmVzcyIsInZhbHVlIjoiMHgwMSJ9"
        }
      ],
      "chunks": [],
      "_links": { "_self": "/v1/execution_results/42b6" }
    },
    "_links": { "_self": "/v1/blocks/7048b8707853af04ed412d669731e1a23e372a5386948ff406250e571bb68510" }
  },
  {
    "header": {
      "id": "8048b8707853af04ed412d669731e1a23e372a5386948ff406250e571bb68511",
      "parent_id": "7048b8707853af04ed412d669731e1a23e372a5386948ff406250e571bb68510",
      "height": "59554434",
      "timestamp": "2022-02-08T00:03:05.132691927Z",
      "parent_voter_signature": "qdyAoFpB"
    },
    "payload": { "collection_guarantees": [], "block_seals": [] }
  }
]"#;

pub const TRANSACTION: &str = r#"{
  "id": "921a60c05e8c630fa835a40b389758dc3ca732d4e93587824e62631ee8da6ca6",
  "script": "CmltcG9ydCBOb25GdW5naWJsZVRva2VuIGZyb20gMHg1MTMyY2FmZDIyYzA0MzcxCg==",
  "arguments": [
    "eyJ0eXBlIjoiQWRkcmVzcyIsInZhbHVlIjoiMHhlZjdhMTFmNzE3MWVhMTE4In0K",
    "eyJ0eXBlIjoiVUludDY0IiwidmFsdWUiOiI0MzQxOSJ9Cg=="
  ],
  "reference_block_id": "be88f72f3a6317d479cb2911ebcd8af769d4eb8fb21ecc46d381e3ee18ea7d22",
  "gas_limit": "9999",
  "payer": "5132cafd22c04371",
  "proposal_key": {
    "address": "5132cafd22c04371",
    "key_index": "2",
    "sequence_number": "267"
  },
  "authorizers": ["5132cafd22c04371"],
  "payload_signatures": [
    {
      "address": "5132cafd22c04371",
      "key_index": "2",
      "signature": "N8IBuzElvM1Lnw5WUr7t3LgyCufJwwm/cA2vxATHP6C1yxn1ivJZTF+CeSMeC2Id9QZsw8CKFQhRBIt3KXLxbw=="
    }
  ],
  "envelope_signatures": [
    {
      "address": "5132cafd22c04371",
      "key_index": "0",
      "signature": "rSahpqtxmZ0U0Yr9eeTOlfdSDbDrg6mp+ADG7K0qU3DwcNVBaVJzizdW/J0+dNjYlXIrONGncJ68fOyugSHswA=="
    }
  ],
  "_expandable": {
    "result": "/v1/transaction_results/921a60c05e8c630fa835a40b389758dc3ca732d4e93587824e62631ee8da6ca6"
  },
  "_links": {
    "_self": "/v1/transactions/921a60c05e8c630fa835a40b389758dc3ca732d4e93587824e62631ee8da6ca6"
  }
}"#;

pub const TRANSACTION_RESULT: &str = r#"{
  "block_id": "f24b749733451af1a6ec20474f5cb9beef7d6eef9cf7533c55d4af8bb6095447",
  "status": "Sealed",
  "error_message": "[Error Code: 1007] invalid proposal key: public key 2 on account 5132cafd22c04371 has sequence number 268, but given 267",
  "computation_used": "0",
  "events": [],
  "_links": {
    "_self": "/v1/transaction_results/921a60c05e8c630fa835a40b389758dc3ca732d4e93587824e62631ee8da6ca6"
  }
}"#;

/// base64 of `{"type":"String","value":"asdf56789"}` plus a newline, as a
/// JSON string.
pub const SCRIPT_RESULT: &str = r#""eyJ0eXBlIjoiU3RyaW5nIiwidmFsdWUiOiJhc2RmNTY3ODkifQo=""#;

pub const SUBMIT_RESULT: &str = r#"{
  "id": "7b6a2bc7d1bb4dc59ab2a74b8ec2a5b4d0a7a88dcce5bb1ac7e1cd2e4fd40bd1",
  "script": "",
  "_links": { "_self": "/v1/transactions/7b6a2bc7" }
}"#;

pub const EVENT_GROUPS: &str = r#"[
  {
    "block_id": "b1",
    "block_height": "100",
    "block_timestamp": "2022-02-08T00:03:04Z",
    "events": [
      { "type": "A.0x1.T.E", "transaction_id": "t1", "transaction_index": "0", "event_index": "0", "payload": "e30=" },
      { "type": "A.0x1.T.E", "transaction_id": "t1", "transaction_index": "0", "event_index": "1", "payload": "e30=" }
    ]
  },
  {
    "block_id": "b2",
    "block_height": "101",
    "block_timestamp": "2022-02-08T00:03:05Z",
    "events": []
  },
  {
    "block_id": "b3",
    "block_height": "102",
    "block_timestamp": "2022-02-08T00:03:06Z",
    "events": [
      { "type": "A.0x1.T.E", "transaction_id": "t3", "transaction_index": "2", "event_index": "0", "payload": "e30=" }
    ]
  }
]"#;

pub const COLLECTION: &str = r#"{
  "id": "c1",
  "transactions": [
    {
      "id": "t1",
      "script": "cHViIGZ1biBtYWluKCkge30=",
      "arguments": [],
      "reference_block_id": "b0",
      "gas_limit": "100",
      "payer": "01",
      "proposal_key": { "address": "01", "key_index": "0", "sequence_number": "1" },
      "authorizers": ["01"],
      "payload_signatures": [],
      "envelope_signatures": [{ "address": "01", "key_index": "0", "signature": "c2ln" }]
    }
  ],
  "_links": { "_self": "/v1/collections/c1" }
}"#;

pub const EXECUTION_RESULTS: &str = r#"[
  { "id": "r1", "block_id": "b1", "previous_result_id": "r0", "events": [], "chunks": [] },
  { "id": "r2", "block_id": "b2", "previous_result_id": "r1", "events": [], "chunks": [] }
]"#;

// ==============================================================================
// Builders
// ==============================================================================

/// Bind a client to `mock`, keeping a handle for request assertions.
pub fn client_with(mock: MockTransport) -> (RestClient, Arc<MockTransport>) {
    let mock = Arc::new(mock);
    let client = RestClient::from_transport(mock.clone());
    (client, mock)
}

/// A transaction ready for submission, referencing `reference_block_id`.
pub fn sample_transaction(reference_block_id: &str) -> Transaction {
    Transaction {
        id: None,
        script: "CnRyYW5zYWN0aW9uIHt9Cg==".into(),
        arguments: vec!["eyJ0eXBlIjoiU3RyaW5nIiwidmFsdWUiOiJoZWxsbyJ9".into()],
        reference_block_id: reference_block_id.to_owned(),
        gas_limit: "9999".into(),
        proposal_key: ProposalKey {
            address: "c05ba92552790bb0".into(),
            key_index: "0".into(),
            sequence_number: "0".into(),
        },
        payer: "c05ba92552790bb0".into(),
        authorizers: vec!["c05ba92552790bb0".into()],
        payload_signatures: vec![],
        envelope_signatures: vec![TransactionSignature {
            address: "c05ba92552790bb0".into(),
            key_index: "0".into(),
            signature: "c2lnbmF0dXJl".into(),
        }],
    }
}
