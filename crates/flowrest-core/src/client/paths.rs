use crate::types::Identifier;

const BLOCK_EXPAND: &str = "expand=payload,execution_result";

pub(super) fn latest_block() -> String {
    format!("/blocks?height=final&{BLOCK_EXPAND}")
}

pub(super) fn block(id: &Identifier) -> String {
    format!("/blocks/{}?{BLOCK_EXPAND}", id.to_hex())
}

pub(super) fn blocks_at_heights(heights: &[u64]) -> String {
    format!("/blocks?height={}&{BLOCK_EXPAND}", join(heights.iter()))
}

pub(super) fn blocks_in_range(start: u64, end: u64) -> String {
    format!("/blocks?start_height={start}&end_height={end}&{BLOCK_EXPAND}")
}

pub(super) fn transaction(id: &Identifier) -> String {
    format!("/transactions/{}", id.to_hex())
}

pub(super) fn transaction_result(id: &Identifier) -> String {
    format!("/transaction_results/{}", id.to_hex())
}

pub(super) fn submit_transaction() -> &'static str {
    "/transactions"
}

pub(super) fn account(address: &Identifier) -> String {
    format!("/accounts/{}?expand=contracts,keys", address.to_hex())
}

pub(super) fn scripts() -> &'static str {
    "/scripts"
}

pub(super) fn events_in_range(event_type: &str, start: u64, end: u64) -> String {
    format!("/events?type={event_type}&start_height={start}&end_height={end}")
}

pub(super) fn events_in_blocks(event_type: &str, block_ids: &[Identifier]) -> String {
    format!(
        "/events?type={event_type}&block_ids={}",
        join(block_ids.iter().map(Identifier::to_hex))
    )
}

pub(super) fn collection(id: &Identifier) -> String {
    format!("/collections/{}?expand=transactions", id.to_hex())
}

pub(super) fn execution_results(block_ids: &[Identifier]) -> String {
    format!(
        "/execution_results?block_id={}",
        join(block_ids.iter().map(Identifier::to_hex))
    )
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
