//! Indexer-facing events
//!
//! Lists are bracketed and comma-separated in request order (`[]` when
//! empty, attribute values must not be blank), byte strings are `0x` hex.
//! Deposit events carry `record_hash` (keccak256 of the submitted record) so
//! indexers can match them with the ingestion queue's identifiers.

use cosmwasm_std::{Addr, Event, Uint128};
use gateway_common::hash::{keccak256, to_hex};
use gateway_common::DepositBatch;

pub const NATIVE_DEPOSITED: &str = "native_deposited";
pub const TOKEN_DEPOSITED: &str = "token_deposited";
pub const NATIVE_WITHDRAWN: &str = "native_withdrawn";
pub const TOKEN_WITHDRAWN: &str = "token_withdrawn";

pub fn native_deposited(batch: &DepositBatch, total: Uint128, record: &[u8]) -> Event {
    with_batch(Event::new(NATIVE_DEPOSITED), batch, total, record)
}

pub fn token_deposited(
    token: &Addr,
    sender: &Addr,
    batch: &DepositBatch,
    total: Uint128,
    record: &[u8],
) -> Event {
    let event = Event::new(TOKEN_DEPOSITED)
        .add_attribute("token", token)
        .add_attribute("sender", sender);
    with_batch(event, batch, total, record)
}

pub fn native_withdrawn(recipient: &Addr, amount: Uint128) -> Event {
    Event::new(NATIVE_WITHDRAWN)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
}

pub fn token_withdrawn(token: &Addr, recipient: &Addr, amount: Uint128) -> Event {
    Event::new(TOKEN_WITHDRAWN)
        .add_attribute("token", token)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
}

fn with_batch(event: Event, batch: &DepositBatch, total: Uint128, record: &[u8]) -> Event {
    let recipients: Vec<String> = batch.recipients.iter().map(|r| to_hex(r)).collect();
    let amounts: Vec<String> = batch.amounts.iter().map(Uint128::to_string).collect();

    event
        .add_attribute("recipients", format!("[{}]", recipients.join(",")))
        .add_attribute("amounts", format!("[{}]", amounts.join(",")))
        .add_attribute("aux_data", to_hex(&batch.aux_data))
        .add_attribute("total", total.to_string())
        .add_attribute("record_hash", to_hex(&keccak256(record)))
}
