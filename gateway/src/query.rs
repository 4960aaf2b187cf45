//! Query handlers for the asset gateway contract.
//!
//! Nothing here reads custody balances; previews only validate and encode.

use cosmwasm_std::{Binary, Deps, StdError, StdResult, Uint128};
use gateway_common::{DepositRecord, SettlementRecord};

use crate::msg::{ConfigResponse, EncodedRecordResponse, PreviewDepositResponse};
use crate::request::{validate_deposit, ValidatedDeposit};
use crate::state::CONFIG;

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        input_queue: config.input_queue,
        settlement_authority: config.settlement_authority,
        native_denom: config.native_denom,
    })
}

/// Validate a deposit request and return the record a deposit would submit.
///
/// Fails with the same message the deposit itself would fail with.
pub fn query_preview_deposit(
    deps: Deps,
    token: Option<String>,
    sender: Option<String>,
    recipients: Vec<Binary>,
    amounts: Vec<Uint128>,
    aux_data: Binary,
) -> StdResult<PreviewDepositResponse> {
    let ValidatedDeposit { batch, total } = validate_deposit(&recipients, &amounts, &aux_data)
        .map_err(|err| StdError::generic_err(err.to_string()))?;

    let record = match (token, sender) {
        (None, None) => DepositRecord::NativeCoin(batch),
        (Some(token), Some(sender)) => DepositRecord::FungibleToken {
            token: deps.api.addr_validate(&token)?.to_string(),
            sender: deps.api.addr_validate(&sender)?.to_string(),
            batch,
        },
        _ => {
            return Err(StdError::generic_err(
                "token and sender must be given together",
            ))
        }
    };

    Ok(PreviewDepositResponse {
        tag: record.tag(),
        total,
        record: Binary::from(record.encode()),
    })
}

/// Encode a settlement record for the settlement authority.
pub fn query_encode_settlement(
    deps: Deps,
    token: Option<String>,
    recipient: String,
    amount: Uint128,
) -> StdResult<EncodedRecordResponse> {
    let recipient = deps.api.addr_validate(&recipient)?.to_string();
    let record = match token {
        Some(token) => SettlementRecord::token(deps.api.addr_validate(&token)?, recipient, amount),
        None => SettlementRecord::native(recipient, amount),
    };

    Ok(EncodedRecordResponse {
        tag: record.tag,
        record: Binary::from(record.encode()),
    })
}
