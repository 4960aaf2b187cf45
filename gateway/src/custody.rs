//! Outbound interactions with the gateway's collaborators.
//!
//! Every call to the ingestion queue, a CW20 ledger or the bank module is
//! built here as a submessage. Handlers add them to the response only after
//! their checks and bookkeeping are done.

use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Deps, DepsMut, StdResult, Storage, SubMsg,
    Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use gateway_common::QueueExecuteMsg;

use crate::error::ContractError;
use crate::state::{
    Config, TransferCheck, PAYOUT_REPLY_ID, PULL_REPLY_ID, SUBMIT_REPLY_ID, TRANSFER_CHECK,
};

/// Submit an encoded record to the ingestion queue.
///
/// Replies on success only: a queue failure aborts the transaction with the
/// queue's own error.
pub fn submit_record(config: &Config, record: Vec<u8>) -> StdResult<SubMsg> {
    Ok(SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: config.input_queue.to_string(),
            msg: to_json_binary(&QueueExecuteMsg::Submit {
                record: Binary::from(record),
            })?,
            funds: vec![],
        },
        SUBMIT_REPLY_ID,
    ))
}

/// Pull `amount` of `token` from `owner` into the gateway (requires allowance).
pub fn pull_token(
    token: &Addr,
    owner: &Addr,
    gateway: &Addr,
    amount: Uint128,
) -> StdResult<SubMsg> {
    Ok(SubMsg::reply_always(
        WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: owner.to_string(),
                recipient: gateway.to_string(),
                amount,
            })?,
            funds: vec![],
        },
        PULL_REPLY_ID,
    ))
}

/// Push `amount` of `token` from custody to `recipient`.
pub fn push_token(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<SubMsg> {
    Ok(SubMsg::reply_always(
        WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        },
        PAYOUT_REPLY_ID,
    ))
}

/// Pay `amount` of the native denom from custody to `recipient`.
pub fn push_native(config: &Config, recipient: &Addr, amount: Uint128) -> SubMsg {
    SubMsg::reply_always(
        BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(amount.u128(), &config.native_denom),
        },
        PAYOUT_REPLY_ID,
    )
}

pub fn query_token_balance(deps: Deps, token: &Addr, holder: &Addr) -> StdResult<Uint128> {
    let response: BalanceResponse = deps.querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: holder.to_string(),
        },
    )?;
    Ok(response.balance)
}

/// Record the balance `holder` must reach after receiving `amount` of `token`.
///
/// The pending transfer only counts as successful if the ledger both reports
/// success and shows the increased balance afterwards.
pub fn expect_balance_increase(
    storage: &mut dyn Storage,
    current: Uint128,
    token: &Addr,
    holder: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let min_balance = current
        .checked_add(amount)
        .map_err(|_| ContractError::ArithmeticOverflow)?;
    TRANSFER_CHECK.save(
        storage,
        &TransferCheck {
            token: token.clone(),
            holder: holder.clone(),
            min_balance,
        },
    )?;
    Ok(())
}

/// Verify and clear the pending transfer check, if any.
pub fn verify_transfer(deps: DepsMut) -> Result<(), ContractError> {
    let Some(check) = TRANSFER_CHECK.may_load(deps.storage)? else {
        return Ok(());
    };
    TRANSFER_CHECK.remove(deps.storage);

    let balance = query_token_balance(deps.as_ref(), &check.token, &check.holder)?;
    if balance < check.min_balance {
        return Err(ContractError::TransferFailure {
            reason: format!(
                "{} reported success but {} holds {}, expected at least {}",
                check.token, check.holder, balance, check.min_balance
            ),
        });
    }
    Ok(())
}
