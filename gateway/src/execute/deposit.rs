//! Deposit handlers.
//!
//! Each handler follows the same order: validate the request and funding,
//! mark the deposit in flight, then dispatch the custody pull (token
//! deposits) followed by the ingestion queue submit. The queue identifier is
//! set as response data by the submit reply.

use cosmwasm_std::{from_json, Addr, Binary, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;
use cw_utils::{may_pay, nonpayable};
use gateway_common::{DepositBatch, DepositRecord};

use crate::custody::{expect_balance_increase, pull_token, query_token_balance, submit_record};
use crate::error::ContractError;
use crate::events;
use crate::msg::ReceiveMsg;
use crate::request::{validate_deposit, ValidatedDeposit};
use crate::state::{enter, Config, InFlight, CONFIG};

/// Deposit the native coin attached to the call.
pub fn execute_deposit_native(
    deps: DepsMut,
    info: MessageInfo,
    recipients: Vec<Binary>,
    amounts: Vec<Uint128>,
    aux_data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let ValidatedDeposit { batch, total } = validate_deposit(&recipients, &amounts, &aux_data)?;
    let attached = may_pay(&info, &config.native_denom)?;
    if attached < total {
        return Err(ContractError::InsufficientFunding {
            required: total,
            provided: attached,
        });
    }

    enter(deps.storage, InFlight::Deposit)?;

    let record = DepositRecord::NativeCoin(batch);
    let encoded = record.encode();
    let event = events::native_deposited(record.batch(), total, &encoded);

    Ok(Response::new()
        .add_submessage(submit_record(&config, encoded)?)
        .add_event(event)
        .add_attribute("method", "deposit_native")
        .add_attribute("sender", info.sender)
        .add_attribute("total", total.to_string())
        .add_attribute("retained_excess", (attached - total).to_string()))
}

/// Deposit CW20 tokens by pulling them from the caller's allowance.
pub fn execute_deposit_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    recipients: Vec<Binary>,
    amounts: Vec<Uint128>,
    aux_data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    nonpayable(&info)?;
    let token = deps.api.addr_validate(&token)?;
    let ValidatedDeposit { batch, total } = validate_deposit(&recipients, &amounts, &aux_data)?;

    let gateway = env.contract.address;
    // Nothing to custody for a zero total; CW20 rejects zero transfers
    let custodied = if total.is_zero() {
        None
    } else {
        Some(query_token_balance(deps.as_ref(), &token, &gateway)?)
    };

    enter(deps.storage, InFlight::Deposit)?;

    let mut response = Response::new().add_attribute("method", "deposit_token");
    if let Some(custodied) = custodied {
        expect_balance_increase(deps.storage, custodied, &token, &gateway, total)?;
        response = response.add_submessage(pull_token(&token, &info.sender, &gateway, total)?);
    }

    token_deposit(response, &config, token, info.sender, batch, total)
}

/// Deposit CW20 tokens delivered through `Cw20ExecuteMsg::Send`.
///
/// The CW20 contract (`info.sender`) has already moved `cw20_msg.amount`
/// into custody; the sent amount must cover the request total and any
/// excess is retained.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    nonpayable(&info)?;
    let token = info.sender;
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let sent = cw20_msg.amount;

    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::Deposit {
            recipients,
            amounts,
            aux_data,
        } => {
            let ValidatedDeposit { batch, total } =
                validate_deposit(&recipients, &amounts, &aux_data)?;
            if sent < total {
                return Err(ContractError::InsufficientFunding {
                    required: total,
                    provided: sent,
                });
            }

            enter(deps.storage, InFlight::Deposit)?;

            let response = Response::new()
                .add_attribute("method", "deposit_cw20_send")
                .add_attribute("retained_excess", (sent - total).to_string());
            token_deposit(response, &config, token, sender, batch, total)
        }
    }
}

/// Encode the `FungibleToken` record, queue it and emit `token_deposited`.
fn token_deposit(
    response: Response,
    config: &Config,
    token: Addr,
    sender: Addr,
    batch: DepositBatch,
    total: Uint128,
) -> Result<Response, ContractError> {
    let record = DepositRecord::FungibleToken {
        token: token.to_string(),
        sender: sender.to_string(),
        batch,
    };
    let encoded = record.encode();
    let event = events::token_deposited(&token, &sender, record.batch(), total, &encoded);

    Ok(response
        .add_submessage(submit_record(config, encoded)?)
        .add_event(event)
        .add_attribute("sender", sender)
        .add_attribute("token", token)
        .add_attribute("total", total.to_string()))
}
