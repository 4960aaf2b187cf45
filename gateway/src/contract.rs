//! Asset Gateway Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `reply` - Submessage completion
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_deposit_native, execute_deposit_token, execute_receive, execute_settle,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_encode_settlement, query_preview_deposit};
use crate::reply::handle_reply;
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let input_queue = deps.api.addr_validate(&msg.input_queue)?;
    let settlement_authority = deps.api.addr_validate(&msg.settlement_authority)?;
    validate_denom(&msg.native_denom)?;

    let config = Config {
        input_queue,
        settlement_authority,
        native_denom: msg.native_denom,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("input_queue", config.input_queue)
        .add_attribute("settlement_authority", config.settlement_authority)
        .add_attribute("native_denom", config.native_denom))
}

/// Bank denom rules of the Cosmos SDK: 3-128 characters, starting with a letter.
fn validate_denom(denom: &str) -> Result<(), ContractError> {
    let invalid = |reason: &str| ContractError::InvalidConfig {
        reason: format!("native_denom {denom:?}: {reason}"),
    };

    if !(3..=128).contains(&denom.len()) {
        return Err(invalid("must be 3 to 128 characters"));
    }
    if !denom.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(invalid("must start with a letter"));
    }
    if !denom
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c))
    {
        return Err(invalid("contains an invalid character"));
    }
    Ok(())
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Deposit Path
        ExecuteMsg::DepositNative {
            recipients,
            amounts,
            aux_data,
        } => execute_deposit_native(deps, info, recipients, amounts, aux_data),
        ExecuteMsg::DepositToken {
            token,
            recipients,
            amounts,
            aux_data,
        } => execute_deposit_token(deps, env, info, token, recipients, amounts, aux_data),
        ExecuteMsg::Receive(msg) => execute_receive(deps, info, msg),

        // Withdrawal Path
        ExecuteMsg::Settle { payload } => execute_settle(deps, env, info, payload),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_reply(deps, env, msg)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::PreviewDeposit {
            token,
            sender,
            recipients,
            amounts,
            aux_data,
        } => to_json_binary(&query_preview_deposit(
            deps, token, sender, recipients, amounts, aux_data,
        )?),
        QueryMsg::EncodeSettlement {
            token,
            recipient,
            amount,
        } => to_json_binary(&query_encode_settlement(deps, token, recipient, amount)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
