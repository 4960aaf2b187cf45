//! Settlement handler (Withdrawal Path).
//!
//! Authorization: settlement authority only
//!
//! The payload is trusted to be well formed by contract with the authority;
//! only the leading tag selects what happens:
//! - `NativeCoin` - bank send from custody
//! - `FungibleToken` - CW20 `Transfer` from custody
//! - anything else - answer `false`, move nothing, do not fail
//!
//! A rejected payout fails the whole call.

use cosmwasm_std::{to_json_binary, Binary, DepsMut, Env, MessageInfo, Response};
use cw_utils::nonpayable;
use gateway_common::{CodecError, OperationTag, SettlementRecord};

use crate::custody::{expect_balance_increase, push_native, push_token, query_token_balance};
use crate::error::ContractError;
use crate::events;
use crate::state::{enter, InFlight, CONFIG};

/// Settle a withdrawal described by an encoded settlement record.
pub fn execute_settle(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.settlement_authority {
        return Err(ContractError::Unauthorized);
    }
    nonpayable(&info)?;

    let Some(record) = SettlementRecord::decode(payload.as_slice())? else {
        return Ok(Response::new()
            .set_data(to_json_binary(&false)?)
            .add_attribute("method", "settle")
            .add_attribute("operation", "unrecognized")
            .add_attribute("accepted", "false"));
    };

    let recipient = deps.api.addr_validate(&record.recipient)?;
    let amount = record.amount;

    let response = Response::new()
        .set_data(to_json_binary(&true)?)
        .add_attribute("method", "settle")
        .add_attribute("accepted", "true");

    match record.tag {
        OperationTag::NativeCoin => {
            let response = response
                .add_event(events::native_withdrawn(&recipient, amount))
                .add_attribute("operation", "native_coin");
            if amount.is_zero() {
                return Ok(response);
            }

            enter(deps.storage, InFlight::Settlement)?;
            Ok(response.add_submessage(push_native(&config, &recipient, amount)))
        }
        OperationTag::FungibleToken => {
            let token = record
                .token
                .ok_or(ContractError::MalformedPayload(CodecError::MissingToken))?;
            let token = deps.api.addr_validate(&token)?;

            let response = response
                .add_event(events::token_withdrawn(&token, &recipient, amount))
                .add_attribute("operation", "fungible_token");
            if amount.is_zero() {
                return Ok(response);
            }

            enter(deps.storage, InFlight::Settlement)?;
            // A transfer to custody itself leaves every balance unchanged
            if recipient != env.contract.address {
                let held = query_token_balance(deps.as_ref(), &token, &recipient)?;
                expect_balance_increase(deps.storage, held, &token, &recipient, amount)?;
            }
            Ok(response.add_submessage(push_token(&token, &recipient, amount)?))
        }
    }
}

