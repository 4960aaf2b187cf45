//! Reply handlers
//!
//! Replies complete the operations started by the execute handlers:
//! - `PULL_REPLY_ID`: deposit custody pull settled, verify the balance
//! - `SUBMIT_REPLY_ID`: record queued, return the queue identifier
//! - `PAYOUT_REPLY_ID`: settlement payout settled, verify and release the guard

use cosmwasm_std::{DepsMut, Env, Reply, Response};
use cw_utils::parse_execute_response_data;
use gateway_common::hash::to_hex;

use crate::custody::verify_transfer;
use crate::error::ContractError;
use crate::state::{exit, PAYOUT_REPLY_ID, PULL_REPLY_ID, SUBMIT_REPLY_ID};

pub fn handle_reply(mut deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        PULL_REPLY_ID => {
            msg.result
                .into_result()
                .map_err(|reason| ContractError::TransferFailure { reason })?;
            verify_transfer(deps.branch())?;

            Ok(Response::new().add_attribute("method", "deposit_custodied"))
        }
        SUBMIT_REPLY_ID => {
            // Queue errors never reach this point: the submit replies on success only
            let response = msg
                .result
                .into_result()
                .map_err(|reason| ContractError::QueueResponse { reason })?;
            let data = response.data.ok_or_else(|| ContractError::QueueResponse {
                reason: "missing response data".to_string(),
            })?;
            let identifier = parse_execute_response_data(&data)
                .map_err(|err| ContractError::QueueResponse {
                    reason: err.to_string(),
                })?
                .data
                .ok_or_else(|| ContractError::QueueResponse {
                    reason: "missing identifier".to_string(),
                })?;

            exit(deps.storage);

            Ok(Response::new()
                .set_data(identifier.clone())
                .add_attribute("method", "deposit_submitted")
                .add_attribute("input_id", to_hex(&identifier)))
        }
        PAYOUT_REPLY_ID => {
            msg.result
                .into_result()
                .map_err(|reason| ContractError::TransferFailure { reason })?;
            verify_transfer(deps.branch())?;
            exit(deps.storage);

            Ok(Response::new().add_attribute("method", "settlement_paid"))
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}
