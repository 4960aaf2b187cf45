//! Error types for the asset gateway contract
//!
//! Every variant aborts the enclosing transaction. An unrecognized settlement
//! tag is deliberately not an error: `Settle` answers `false` instead.

use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use gateway_common::CodecError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the settlement authority can settle")]
    Unauthorized,

    #[error("Reentrant call: a {operation} is already in flight")]
    Reentrancy { operation: String },

    // ========================================================================
    // Deposit Validation Errors
    // ========================================================================

    #[error("Length mismatch: {recipients} recipients but {amounts} amounts")]
    LengthMismatch { recipients: usize, amounts: usize },

    #[error("Invalid recipient at index {index}: expected 32 bytes, got {len}")]
    InvalidRecipient { index: usize, len: usize },

    #[error("Arithmetic overflow: deposit amounts do not fit in a 128-bit total")]
    ArithmeticOverflow,

    #[error("Insufficient funding: required {required}, provided {provided}")]
    InsufficientFunding { required: Uint128, provided: Uint128 },

    // ========================================================================
    // Collaborator Errors
    // ========================================================================

    #[error("Transfer failed: {reason}")]
    TransferFailure { reason: String },

    #[error("Ingestion queue response invalid: {reason}")]
    QueueResponse { reason: String },

    #[error("Malformed settlement payload: {0}")]
    MalformedPayload(#[from] CodecError),

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
