//! Asset Gateway Contract - L1 entry point of an optimistic-rollup bridge
//!
//! The gateway takes custody of L1 assets bound for L2 and releases them when
//! L2 withdrawals settle.
//!
//! # Deposit Path
//! 1. A user deposits the native coin or a CW20 token for one or more
//!    32-byte L2 recipients
//! 2. The gateway validates the request, takes custody of the funding and
//!    encodes a deposit record
//! 3. The record is submitted to the ingestion queue, whose identifier is
//!    returned as response data
//!
//! # Withdrawal Path
//! 1. The settlement authority calls `Settle` with an encoded settlement record
//! 2. The gateway pays the recipient from custody
//!
//! # Security
//! - Only the settlement authority can release funds
//! - CW20 transfers must both succeed and move the balance
//! - No reentrant deposit or settlement while one is in flight

pub mod contract;
pub mod custody;
pub mod error;
pub mod events;
mod execute;
pub mod msg;
mod query;
mod reply;
pub mod request;
pub mod state;

pub use crate::error::ContractError;
