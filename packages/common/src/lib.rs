//! Gateway Common - Wire Protocol for the Asset Gateway
//!
//! Shared by the gateway contract, L2-side decoders and the settlement
//! authority. Everything that crosses the L1/L2 boundary is defined here:
//!
//! - `operation` - the operation tag that leads every record
//! - `abi` - `abi.encode`-compatible word encoder and decoder
//! - `record` - deposit-bound and settlement-bound records
//! - `queue` - execute interface of the ingestion queue
//! - `hash` - keccak256 and hex helpers for identifiers and events

pub mod abi;
pub mod error;
pub mod hash;
pub mod operation;
pub mod queue;
pub mod record;

pub use error::CodecError;
pub use operation::OperationTag;
pub use queue::QueueExecuteMsg;
pub use record::{DepositBatch, DepositRecord, SettlementRecord};
