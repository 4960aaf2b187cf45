//! Interface of the ingestion queue consumed by the gateway.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

/// Execute messages the ingestion queue accepts.
#[cw_serde]
pub enum QueueExecuteMsg {
    /// Append an encoded record.
    ///
    /// The queue answers with its content-derived identifier as the
    /// execute response data.
    Submit { record: Binary },
}
