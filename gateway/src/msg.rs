//! Message types for the asset gateway contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use gateway_common::OperationTag;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Ingestion queue contract receiving encoded deposit records
    pub input_queue: String,
    /// Address allowed to call `Settle`
    pub settlement_authority: String,
    /// Bank denom custodied for native coin transfers (e.g. "uluna")
    pub native_denom: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Deposit Path
    // ========================================================================
    /// Deposit the native coin for one or more L2 recipients
    ///
    /// The caller attaches at least `sum(amounts)` of the native denom. The
    /// whole attachment is custodied; excess is not refunded.
    ///
    /// Response data: ingestion queue identifier
    DepositNative {
        /// 32-byte L2 recipient accounts
        recipients: Vec<Binary>,
        /// Amount per recipient, positionally paired with `recipients`
        amounts: Vec<Uint128>,
        /// Opaque payload forwarded to L2
        aux_data: Binary,
    },

    /// Deposit CW20 tokens for one or more L2 recipients
    ///
    /// Pulls `sum(amounts)` from the caller with `TransferFrom`, so the caller
    /// must first grant the gateway an allowance on `token`.
    ///
    /// Response data: ingestion queue identifier
    DepositToken {
        /// CW20 contract address
        token: String,
        recipients: Vec<Binary>,
        amounts: Vec<Uint128>,
        aux_data: Binary,
    },

    /// Deposit CW20 tokens through the CW20 `Send` hook
    /// Implements CW20 Receiver interface
    Receive(cw20::Cw20ReceiveMsg),

    // ========================================================================
    // Withdrawal Path
    // ========================================================================
    /// Release custodied funds as instructed by an encoded settlement record
    ///
    /// Authorization: settlement authority only
    ///
    /// Response data: JSON `true` when funds were released, `false` when the
    /// record's operation tag is not recognized
    Settle {
        /// `abi.encode(uint8 tag, string token, string recipient, uint256 amount)`
        payload: Binary,
    },
}

/// Messages carried inside a CW20 `Send`
#[cw_serde]
pub enum ReceiveMsg {
    /// Deposit the sent tokens; the sent amount must cover `sum(amounts)`
    Deposit {
        recipients: Vec<Binary>,
        amounts: Vec<Uint128>,
        aux_data: Binary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Validates a deposit request and returns the record it would submit
    ///
    /// `token` and `sender` select a `FungibleToken` record; both absent
    /// selects `NativeCoin`.
    #[returns(PreviewDepositResponse)]
    PreviewDeposit {
        token: Option<String>,
        sender: Option<String>,
        recipients: Vec<Binary>,
        amounts: Vec<Uint128>,
        aux_data: Binary,
    },

    /// Encodes a settlement record (`token = None` for the native coin)
    #[returns(EncodedRecordResponse)]
    EncodeSettlement {
        token: Option<String>,
        recipient: String,
        amount: Uint128,
    },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub input_queue: Addr,
    pub settlement_authority: Addr,
    pub native_denom: String,
}

#[cw_serde]
pub struct PreviewDepositResponse {
    pub tag: OperationTag,
    /// Checked sum of the amounts, the minimum funding required
    pub total: Uint128,
    /// Exact bytes a deposit would submit to the ingestion queue
    pub record: Binary,
}

#[cw_serde]
pub struct EncodedRecordResponse {
    pub tag: OperationTag,
    pub record: Binary,
}
