//! Encoded operation records
//!
//! Two record shapes cross the L1/L2 boundary. Both start with the
//! [`OperationTag`] word and derive the remaining layout from it.
//!
//! # Deposit-bound record (gateway → ingestion queue → L2)
//! ```solidity
//! // NativeCoin
//! abi.encode(uint8 tag, bytes32[] recipients, uint256[] amounts, bytes auxData)
//! // FungibleToken
//! abi.encode(uint8 tag, string token, string sender, bytes32[] recipients, uint256[] amounts, bytes auxData)
//! ```
//!
//! # Settlement-bound record (settlement authority → gateway)
//! ```solidity
//! abi.encode(uint8 tag, string token, string recipient, uint256 amount)
//! ```
//! `token` is the empty string for `NativeCoin`.
//!
//! The shapes are not interchangeable: a settlement record is a flattened
//! single-recipient form and must not be fed to the deposit decoder.

use cosmwasm_std::Uint128;

use crate::abi::{encode, Decoder, Token};
use crate::error::CodecError;
use crate::operation::OperationTag;

/// Recipients, amounts and auxiliary data of a deposit, positionally paired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositBatch {
    /// 32-byte L2 recipient accounts
    pub recipients: Vec<[u8; 32]>,
    /// `amounts[i]` is credited to `recipients[i]`
    pub amounts: Vec<Uint128>,
    /// Opaque payload interpreted on L2 only
    pub aux_data: Vec<u8>,
}

/// Record describing one accepted deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositRecord {
    NativeCoin(DepositBatch),
    FungibleToken {
        /// CW20 contract address on L1
        token: String,
        /// L1 account whose tokens were custodied
        sender: String,
        batch: DepositBatch,
    },
}

impl DepositRecord {
    pub fn tag(&self) -> OperationTag {
        match self {
            DepositRecord::NativeCoin(_) => OperationTag::NativeCoin,
            DepositRecord::FungibleToken { .. } => OperationTag::FungibleToken,
        }
    }

    pub fn batch(&self) -> &DepositBatch {
        match self {
            DepositRecord::NativeCoin(batch) => batch,
            DepositRecord::FungibleToken { batch, .. } => batch,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let batch = self.batch();
        let amounts: Vec<u128> = batch.amounts.iter().map(Uint128::u128).collect();
        let tag = Token::Bytes32(self.tag().to_word());
        let recipients = Token::Bytes32Array(&batch.recipients);
        let amounts = Token::UintArray(&amounts);
        let aux_data = Token::Bytes(&batch.aux_data);

        match self {
            DepositRecord::NativeCoin(_) => encode(&[tag, recipients, amounts, aux_data]),
            DepositRecord::FungibleToken { token, sender, .. } => encode(&[
                tag,
                Token::Bytes(token.as_bytes()),
                Token::Bytes(sender.as_bytes()),
                recipients,
                amounts,
                aux_data,
            ]),
        }
    }

    /// Decode a deposit record using only its leading tag.
    pub fn decode(record: &[u8]) -> Result<Self, CodecError> {
        let decoder = Decoder::new(record);
        match OperationTag::read(record)?.ok_or(CodecError::UnknownTag)? {
            OperationTag::NativeCoin => Ok(DepositRecord::NativeCoin(decode_batch(&decoder, 1)?)),
            OperationTag::FungibleToken => Ok(DepositRecord::FungibleToken {
                token: decoder.string(1)?,
                sender: decoder.string(2)?,
                batch: decode_batch(&decoder, 3)?,
            }),
        }
    }
}

fn decode_batch(decoder: &Decoder, first_slot: usize) -> Result<DepositBatch, CodecError> {
    Ok(DepositBatch {
        recipients: decoder.bytes32_array(first_slot)?,
        amounts: decoder
            .uint_array(first_slot + 1)?
            .into_iter()
            .map(Uint128::new)
            .collect(),
        aux_data: decoder.bytes(first_slot + 2)?.to_vec(),
    })
}

/// Instruction to release custodied funds to a single L1 recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementRecord {
    pub tag: OperationTag,
    /// CW20 contract for `FungibleToken`, `None` for `NativeCoin`
    pub token: Option<String>,
    pub recipient: String,
    pub amount: Uint128,
}

impl SettlementRecord {
    pub fn native(recipient: impl Into<String>, amount: Uint128) -> Self {
        Self {
            tag: OperationTag::NativeCoin,
            token: None,
            recipient: recipient.into(),
            amount,
        }
    }

    pub fn token(token: impl Into<String>, recipient: impl Into<String>, amount: Uint128) -> Self {
        Self {
            tag: OperationTag::FungibleToken,
            token: Some(token.into()),
            recipient: recipient.into(),
            amount,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let token = self.token.as_deref().unwrap_or_default();
        encode(&[
            Token::Bytes32(self.tag.to_word()),
            Token::Bytes(token.as_bytes()),
            Token::Bytes(self.recipient.as_bytes()),
            Token::Uint(self.amount.u128()),
        ])
    }

    /// Decode a settlement record.
    ///
    /// Returns `Ok(None)` when the leading tag is not recognized; nothing past
    /// the tag word is read in that case.
    pub fn decode(record: &[u8]) -> Result<Option<Self>, CodecError> {
        let Some(tag) = OperationTag::read(record)? else {
            return Ok(None);
        };

        let decoder = Decoder::new(record);
        let token = decoder.string(1)?;
        let recipient = decoder.string(2)?;
        let amount = Uint128::new(decoder.uint(3)?);

        let token = match tag {
            OperationTag::NativeCoin => None,
            OperationTag::FungibleToken if token.is_empty() => {
                return Err(CodecError::MissingToken)
            }
            OperationTag::FungibleToken => Some(token),
        };

        Ok(Some(Self {
            tag,
            token,
            recipient,
            amount,
        }))
    }
}
