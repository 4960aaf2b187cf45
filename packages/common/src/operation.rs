//! Operation tag - the discriminator that leads every encoded record.

use cosmwasm_schema::cw_serde;

use crate::abi::{uint_word, Decoder};
use crate::error::CodecError;

/// Kind of transfer an encoded record describes.
///
/// Wire codes are fixed forever: a new transfer kind gets a new variant with
/// a fresh code, existing codes are never reassigned.
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum OperationTag {
    /// Chain native coin (bank denom)
    NativeCoin,
    /// CW20 fungible token
    FungibleToken,
}

impl OperationTag {
    /// Wire code of this tag (`uint8`).
    pub const fn code(self) -> u8 {
        match self {
            OperationTag::NativeCoin => 0,
            OperationTag::FungibleToken => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(OperationTag::NativeCoin),
            1 => Some(OperationTag::FungibleToken),
            _ => None,
        }
    }

    /// Head word carrying this tag.
    pub fn to_word(self) -> [u8; 32] {
        uint_word(self.code() as u128)
    }

    /// Interpret a head word as a tag; `None` for unrecognized values.
    pub fn from_word(word: &[u8; 32]) -> Option<Self> {
        if word[..31].iter().any(|b| *b != 0) {
            return None;
        }
        Self::from_code(word[31])
    }

    /// Read the leading tag of an encoded record.
    ///
    /// Fails only if the record is shorter than one word; an unrecognized tag
    /// is `Ok(None)`.
    pub fn read(record: &[u8]) -> Result<Option<Self>, CodecError> {
        Ok(Self::from_word(Decoder::new(record).head(0)?))
    }
}
