//! ABI word encoding for gateway records
//!
//! Records use the Solidity `abi.encode` layout for a flat tuple so that an
//! EVM-style L2 can decode them with `abi.decode` directly.
//!
//! # Layout
//! - Head: one 32-byte word per member, in declaration order
//!   - static members (`uint256`, `bytes32`) are stored inline
//!   - dynamic members (`bytes`, `string`, `T[]`) store the byte offset of
//!     their tail section, measured from the start of the record
//! - Tail: dynamic members in declaration order
//!   - `bytes`/`string`: length word, then data right-padded to 32 bytes
//!   - `bytes32[]`/`uint256[]`: length word, then one word per element
//!
//! All integers are big-endian and left-padded to 32 bytes.

use crate::error::CodecError;

/// Size of one ABI word in bytes
pub const WORD: usize = 32;

/// A single tuple member to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `uint256` (values are bounded by `u128` on this chain)
    Uint(u128),
    /// `bytes32`
    Bytes32([u8; 32]),
    /// `bytes` or `string`
    Bytes(&'a [u8]),
    /// `bytes32[]`
    Bytes32Array(&'a [[u8; 32]]),
    /// `uint256[]`
    UintArray(&'a [u128]),
}

/// Encode a 128-bit unsigned integer as a left-padded word.
pub fn uint_word(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    // u128 (16 bytes) goes into bytes 16-31, bytes 0-15 remain zero
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encode a tuple of tokens with `abi.encode` semantics.
pub fn encode(tokens: &[Token]) -> Vec<u8> {
    let head_len = tokens.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for token in tokens {
        match token {
            Token::Uint(value) => head.extend_from_slice(&uint_word(*value)),
            Token::Bytes32(word) => head.extend_from_slice(word),
            Token::Bytes(data) => {
                head.extend_from_slice(&uint_word((head_len + tail.len()) as u128));
                write_bytes(&mut tail, data);
            }
            Token::Bytes32Array(items) => {
                head.extend_from_slice(&uint_word((head_len + tail.len()) as u128));
                tail.extend_from_slice(&uint_word(items.len() as u128));
                for item in items.iter() {
                    tail.extend_from_slice(item);
                }
            }
            Token::UintArray(items) => {
                head.extend_from_slice(&uint_word((head_len + tail.len()) as u128));
                tail.extend_from_slice(&uint_word(items.len() as u128));
                for item in items.iter() {
                    tail.extend_from_slice(&uint_word(*item));
                }
            }
        }
    }

    head.extend_from_slice(&tail);
    head
}

fn write_bytes(out: &mut Vec<u8>, data: &[u8]) {
    let padded_len = ((data.len() + WORD - 1) / WORD) * WORD;
    out.extend_from_slice(&uint_word(data.len() as u128));
    out.extend_from_slice(data);
    out.resize(out.len() + padded_len - data.len(), 0);
}

/// Read-only view over an encoded tuple.
///
/// Slots are head positions (0 for the first member). Every accessor checks
/// bounds against the record, so malformed input yields a `CodecError`
/// instead of a panic or an oversized allocation.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    data: &'a [u8],
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Raw head word of `slot`.
    pub fn head(&self, slot: usize) -> Result<&'a [u8; 32], CodecError> {
        let offset = slot.checked_mul(WORD).ok_or(CodecError::OffsetOverflow)?;
        self.word_at(offset)
    }

    /// `uint256` member that must fit in 128 bits.
    pub fn uint(&self, slot: usize) -> Result<u128, CodecError> {
        word_to_u128(self.head(slot)?)
    }

    /// `bytes32` member.
    pub fn bytes32(&self, slot: usize) -> Result<[u8; 32], CodecError> {
        Ok(*self.head(slot)?)
    }

    /// `bytes` member.
    pub fn bytes(&self, slot: usize) -> Result<&'a [u8], CodecError> {
        let (start, len) = self.dynamic(slot, 1)?;
        Ok(&self.data[start..start + len])
    }

    /// `string` member.
    pub fn string(&self, slot: usize) -> Result<String, CodecError> {
        let bytes = self.bytes(slot)?;
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| CodecError::InvalidUtf8 { slot })
    }

    /// `bytes32[]` member.
    pub fn bytes32_array(&self, slot: usize) -> Result<Vec<[u8; 32]>, CodecError> {
        let (start, len) = self.dynamic(slot, WORD)?;
        (0..len)
            .map(|i| self.word_at(start + i * WORD).copied())
            .collect()
    }

    /// `uint256[]` member whose elements must fit in 128 bits.
    pub fn uint_array(&self, slot: usize) -> Result<Vec<u128>, CodecError> {
        let (start, len) = self.dynamic(slot, WORD)?;
        (0..len)
            .map(|i| word_to_u128(self.word_at(start + i * WORD)?))
            .collect()
    }

    /// Resolve a dynamic member to `(data_start, element_count)`, verifying
    /// that `element_count * element_size` bytes are present.
    fn dynamic(&self, slot: usize, element_size: usize) -> Result<(usize, usize), CodecError> {
        let offset = word_to_usize(self.head(slot)?)?;
        let len = word_to_usize(self.word_at(offset)?)?;
        let start = offset.checked_add(WORD).ok_or(CodecError::OffsetOverflow)?;
        let end = len
            .checked_mul(element_size)
            .and_then(|size| start.checked_add(size))
            .ok_or(CodecError::OffsetOverflow)?;
        if end > self.data.len() {
            return Err(CodecError::Truncated {
                offset: start,
                len: self.data.len(),
            });
        }
        Ok((start, len))
    }

    fn word_at(&self, offset: usize) -> Result<&'a [u8; 32], CodecError> {
        let truncated = CodecError::Truncated {
            offset,
            len: self.data.len(),
        };
        let end = offset.checked_add(WORD).ok_or(CodecError::OffsetOverflow)?;
        self.data
            .get(offset..end)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(truncated)
    }
}

fn word_to_u128(word: &[u8; 32]) -> Result<u128, CodecError> {
    if word[..16].iter().any(|b| *b != 0) {
        return Err(CodecError::ValueTooLarge);
    }
    let mut value = [0u8; 16];
    value.copy_from_slice(&word[16..]);
    Ok(u128::from_be_bytes(value))
}

fn word_to_usize(word: &[u8; 32]) -> Result<usize, CodecError> {
    if word[..24].iter().any(|b| *b != 0) {
        return Err(CodecError::OffsetOverflow);
    }
    let mut value = [0u8; 8];
    value.copy_from_slice(&word[24..]);
    usize::try_from(u64::from_be_bytes(value)).map_err(|_| CodecError::OffsetOverflow)
}
