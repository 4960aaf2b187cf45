use thiserror::Error;

/// Errors raised while decoding an encoded record.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("Record truncated: need 32 bytes at offset {offset}, record is {len} bytes")]
    Truncated { offset: usize, len: usize },

    #[error("Offset or length word exceeds the addressable range")]
    OffsetOverflow,

    #[error("Value does not fit in 128 bits")]
    ValueTooLarge,

    #[error("String in slot {slot} is not valid UTF-8")]
    InvalidUtf8 { slot: usize },

    #[error("Unknown operation tag")]
    UnknownTag,

    #[error("Fungible token operation without a token address")]
    MissingToken,
}
