//! Errors surfaced by reader operations and by `Decode` implementations.

use std::fmt;

/// The three ways a read can fail, per the wire contract: the reader never
/// rewinds its cursor after returning one of these, so callers should treat
/// the reader as poisoned once an error has been observed.
#[derive(Debug)]
pub enum CodecError {
    /// A read of `requested_bits` would have advanced the cursor past the
    /// declared end of the stream; `available_bits` remained.
    TooShort {
        requested_bits: u64,
        available_bits: u64,
    },

    /// The bits were present, but did not form a valid value (currently:
    /// an enumeration tag outside its declared variant set).
    EncodingError { reason: &'static str },

    /// `BitReader::new_crc_validated` found a trailer that did not match
    /// the CRC-32 computed over the preceding bytes.
    IncorrectChecksum { expected: u32, computed: u32 },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::TooShort {
                requested_bits,
                available_bits,
            } => write!(
                f,
                "tried to read {requested_bits} bits with only {available_bits} remaining"
            ),
            CodecError::EncodingError { reason } => write!(f, "invalid encoding: {reason}"),
            CodecError::IncorrectChecksum { expected, computed } => write!(
                f,
                "CRC-32 mismatch: expected {expected:#010x}, computed {computed:#010x}"
            ),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
