//! The readable bit stream: a borrowed byte buffer plus a read cursor
//! measured in bits (spec.md §4.2), symmetric with [`super::writer::BitWriter`].

use log::{trace, warn};

use super::ubits::{count_width, BitStorable, UBits};
use crate::crc32::crc32;
use crate::error::{CodecError, Result};

const HEADER_BITS: u64 = 32;

/// Reads bits from an externally-owned, immutable byte sequence. Several
/// readers may share the same underlying bytes (they never mutate them),
/// but a single reader must not be used from more than one actor.
pub struct BitReader<'a> {
    bytes: &'a [u8],
    end_bit_index: u64,
    current_bit: u64,
}

impl<'a> BitReader<'a> {
    /// Reads the little-endian 32-bit bit-length prefix and positions the
    /// cursor just after it.
    ///
    /// The header's declared `end_bit_index` is validated against the
    /// actual buffer length before the reader is constructed: a header
    /// claiming more bits than `8 * bytes.len()` can hold is a malformed
    /// stream, not a caller bug, and is surfaced as `CodecError::TooShort`
    /// rather than left to panic the first out-of-range `read_bit`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() < 4` (a caller bug: there is no valid header
    /// to read).
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        assert!(bytes.len() >= 4, "BitReader::new: buffer shorter than header");
        let end_bit_index = u32::from_le_bytes(bytes[0..4].try_into().unwrap()) as u64;
        let available_bits = 8 * bytes.len() as u64;
        if end_bit_index > available_bits {
            warn!(
                "BitReader::new: header declares {end_bit_index} bits but only {available_bits} are present"
            );
            return Err(CodecError::TooShort {
                requested_bits: end_bit_index,
                available_bits,
            });
        }
        trace!(
            "BitReader::new: {} bytes, end_bit_index={end_bit_index}",
            bytes.len()
        );
        Ok(BitReader {
            bytes,
            end_bit_index,
            current_bit: HEADER_BITS,
        })
    }

    /// Validates the trailing 4-byte CRC-32 over `bytes[..len-4]` before
    /// constructing a reader over the remaining bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() < 8` (no room for both header and trailer).
    pub fn new_crc_validated(bytes: &'a [u8]) -> Result<Self> {
        assert!(
            bytes.len() >= 8,
            "BitReader::new_crc_validated: buffer shorter than header+trailer"
        );
        let payload_end = bytes.len() - 4;
        let computed = crc32(&bytes[..payload_end]);
        let expected = u32::from_le_bytes(bytes[payload_end..].try_into().unwrap());
        if computed != expected {
            warn!("BitReader::new_crc_validated: checksum mismatch (expected {expected:#010x}, computed {computed:#010x})");
            return Err(CodecError::IncorrectChecksum { expected, computed });
        }
        Self::new(&bytes[..payload_end])
    }

    /// Total number of payload bits declared by the header, including the
    /// header itself.
    pub fn bit_len(&self) -> u64 {
        self.end_bit_index
    }

    /// Current read cursor, in bits from the start of the stream.
    pub fn position(&self) -> u64 {
        self.current_bit
    }

    /// Bits remaining before the cursor reaches `end_bit_index`.
    pub fn bits_remaining(&self) -> u64 {
        self.end_bit_index.saturating_sub(self.current_bit)
    }

    fn require(&self, bits: u64) -> Result<()> {
        if self.current_bit + bits > self.end_bit_index {
            warn!(
                "BitReader: TooShort (requested {bits} bits, {} available)",
                self.bits_remaining()
            );
            return Err(CodecError::TooShort {
                requested_bits: bits,
                available_bits: self.bits_remaining(),
            });
        }
        Ok(())
    }

    pub fn read_bit(&mut self) -> Result<bool> {
        self.require(1)?;
        let byte_index = (self.current_bit / 8) as usize;
        let bit_offset = (self.current_bit % 8) as u32;
        let bit = (self.bytes[byte_index] >> bit_offset) & 1 != 0;
        self.current_bit += 1;
        Ok(bit)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_bit()
    }

    /// Reads `width_bits` bits LSB-first into an unsigned value of type `U`.
    ///
    /// # Panics
    ///
    /// Panics if `width_bits` is zero or exceeds `U`'s bit width (caller bug).
    pub fn read_fixed<U: UBits>(&mut self, width_bits: u32) -> Result<U> {
        assert!(width_bits > 0, "read_fixed: width_bits must be > 0");
        assert!(
            width_bits <= U::BITS,
            "read_fixed: width_bits {width_bits} exceeds type width {}",
            U::BITS
        );
        self.require(width_bits as u64)?;
        let mut value: u128 = 0;
        for i in 0..width_bits {
            if self.read_bit()? {
                value |= 1 << i;
            }
        }
        Ok(U::from_u128(value))
    }

    /// Reads the whole-width encoding of `T`.
    pub fn read_full<T: BitStorable>(&mut self) -> Result<T> {
        let u = self.read_fixed::<T::Unsigned>(T::BITS)?;
        Ok(T::from_unsigned(u))
    }

    /// Reads a length-prefixed byte buffer using the same `max_count_hint`
    /// the writer used.
    pub fn read_bytes(&mut self, max_count_hint: u32) -> Result<Vec<u8>> {
        let width = count_width(max_count_hint);
        let len = self.read_fixed::<u32>(width)? as u64;
        self.align();
        self.require(len * 8)?;
        let byte_start = (self.current_bit / 8) as usize;
        let byte_end = byte_start + len as usize;
        let out = self.bytes[byte_start..byte_end].to_vec();
        self.current_bit += len * 8;
        Ok(out)
    }

    /// Reads a length-prefixed UTF-8 string. Invalid UTF-8 is replaced with
    /// `U+FFFD`, per the host's usual lossy-decoding behavior; this is not
    /// treated as a core error (spec.md §4.2).
    pub fn read_string(&mut self, max_count_hint: u32) -> Result<String> {
        let bytes = self.read_bytes(max_count_hint)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Rounds the cursor up to the next multiple of 8.
    pub fn align(&mut self) {
        let rem = self.current_bit % 8;
        if rem != 0 {
            self.current_bit += 8 - rem;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::writer::BitWriter;
    use super::*;

    #[test]
    fn scenario_s1_roundtrip() {
        let mut w = BitWriter::new(0);
        w.append_full(163u64);
        w.append_full(164u64);
        let bytes = w.pack(false);

        let mut r = BitReader::new(&bytes).unwrap();
        assert_eq!(r.read_full::<u64>().unwrap(), 163);
        assert_eq!(r.read_full::<u64>().unwrap(), 164);
    }

    #[test]
    fn too_short_at_end_of_stream() {
        let mut w = BitWriter::new(0);
        w.append_bit(true);
        let bytes = w.pack(false);
        let mut r = BitReader::new(&bytes).unwrap();
        r.read_bit().unwrap();
        let err = r.read_bit().unwrap_err();
        assert!(matches!(err, CodecError::TooShort { .. }));
    }

    #[test]
    fn cursor_never_exceeds_end_bit_index_on_success() {
        let mut w = BitWriter::new(0);
        w.append_fixed(5u32, 3);
        let bytes = w.pack(false);
        let mut r = BitReader::new(&bytes).unwrap();
        let _ = r.read_fixed::<u32>(3).unwrap();
        assert!(r.position() <= r.bit_len());
    }

    #[test]
    fn header_declaring_more_bits_than_buffer_is_rejected() {
        // 4 bytes, satisfying the len >= 4 precondition, but the header
        // (0xFFFFFFFF) declares far more bits than 8 * 4 = 32 are present.
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF];
        let err = BitReader::new(&bytes).unwrap_err();
        assert!(matches!(
            err,
            CodecError::TooShort {
                requested_bits: 0xFFFF_FFFF,
                available_bits: 32,
            }
        ));
    }

    #[test]
    fn header_exactly_matching_buffer_length_is_accepted() {
        let bytes = [32u8, 0, 0, 0];
        assert!(BitReader::new(&bytes).is_ok());
    }

    #[test]
    fn scenario_s6_crc_rejection() {
        let mut w = BitWriter::new(0);
        w.append_full(0xDEAD_BEEFu32);
        let mut bytes = w.pack(true);
        let payload_len = bytes.len() - 4;
        bytes[payload_len - 1] ^= 0x01;
        let err = BitReader::new_crc_validated(&bytes).unwrap_err();
        assert!(matches!(err, CodecError::IncorrectChecksum { .. }));
    }

    #[test]
    fn crc_validated_accepts_packed_with_crc() {
        let mut w = BitWriter::new(0);
        w.append_full(7u8);
        let bytes = w.pack(true);
        assert!(BitReader::new_crc_validated(&bytes).is_ok());
    }

    #[test]
    fn append_bytes_roundtrip_across_unaligned_start() {
        let mut w = BitWriter::new(0);
        w.append_bit(true);
        w.append_bit(false);
        w.append_bytes(b"hi", 8);
        let bytes = w.pack(false);
        let mut r = BitReader::new(&bytes).unwrap();
        r.read_bit().unwrap();
        r.read_bit().unwrap();
        assert_eq!(r.read_bytes(8).unwrap(), b"hi");
    }

    #[test]
    fn align_rounds_cursor_up_to_next_byte() {
        let mut w = BitWriter::new(0);
        w.append_bit(true);
        w.append_bit(false);
        let bytes = w.pack(false);
        let mut r = BitReader::new(&bytes).unwrap();
        r.read_bit().unwrap();
        r.read_bit().unwrap();
        assert_eq!(r.position(), 34);
        r.align();
        assert_eq!(r.position(), 40);
    }
}
