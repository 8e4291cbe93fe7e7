//! Byte-buffer stock codecs (spec.md §4.1/§4.2/§4.5): length-prefixed
//! `Vec<u8>`, and its nullable counterpart built on [`super::optional`].

use crate::bits::{BitReader, BitWriter, DEFAULT_MAX_COUNT_HINT};
use crate::error::Result;

/// A length-prefixed byte buffer, encoded with [`BitWriter::append_bytes`]
/// using [`DEFAULT_MAX_COUNT_HINT`]. For a caller-chosen hint, call
/// `writer.append_bytes(..)` / `reader.read_bytes(..)` directly instead of
/// going through this wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer(pub Vec<u8>);

impl super::Encode for ByteBuffer {
    fn encode(&self, writer: &mut BitWriter) {
        writer.append_bytes(&self.0, DEFAULT_MAX_COUNT_HINT);
    }
}

impl super::Decode for ByteBuffer {
    fn decode(reader: &mut BitReader) -> Result<Self> {
        Ok(ByteBuffer(reader.read_bytes(DEFAULT_MAX_COUNT_HINT)?))
    }
}

/// A byte buffer that may be absent: one presence bit, then the buffer if
/// present, matching spec.md §4.5's optional-value encoding.
pub type NullableByteBuffer = Option<ByteBuffer>;

#[cfg(test)]
mod tests {
    use super::super::{Decode, Encode};
    use super::*;

    #[test]
    fn byte_buffer_roundtrip() {
        let original = ByteBuffer(vec![1, 2, 3, 4, 5]);
        let mut w = BitWriter::new(0);
        original.encode(&mut w);
        let bytes = w.pack(false);
        let mut r = BitReader::new(&bytes).unwrap();
        assert_eq!(ByteBuffer::decode(&mut r).unwrap(), original);
    }

    #[test]
    fn empty_byte_buffer_roundtrip() {
        let original = ByteBuffer(vec![]);
        let mut w = BitWriter::new(0);
        original.encode(&mut w);
        let bytes = w.pack(false);
        let mut r = BitReader::new(&bytes).unwrap();
        assert_eq!(ByteBuffer::decode(&mut r).unwrap(), original);
    }

    #[test]
    fn nullable_byte_buffer_roundtrip() {
        let present: NullableByteBuffer = Some(ByteBuffer(vec![9, 9]));
        let mut w = BitWriter::new(0);
        present.encode(&mut w);
        let bytes = w.pack(false);
        let mut r = BitReader::new(&bytes).unwrap();
        assert_eq!(NullableByteBuffer::decode(&mut r).unwrap(), present);

        let absent: NullableByteBuffer = None;
        let mut w = BitWriter::new(0);
        absent.encode(&mut w);
        let bytes = w.pack(false);
        let mut r = BitReader::new(&bytes).unwrap();
        assert_eq!(NullableByteBuffer::decode(&mut r).unwrap(), absent);
    }
}
