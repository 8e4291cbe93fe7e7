//! The Codec Protocol (spec.md §4.5): the pair of operations every
//! user-defined value type supplies to compose onto a bit stream, plus the
//! stock codecs built on the primitives in [`crate::bits`] and
//! [`crate::compress`].

pub mod array;
pub mod bytes;
pub mod enum_codec;
pub mod optional;
pub mod string;
pub mod uuid;
pub mod vector;

use crate::bits::{BitReader, BitWriter};
use crate::error::Result;

/// Writes a value onto a [`BitWriter`]. Infallible: the only way this can
/// go wrong is a caller bug (e.g. a value outside a compressor's declared
/// range), which is a panic, not a `Result`.
pub trait Encode {
    fn encode(&self, writer: &mut BitWriter);
}

/// Reads a value back off a [`BitReader`]. May fail with
/// [`crate::error::CodecError::TooShort`] or `EncodingError`; a checksum
/// failure can only originate from [`BitReader::new_crc_validated`].
pub trait Decode: Sized {
    fn decode(reader: &mut BitReader) -> Result<Self>;
}

macro_rules! impl_codec_for_full_width {
    ($($t:ty),+) => {
        $(
            impl Encode for $t {
                fn encode(&self, writer: &mut BitWriter) {
                    writer.append_full(*self);
                }
            }

            impl Decode for $t {
                fn decode(reader: &mut BitReader) -> Result<Self> {
                    reader.read_full::<$t>()
                }
            }
        )+
    };
}

impl_codec_for_full_width!(bool, u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);
