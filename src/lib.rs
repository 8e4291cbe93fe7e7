//! A bit-level serialization codec: a pair of cooperating stream objects,
//! [`BitWriter`] and [`BitReader`], that encode structured values into a
//! dense sequence of bits and decode them back.
//!
//! This targets applications — game networking, real-time simulation,
//! embedded telemetry — where a general-purpose byte-aligned encoder would
//! waste space on small integers, enums with few cases, bounded floats, and
//! bounded arrays. Widths are derived from a caller-*declared* value range
//! or variant universe, not from observed frequency; this is not an
//! entropy coder.
//!
//! The wire format carries no schema, type tags, or field names. A
//! [`BitReader`] must read back values in exactly the order, width, and
//! variant universe the writer used them in — divergence yields a wrong
//! value or an [`error::CodecError::EncodingError`], not a detectable
//! framing error.
//!
//! ```
//! use bitwire::bits::{BitReader, BitWriter};
//! use bitwire::codec::{Decode, Encode};
//!
//! let mut writer = BitWriter::new(0);
//! 163u64.encode(&mut writer);
//! 164u64.encode(&mut writer);
//! let packed = writer.pack(true);
//!
//! let mut reader = BitReader::new_crc_validated(&packed).unwrap();
//! assert_eq!(u64::decode(&mut reader).unwrap(), 163);
//! assert_eq!(u64::decode(&mut reader).unwrap(), 164);
//! ```

pub mod bits;
pub mod codec;
pub mod compress;
mod crc32;
pub mod error;

pub use bits::{BitReader, BitWriter};
pub use error::{CodecError, Result};
