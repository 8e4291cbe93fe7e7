//! UTF-8 string stock codec (spec.md §4.1/§4.2).

use crate::bits::{BitReader, BitWriter, DEFAULT_MAX_COUNT_HINT};
use crate::error::Result;

/// A length-prefixed UTF-8 string, encoded with
/// [`BitWriter::append_string`] using [`DEFAULT_MAX_COUNT_HINT`]. For a
/// caller-chosen hint, call `writer.append_string(..)` /
/// `reader.read_string(..)` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringValue(pub String);

impl super::Encode for StringValue {
    fn encode(&self, writer: &mut BitWriter) {
        writer.append_string(&self.0, DEFAULT_MAX_COUNT_HINT);
    }
}

impl super::Decode for StringValue {
    fn decode(reader: &mut BitReader) -> Result<Self> {
        Ok(StringValue(reader.read_string(DEFAULT_MAX_COUNT_HINT)?))
    }
}
