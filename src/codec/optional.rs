//! Optional-value codec (spec.md §4.5): one presence bit, then the wrapped
//! value if present. `None` is a single `0` bit.

use super::{Decode, Encode};
use crate::bits::{BitReader, BitWriter};
use crate::error::Result;

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, writer: &mut BitWriter) {
        match self {
            Some(value) => {
                writer.append_bool(true);
                value.encode(writer);
            }
            None => writer.append_bool(false),
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(reader: &mut BitReader) -> Result<Self> {
        if reader.read_bool()? {
            Ok(Some(T::decode(reader)?))
        } else {
            Ok(None)
        }
    }
}
