//! Length-prefixed arrays (spec.md §4.4).
//!
//! Four shapes appear in practice:
//!
//! - a plain `Vec<T>` of Codec Protocol values, using
//!   [`DEFAULT_MAX_COUNT_HINT`] — the blanket `Encode`/`Decode` impls below;
//! - [`BoundedArray`], the same shape with an explicit `max_count_hint`;
//! - [`BitArray`], homogeneous fixed-width integers with a declared
//!   per-element bit width instead of going through the Codec Protocol;
//! - nullable-element arrays, which fall out of `Vec<Option<T>>` for free.

use crate::bits::ubits::{count_width, UBits};
use crate::bits::{BitReader, BitWriter, DEFAULT_MAX_COUNT_HINT};
use crate::error::Result;

use super::{Decode, Encode};

fn encode_array<T: Encode>(writer: &mut BitWriter, items: &[T], max_count_hint: u32) {
    debug_assert!(
        items.len() as u64 <= max_count_hint as u64,
        "array: {} elements exceeds max_count_hint {max_count_hint}",
        items.len()
    );
    let width = count_width(max_count_hint);
    writer.append_fixed(items.len() as u32, width);
    for item in items {
        item.encode(writer);
    }
}

fn decode_array<T: Decode>(reader: &mut BitReader, max_count_hint: u32) -> Result<Vec<T>> {
    let width = count_width(max_count_hint);
    let len = reader.read_fixed::<u32>(width)? as usize;
    let mut items = Vec::with_capacity(len.min(1 << 16));
    for _ in 0..len {
        items.push(T::decode(reader)?);
    }
    Ok(items)
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, writer: &mut BitWriter) {
        encode_array(writer, self, DEFAULT_MAX_COUNT_HINT);
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut BitReader) -> Result<Self> {
        decode_array(reader, DEFAULT_MAX_COUNT_HINT)
    }
}

/// A length-prefixed array of Codec Protocol values with an explicit
/// `max_count_hint` (instead of the blanket `Vec<T>` impl's default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedArray<T> {
    pub items: Vec<T>,
    pub max_count_hint: u32,
}

impl<T> BoundedArray<T> {
    pub fn new(items: Vec<T>, max_count_hint: u32) -> Self {
        BoundedArray {
            items,
            max_count_hint,
        }
    }
}

impl<T: Encode> BoundedArray<T> {
    pub fn encode(&self, writer: &mut BitWriter) {
        encode_array(writer, &self.items, self.max_count_hint);
    }
}

impl<T: Decode> BoundedArray<T> {
    pub fn decode(reader: &mut BitReader, max_count_hint: u32) -> Result<Self> {
        Ok(BoundedArray {
            items: decode_array(reader, max_count_hint)?,
            max_count_hint,
        })
    }
}

/// A length-prefixed array of homogeneous fixed-width integers, each
/// encoded with `append_fixed(value, value_bits)` rather than through the
/// Codec Protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray<U> {
    pub values: Vec<U>,
    pub value_bits: u32,
    pub max_count_hint: u32,
}

impl<U: UBits> BitArray<U> {
    pub fn new(values: Vec<U>, value_bits: u32, max_count_hint: u32) -> Self {
        BitArray {
            values,
            value_bits,
            max_count_hint,
        }
    }

    pub fn encode(&self, writer: &mut BitWriter) {
        debug_assert!(
            self.values.len() as u64 <= self.max_count_hint as u64,
            "BitArray: {} elements exceeds max_count_hint {}",
            self.values.len(),
            self.max_count_hint
        );
        let width = count_width(self.max_count_hint);
        writer.append_fixed(self.values.len() as u32, width);
        for &value in &self.values {
            writer.append_fixed(value, self.value_bits);
        }
    }

    pub fn decode(reader: &mut BitReader, value_bits: u32, max_count_hint: u32) -> Result<Self> {
        let width = count_width(max_count_hint);
        let len = reader.read_fixed::<u32>(width)? as usize;
        let mut values = Vec::with_capacity(len.min(1 << 16));
        for _ in 0..len {
            values.push(reader.read_fixed::<U>(value_bits)?);
        }
        Ok(BitArray {
            values,
            value_bits,
            max_count_hint,
        })
    }
}
