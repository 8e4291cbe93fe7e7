//! Float/double range compressors (spec.md §4.3).
//!
//! Both compressors quantize a value within `[min_value, max_value]`
//! uniformly onto `[0, 2^bits - 1]`. They differ only in the floating-point
//! width used for the caller-facing value, so the logic is written once as
//! `FloatRangeCompressor<f64>` and exposed under the two names the spec
//! calls for.

use crate::bits::{BitReader, BitWriter};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRangeCompressor {
    min_value: f64,
    max_value: f64,
    bits: u32,
    max_bit_value: f64,
}

impl FloatRangeCompressor {
    /// # Panics
    ///
    /// Panics if `min_value >= max_value` or `bits` is zero or exceeds 64.
    pub fn new(min_value: f64, max_value: f64, bits: u32) -> Self {
        assert!(
            min_value < max_value,
            "FloatRangeCompressor: min_value must be < max_value"
        );
        assert!(
            bits > 0 && bits <= 64,
            "FloatRangeCompressor: bits must be in 1..=64"
        );
        FloatRangeCompressor {
            min_value,
            max_value,
            bits,
            max_bit_value: ((1u128 << bits) - 1) as f64,
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The maximum absolute quantization error, `(max - min) / (2^bits - 1)`.
    pub fn max_error(&self) -> f64 {
        (self.max_value - self.min_value) / self.max_bit_value
    }

    pub fn encode(&self, writer: &mut BitWriter, value: f64) {
        let ratio = (value - self.min_value) / (self.max_value - self.min_value);
        let ratio = ratio.clamp(0.0, 1.0);
        let quantized = (ratio * self.max_bit_value).round() as u64;
        writer.append_fixed(quantized, self.bits);
    }

    pub fn decode(&self, reader: &mut BitReader) -> Result<f64> {
        let bit_pattern = reader.read_fixed::<u64>(self.bits)?;
        let value =
            (bit_pattern as f64 / self.max_bit_value) * (self.max_value - self.min_value)
                + self.min_value;
        Ok(value)
    }
}

/// Range compressor over `f32` values. Thin wrapper over
/// [`FloatRangeCompressor`]'s `f64` arithmetic, matching the source's
/// `FloatCompressor` name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatCompressor(FloatRangeCompressor);

impl FloatCompressor {
    pub fn new(min_value: f32, max_value: f32, bits: u32) -> Self {
        FloatCompressor(FloatRangeCompressor::new(
            min_value as f64,
            max_value as f64,
            bits,
        ))
    }

    pub fn bits(&self) -> u32 {
        self.0.bits()
    }

    pub fn max_error(&self) -> f32 {
        self.0.max_error() as f32
    }

    pub fn encode(&self, writer: &mut BitWriter, value: f32) {
        self.0.encode(writer, value as f64);
    }

    pub fn decode(&self, reader: &mut BitReader) -> Result<f32> {
        Ok(self.0.decode(reader)? as f32)
    }
}

/// Range compressor over `f64` values, matching the source's
/// `DoubleCompressor` name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleCompressor(FloatRangeCompressor);

impl DoubleCompressor {
    pub fn new(min_value: f64, max_value: f64, bits: u32) -> Self {
        DoubleCompressor(FloatRangeCompressor::new(min_value, max_value, bits))
    }

    pub fn bits(&self) -> u32 {
        self.0.bits()
    }

    pub fn max_error(&self) -> f64 {
        self.0.max_error()
    }

    pub fn encode(&self, writer: &mut BitWriter, value: f64) {
        self.0.encode(writer, value);
    }

    pub fn decode(&self, reader: &mut BitReader) -> Result<f64> {
        self.0.decode(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_s2_compressed_float() {
        // S2: FloatCompressor(min=-1000, max=1000, bits=26) on v=-10.0.
        let c = FloatCompressor::new(-1000.0, 1000.0, 26);
        let mut w = BitWriter::new(0);
        c.encode(&mut w, -10.0);
        let bytes = w.pack(false);
        let mut r = BitReader::new(&bytes).unwrap();
        let decoded = c.decode(&mut r).unwrap();
        assert!((decoded - (-10.0)).abs() < 0.01);
    }

    #[test]
    fn quantization_error_is_bounded() {
        let c = DoubleCompressor::new(-1.0, 1.0, 10);
        let max_err = c.max_error();
        let mut v = -1.0;
        while v <= 1.0 {
            let mut w = BitWriter::new(0);
            c.encode(&mut w, v);
            let bytes = w.pack(false);
            let mut r = BitReader::new(&bytes).unwrap();
            let decoded = c.decode(&mut r).unwrap();
            assert!((decoded - v).abs() <= max_err + f64::EPSILON);
            v += 0.013;
        }
    }

    #[test]
    fn out_of_range_values_clamp_instead_of_panicking() {
        let c = DoubleCompressor::new(0.0, 10.0, 8);
        let mut w = BitWriter::new(0);
        c.encode(&mut w, 9999.0);
        let bytes = w.pack(false);
        let mut r = BitReader::new(&bytes).unwrap();
        assert_eq!(c.decode(&mut r).unwrap(), 10.0);
    }
}
