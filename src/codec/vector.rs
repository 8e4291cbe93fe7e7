//! Sized numeric vectors (spec.md §4.3 "Vectors"): a 2- or 3-component
//! vector is simply its scalars written in declared order through a
//! shared compressor — a builder helper per spec.md §9's note on
//! "property wrappers ... become builder helpers".

use crate::bits::{BitReader, BitWriter};
use crate::compress::DoubleCompressor;
use crate::error::Result;

/// A 2-component vector whose components are each range-compressed with
/// the same [`DoubleCompressor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn encode(&self, writer: &mut BitWriter, compressor: &DoubleCompressor) {
        compressor.encode(writer, self.x);
        compressor.encode(writer, self.y);
    }

    pub fn decode(reader: &mut BitReader, compressor: &DoubleCompressor) -> Result<Self> {
        let x = compressor.decode(reader)?;
        let y = compressor.decode(reader)?;
        Ok(Vec2 { x, y })
    }
}

/// A 3-component vector whose components are each range-compressed with
/// the same [`DoubleCompressor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn encode(&self, writer: &mut BitWriter, compressor: &DoubleCompressor) {
        compressor.encode(writer, self.x);
        compressor.encode(writer, self.y);
        compressor.encode(writer, self.z);
    }

    pub fn decode(reader: &mut BitReader, compressor: &DoubleCompressor) -> Result<Self> {
        let x = compressor.decode(reader)?;
        let y = compressor.decode(reader)?;
        let z = compressor.decode(reader)?;
        Ok(Vec3 { x, y, z })
    }
}
