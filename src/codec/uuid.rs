//! UUID stock codec (spec.md §4.5): a 128-bit value written as its two
//! 64-bit halves via `append_full`/`read_full`. The UUID *type* itself is
//! explicitly out of scope (spec.md §1); this only defines its wire shape,
//! so the crate stays self-contained rather than depending on a `uuid`
//! crate purely to re-wrap two `u64`s.
use super::{Decode, Encode};
use crate::bits::{BitReader, BitWriter};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uuid {
    pub high: u64,
    pub low: u64,
}

impl Uuid {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut high = [0u8; 8];
        let mut low = [0u8; 8];
        high.copy_from_slice(&bytes[0..8]);
        low.copy_from_slice(&bytes[8..16]);
        Uuid {
            high: u64::from_le_bytes(high),
            low: u64::from_le_bytes(low),
        }
    }

    pub fn to_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..8].copy_from_slice(&self.high.to_le_bytes());
        out[8..16].copy_from_slice(&self.low.to_le_bytes());
        out
    }
}

impl Encode for Uuid {
    fn encode(&self, writer: &mut BitWriter) {
        writer.append_full(self.high);
        writer.append_full(self.low);
    }
}

impl Decode for Uuid {
    fn decode(reader: &mut BitReader) -> Result<Self> {
        let high = reader.read_full::<u64>()?;
        let low = reader.read_full::<u64>()?;
        Ok(Uuid { high, low })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_roundtrip() {
        let original = Uuid::from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        let mut w = BitWriter::new(0);
        original.encode(&mut w);
        let bytes = w.pack(false);
        let mut r = BitReader::new(&bytes).unwrap();
        let decoded = Uuid::decode(&mut r).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.to_bytes(), original.to_bytes());
    }
}
