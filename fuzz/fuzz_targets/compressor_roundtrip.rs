//! Roundtrip fuzz test: decode(encode(v)) == v for a UIntCompressor whose
//! (min, max, v) are all derived from the fuzz input.
#![no_main]
use bitwire::bits::{BitReader, BitWriter};
use bitwire::compress::UIntCompressor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }
    let min = u64::from_le_bytes(data[0..8].try_into().unwrap());
    let span = u64::from_le_bytes(data[8..16].try_into().unwrap());
    let raw_value = u64::from_le_bytes(data[16..24].try_into().unwrap());

    let max = match min.checked_add(span.max(1)) {
        Some(max) if max > min => max,
        _ => return,
    };
    let value = min + (raw_value % (max - min + 1));

    let compressor = UIntCompressor::new(min, max);
    let mut writer = BitWriter::new(0);
    compressor.encode(&mut writer, value);
    let packed = writer.pack(false);

    let mut reader = BitReader::new(&packed).unwrap();
    let decoded = compressor.decode(&mut reader).unwrap();
    assert_eq!(decoded, value, "decode(encode(v)) != v");
});
