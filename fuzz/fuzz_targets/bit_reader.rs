//! Feeds arbitrary bytes to BitReader and checks that it never panics and
//! never advances the cursor past the declared end of stream.
#![no_main]
use bitwire::bits::BitReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let mut reader = match BitReader::new(data) {
        Ok(reader) => reader,
        Err(_) => return,
    };
    loop {
        match reader.read_bit() {
            Ok(_) => {
                assert!(reader.position() <= reader.bit_len());
            }
            Err(_) => break,
        }
    }
});
