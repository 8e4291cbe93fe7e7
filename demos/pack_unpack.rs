//! Packs a small handful of declared-range values onto a bit stream with a
//! CRC-32 trailer, then unpacks and prints them back.
//!
//! Run with `cargo run --example pack_unpack` (see `[[example]]` in
//! Cargo.toml, since this crate keeps its demos under `demos/` rather than
//! the conventional `examples/` directory name).

use bitwire::bits::{BitReader, BitWriter};
use bitwire::codec::{Decode, Encode};
use bitwire::compress::{FloatCompressor, IntCompressor};

fn main() {
    let altitude = IntCompressor::new(-500, 12_000);
    let battery = FloatCompressor::new(0.0, 100.0, 10);

    let mut writer = BitWriter::new(16);
    altitude.encode(&mut writer, 9_144);
    battery.encode(&mut writer, 87.5);
    true.encode(&mut writer);
    let packed = writer.pack(true);

    println!("packed {} bytes (with CRC-32 trailer)", packed.len());

    let mut reader = BitReader::new_crc_validated(&packed).expect("checksum should match");
    let altitude_m = altitude.decode(&mut reader).expect("altitude field");
    let battery_pct = battery.decode(&mut reader).expect("battery field");
    let armed = bool::decode(&mut reader).expect("armed flag");

    println!("altitude_m={altitude_m} battery_pct={battery_pct:.1} armed={armed}");
}
