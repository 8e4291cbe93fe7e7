//! Bit-level stream primitives (spec.md §4.1/§4.2): the write-side
//! [`BitWriter`] and read-side [`BitReader`], and the generic fixed-width
//! integer plumbing ([`ubits`]) both are built on.

pub mod reader;
pub mod ubits;
pub mod writer;

pub use reader::BitReader;
pub use ubits::{count_width, BitStorable, UBits};
pub use writer::{BitWriter, DEFAULT_MAX_COUNT_HINT};
