//! Generic fixed-width integer support.
//!
//! The source this crate is modeled on hand-wrote a separate overload of
//! every bit-packing operation per integer width (`u8`, `u16`, ..., `i64`).
//! Per spec's design note, a single generic implementation collapses that:
//! `UBits` is the "as an unsigned bit pattern of known width" view that
//! `BitWriter::append_fixed`/`BitReader::read_fixed` are generic over, and
//! `BitStorable` is the "whole-width encoding" view that `append_full`/
//! `read_full` are generic over (covering signed integers and floats too,
//! via their two's-complement / IEEE-754 bit patterns).

/// A type that can be carried as an unsigned value of up to 128 bits and
/// written/read a sub-range of its bits at a time.
pub trait UBits: Copy + Sized {
    /// Bit width of the full type.
    const BITS: u32;

    fn to_u128(self) -> u128;
    fn from_u128(v: u128) -> Self;
}

macro_rules! impl_ubits {
    ($($t:ty),+) => {
        $(
            impl UBits for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn from_u128(v: u128) -> Self {
                    v as $t
                }
            }
        )+
    };
}

impl_ubits!(u8, u16, u32, u64, u128);

/// A type with a fixed bit width whose whole-width wire representation is
/// an unsigned bit pattern (two's-complement for signed integers, IEEE-754
/// for floats).
pub trait BitStorable: Copy + Sized {
    const BITS: u32;
    type Unsigned: UBits;

    fn to_unsigned(self) -> Self::Unsigned;
    fn from_unsigned(u: Self::Unsigned) -> Self;
}

macro_rules! impl_bitstorable_unsigned {
    ($($t:ty),+) => {
        $(
            impl BitStorable for $t {
                const BITS: u32 = <$t>::BITS;
                type Unsigned = $t;

                #[inline]
                fn to_unsigned(self) -> Self::Unsigned {
                    self
                }

                #[inline]
                fn from_unsigned(u: Self::Unsigned) -> Self {
                    u
                }
            }
        )+
    };
}

impl_bitstorable_unsigned!(u8, u16, u32, u64, u128);

macro_rules! impl_bitstorable_signed {
    ($(($signed:ty, $unsigned:ty)),+) => {
        $(
            impl BitStorable for $signed {
                const BITS: u32 = <$signed>::BITS;
                type Unsigned = $unsigned;

                #[inline]
                fn to_unsigned(self) -> Self::Unsigned {
                    self as $unsigned
                }

                #[inline]
                fn from_unsigned(u: Self::Unsigned) -> Self {
                    u as $signed
                }
            }
        )+
    };
}

impl_bitstorable_signed!((i8, u8), (i16, u16), (i32, u32), (i64, u64), (i128, u128));

impl BitStorable for bool {
    const BITS: u32 = 1;
    type Unsigned = u8;

    #[inline]
    fn to_unsigned(self) -> u8 {
        self as u8
    }

    #[inline]
    fn from_unsigned(u: u8) -> Self {
        u != 0
    }
}

impl BitStorable for f32 {
    const BITS: u32 = 32;
    type Unsigned = u32;

    #[inline]
    fn to_unsigned(self) -> u32 {
        self.to_bits()
    }

    #[inline]
    fn from_unsigned(u: u32) -> Self {
        f32::from_bits(u)
    }
}

impl BitStorable for f64 {
    const BITS: u32 = 64;
    type Unsigned = u64;

    #[inline]
    fn to_unsigned(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_unsigned(u: u64) -> Self {
        f64::from_bits(u)
    }
}

/// `bit_width(max_value) - leading_zero_count(max_value)`, the width formula
/// spec uses for length/variant-count fields. Preserved exactly, including
/// its documented off-by-one at exact powers of two (spec.md §9).
pub fn count_width(max_count: u32) -> u32 {
    32 - max_count.leading_zeros()
}
