//! Range compressors: small value-objects that quantize a value known to
//! lie in a declared `[min, max]` into an unsigned bit field of the
//! minimal width, and back (spec.md §4.3).

pub mod float;
pub mod int;
pub mod uint;

pub use float::{DoubleCompressor, FloatCompressor};
pub use int::IntCompressor;
pub use uint::UIntCompressor;
