//! CSS value types.

mod length;

pub use length::LengthValue;
