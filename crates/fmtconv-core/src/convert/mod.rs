//! Explicit conversions between numeric kinds and between numbers and text.
//!
//! - [`width`]: bit-pattern reinterpretation across widths and signedness,
//!   and integer -> float widening. Always succeeds.
//! - [`text`]: canonical number -> text, and strict text -> number parsing
//!   with explicit failure reporting.

pub mod text;
pub mod width;

pub use text::{
    ConversionResult, number_to_text, text_to_bool, text_to_float, text_to_int, text_to_integer,
    text_to_uint, text_to_value,
};
pub use width::{FloatPrecision, IntWidth, reinterpret_word, to_fixed_width, to_float};
