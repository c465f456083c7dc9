//! Width, sign, and precision reinterpretation between numeric kinds.
//!
//! Nothing here range-checks. Narrowing keeps the low bits, widening
//! sign-extends signed sources and zero-extends unsigned ones, and signed
//! <-> unsigned keeps the two's-complement bit pattern.

use crate::value::Value;

/// Target width of an integer conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(IntWidth::W8),
            16 => Some(IntWidth::W16),
            32 => Some(IntWidth::W32),
            64 => Some(IntWidth::W64),
            _ => None,
        }
    }
}

/// Target precision of a float conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatPrecision {
    Single,
    Double,
}

impl FloatPrecision {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "single" | "float32" | "32" => Some(FloatPrecision::Single),
            "double" | "float64" | "64" => Some(FloatPrecision::Double),
            _ => None,
        }
    }
}

/// Bit pattern of a numeric value, or `None` for strings and bools.
///
/// Floats truncate toward zero first; out-of-range floats saturate at the
/// `i128` bounds before the width truncation, NaN becomes 0.
fn numeric_bits(value: &Value) -> Option<i128> {
    value
        .integer_bits()
        .or_else(|| value.float_value().map(|f| f.trunc() as i128))
}

/// Reinterpret `value` as a `width`-bit signed or unsigned integer.
///
/// `to_fixed_width(&Value::Int64(-42), IntWidth::W64, false)` yields
/// `Uint64(18446744073709551574)`; `256` at 8 signed bits yields `Int8(0)`.
/// Non-numeric values are returned unchanged.
#[must_use]
pub fn to_fixed_width(value: &Value, width: IntWidth, signed: bool) -> Value {
    let Some(bits) = numeric_bits(value) else {
        return value.clone();
    };
    match (width, signed) {
        (IntWidth::W8, true) => Value::Int8(bits as i8),
        (IntWidth::W16, true) => Value::Int16(bits as i16),
        (IntWidth::W32, true) => Value::Int32(bits as i32),
        (IntWidth::W64, true) => Value::Int64(bits as i64),
        (IntWidth::W8, false) => Value::Uint8(bits as u8),
        (IntWidth::W16, false) => Value::Uint16(bits as u16),
        (IntWidth::W32, false) => Value::Uint32(bits as u32),
        (IntWidth::W64, false) => Value::Uint64(bits as u64),
    }
}

/// Reinterpret `value` as a machine-word `int` or `uint`.
#[must_use]
pub fn reinterpret_word(value: &Value, signed: bool) -> Value {
    match numeric_bits(value) {
        Some(bits) if signed => Value::Int(bits as i64),
        Some(bits) => Value::Uint(bits as u64),
        None => value.clone(),
    }
}

/// Convert a numeric value to `float32`/`float64`.
///
/// Large integers lose precision silently (round to nearest).
#[must_use]
pub fn to_float(value: &Value, precision: FloatPrecision) -> Value {
    match (value.integer_bits(), value.float_value(), precision) {
        // Integers round once, straight to the target precision.
        (Some(bits), _, FloatPrecision::Single) => Value::Float32(bits as f32),
        (Some(bits), _, FloatPrecision::Double) => Value::Float64(bits as f64),
        (None, Some(f), FloatPrecision::Single) => Value::Float32(f as f32),
        (None, Some(f), FloatPrecision::Double) => Value::Float64(f),
        (None, None, _) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_to_unsigned_64_wraps() {
        assert_eq!(
            to_fixed_width(&Value::Int64(-42), IntWidth::W64, false),
            Value::Uint64(18_446_744_073_709_551_574)
        );
        assert_eq!(
            reinterpret_word(&Value::int(-42), false),
            Value::uint(18_446_744_073_709_551_574)
        );
    }

    #[test]
    fn narrowing_truncates() {
        assert_eq!(to_fixed_width(&Value::int(256), IntWidth::W8, true), Value::Int8(0));
        assert_eq!(to_fixed_width(&Value::int(-1), IntWidth::W8, false), Value::Uint8(255));
        assert_eq!(to_fixed_width(&Value::int(200), IntWidth::W8, true), Value::Int8(-56));
        assert_eq!(
            to_fixed_width(&Value::int(70_000), IntWidth::W16, false),
            Value::Uint16(4464)
        );
    }

    #[test]
    fn widening_extends_by_source_sign() {
        assert_eq!(to_fixed_width(&Value::Int8(-1), IntWidth::W32, true), Value::Int32(-1));
        assert_eq!(
            to_fixed_width(&Value::Int8(-1), IntWidth::W32, false),
            Value::Uint32(u32::MAX)
        );
        assert_eq!(to_fixed_width(&Value::Uint8(255), IntWidth::W32, true), Value::Int32(255));
        assert_eq!(to_fixed_width(&Value::Uint64(u64::MAX), IntWidth::W64, true), Value::Int64(-1));
    }

    #[test]
    fn same_width_conversions_keep_value() {
        let i = Value::int(32);
        assert_eq!(to_fixed_width(&i, IntWidth::W8, true), Value::Int8(32));
        assert_eq!(to_fixed_width(&i, IntWidth::W32, true), Value::Int32(32));
        assert_eq!(to_fixed_width(&i, IntWidth::W64, true), Value::Int64(32));
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(to_fixed_width(&Value::Float64(-3.9), IntWidth::W32, true), Value::Int32(-3));
        assert_eq!(to_fixed_width(&Value::Float64(f64::NAN), IntWidth::W8, true), Value::Int8(0));
    }

    #[test]
    fn non_numeric_passes_through() {
        let s = Value::from("32");
        assert_eq!(to_fixed_width(&s, IntWidth::W8, true), s);
        assert_eq!(to_float(&Value::Bool(true), FloatPrecision::Double), Value::Bool(true));
    }

    #[test]
    fn int_to_float() {
        assert_eq!(to_float(&Value::int(32), FloatPrecision::Single), Value::Float32(32.0));
        assert_eq!(to_float(&Value::int(32), FloatPrecision::Double), Value::Float64(32.0));
        // 2^24 + 1 is not representable in f32.
        assert_eq!(
            to_float(&Value::int(16_777_217), FloatPrecision::Single),
            Value::Float32(16_777_216.0)
        );
        assert_eq!(
            to_float(&Value::Float64(0.1), FloatPrecision::Single),
            Value::Float32(0.1)
        );
    }

    #[test]
    fn width_lookup() {
        assert_eq!(IntWidth::from_bits(16), Some(IntWidth::W16));
        assert_eq!(IntWidth::from_bits(12), None);
        assert_eq!(IntWidth::W32.bits(), 32);
        assert_eq!(FloatPrecision::from_name("single"), Some(FloatPrecision::Single));
    }
}
