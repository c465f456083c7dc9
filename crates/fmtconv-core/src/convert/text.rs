//! Numeric <-> text conversions.
//!
//! Text -> number is strict: the whole input must be a literal (no
//! surrounding whitespace, no trailing garbage). Failures come back in a
//! [`ConversionResult`] whose value is the zero of the target kind.

use crate::error::{ConversionError, ConversionFailure};
use crate::format::format_value;
use crate::value::{Kind, Value};

use super::width::{FloatPrecision, IntWidth};

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// A converted value paired with its failure, if any.
///
/// On failure `value` is the zero value and must not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult<T> {
    pub value: T,
    pub error: Option<ConversionError>,
}

impl<T: Default> ConversionResult<T> {
    fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    fn fail(error: ConversionError) -> Self {
        Self {
            value: T::default(),
            error: Some(error),
        }
    }
}

impl<T> ConversionResult<T> {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<T, ConversionError> {
        match self.error {
            None => Ok(self.value),
            Some(err) => Err(err),
        }
    }
}

impl<T> From<ConversionResult<T>> for Result<T, ConversionError> {
    fn from(res: ConversionResult<T>) -> Self {
        res.into_result()
    }
}

// ---------------------------------------------------------------------------
// Number -> text
// ---------------------------------------------------------------------------

/// Canonical decimal text of a numeric value.
///
/// Integers: minimal base-10 digits with an optional leading `-`.
/// Floats: the shortest text that round-trips at the value's precision.
/// Strings and bools render as with `%v`.
#[must_use]
pub fn number_to_text(value: &Value) -> String {
    match value.integer_bits() {
        Some(bits) => bits.to_string(),
        None => format_value(value),
    }
}

// ---------------------------------------------------------------------------
// Text -> integer
// ---------------------------------------------------------------------------

/// Parse `text` as a base-10 64-bit signed integer.
pub fn text_to_integer(text: &str) -> ConversionResult<i64> {
    parse_signed("text_to_integer", text, IntWidth::W64)
}

/// Parse `text` as a base-10 signed integer bounded to `width` bits.
pub fn text_to_int(text: &str, width: IntWidth) -> ConversionResult<i64> {
    parse_signed("text_to_int", text, width)
}

/// Parse `text` as a base-10 unsigned integer bounded to `width` bits.
///
/// A leading `+` is accepted; a leading `-` is a syntax error.
pub fn text_to_uint(text: &str, width: IntWidth) -> ConversionResult<u64> {
    const OP: &str = "text_to_uint";
    let max = u64::MAX >> (64 - width.bits());
    match scan_decimal(text.as_bytes(), max) {
        Ok((false, magnitude)) => ConversionResult::ok(magnitude),
        Ok((true, _)) => ConversionResult::fail(ConversionError::syntax(OP, text)),
        Err(ConversionFailure::Range) => ConversionResult::fail(ConversionError::range(OP, text)),
        Err(ConversionFailure::Syntax) => ConversionResult::fail(ConversionError::syntax(OP, text)),
    }
}

fn parse_signed(op: &'static str, text: &str, width: IntWidth) -> ConversionResult<i64> {
    let bits = width.bits();
    let bytes = text.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    // |MIN| is one more than MAX.
    let abs_max = if negative { 1u64 << (bits - 1) } else { (1u64 << (bits - 1)) - 1 };

    match scan_decimal(bytes, abs_max) {
        Ok((neg, magnitude)) => {
            let value = if neg {
                (magnitude as i64).wrapping_neg()
            } else {
                magnitude as i64
            };
            ConversionResult::ok(value)
        }
        Err(ConversionFailure::Range) => ConversionResult::fail(ConversionError::range(op, text)),
        Err(ConversionFailure::Syntax) => ConversionResult::fail(ConversionError::syntax(op, text)),
    }
}

/// Scan `[+-]digits` covering all of `s`.
///
/// Returns `(negative, magnitude)`. Overflow past `abs_max` is reported as
/// `Range` only once the whole input is known to be well-formed.
fn scan_decimal(s: &[u8], abs_max: u64) -> Result<(bool, u64), ConversionFailure> {
    let len = s.len();
    let mut i = 0;

    let mut negative = false;
    if i < len && (s[i] == b'-' || s[i] == b'+') {
        negative = s[i] == b'-';
        i += 1;
    }
    if i == len {
        return Err(ConversionFailure::Syntax);
    }

    let cutoff = abs_max / 10;
    let cutlim = abs_max % 10;

    let mut acc: u64 = 0;
    let mut overflow = false;

    while i < len {
        let c = s[i];
        if !c.is_ascii_digit() {
            return Err(ConversionFailure::Syntax);
        }
        let digit = u64::from(c - b'0');
        if !overflow {
            if acc > cutoff || (acc == cutoff && digit > cutlim) {
                overflow = true;
            } else {
                acc = acc * 10 + digit;
            }
        }
        i += 1;
    }

    if overflow {
        return Err(ConversionFailure::Range);
    }
    Ok((negative, acc))
}

// ---------------------------------------------------------------------------
// Text -> float
// ---------------------------------------------------------------------------

/// Parse `text` as a floating-point literal at `precision`.
///
/// Accepts `[+-]digits[.digits][e[+-]digits]` and, case-insensitively,
/// `inf`, `infinity`, and `nan`. A finite literal too large for the target
/// precision is a range error. Single-precision results are rounded to the
/// nearest `f32` and returned widened.
pub fn text_to_float(text: &str, precision: FloatPrecision) -> ConversionResult<f64> {
    const OP: &str = "text_to_float";
    let parsed = match precision {
        FloatPrecision::Single => text.parse::<f32>().map(f64::from),
        FloatPrecision::Double => text.parse::<f64>(),
    };
    match parsed {
        Ok(value) if value.is_infinite() && !names_infinity(text) => {
            ConversionResult::fail(ConversionError::range(OP, text))
        }
        Ok(value) => ConversionResult::ok(value),
        Err(_) => ConversionResult::fail(ConversionError::syntax(OP, text)),
    }
}

fn names_infinity(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

// ---------------------------------------------------------------------------
// Text -> any kind
// ---------------------------------------------------------------------------

/// Parse `text` as a boolean: `1 t T TRUE true True` / `0 f F FALSE false False`.
pub fn text_to_bool(text: &str) -> ConversionResult<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => ConversionResult::ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => ConversionResult::ok(false),
        _ => ConversionResult::fail(ConversionError::syntax("text_to_bool", text)),
    }
}

/// Convert `text` into a value of `kind`.
///
/// Integer kinds are range-checked at their width; strings are taken
/// verbatim.
pub fn text_to_value(text: &str, kind: Kind) -> Result<Value, ConversionError> {
    let int = |width| text_to_int(text, width).into_result();
    let uint = |width| text_to_uint(text, width).into_result();
    Ok(match kind {
        Kind::Int => Value::Int(int(IntWidth::W64)?),
        Kind::Int8 => Value::Int8(int(IntWidth::W8)? as i8),
        Kind::Int16 => Value::Int16(int(IntWidth::W16)? as i16),
        Kind::Int32 => Value::Int32(int(IntWidth::W32)? as i32),
        Kind::Int64 => Value::Int64(int(IntWidth::W64)?),
        Kind::Uint => Value::Uint(uint(IntWidth::W64)?),
        Kind::Uint8 => Value::Uint8(uint(IntWidth::W8)? as u8),
        Kind::Uint16 => Value::Uint16(uint(IntWidth::W16)? as u16),
        Kind::Uint32 => Value::Uint32(uint(IntWidth::W32)? as u32),
        Kind::Uint64 => Value::Uint64(uint(IntWidth::W64)?),
        Kind::Float32 => {
            Value::Float32(text_to_float(text, FloatPrecision::Single).into_result()? as f32)
        }
        Kind::Float64 => Value::Float64(text_to_float(text, FloatPrecision::Double).into_result()?),
        Kind::String => Value::String(text.to_string()),
        Kind::Bool => Value::Bool(text_to_bool(text).into_result()?),
    })
}
