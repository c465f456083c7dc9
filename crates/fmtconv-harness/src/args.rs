//! `kind:text` argument specs, as used on the command line and in fixtures.
//!
//! `int32:5` is an `int32` holding 5; `string:Paul` is the string `Paul`.
//! Text without a recognised `kind:` prefix is taken as a string.

use fmtconv_core::convert::text_to_value;
use fmtconv_core::{Kind, Value};

use crate::error::HarnessError;

/// Parse one `kind:text` spec.
pub fn parse_arg(spec: &str) -> Result<Value, HarnessError> {
    match spec.split_once(':') {
        Some((name, text)) => match Kind::from_name(name) {
            Some(kind) => Ok(text_to_value(text, kind)?),
            None => Ok(Value::from(spec)),
        },
        None => Ok(Value::from(spec)),
    }
}

/// Parse a bare kind name.
pub fn parse_kind(name: &str) -> Result<Kind, HarnessError> {
    Kind::from_name(name).ok_or_else(|| HarnessError::UnknownKind(name.to_string()))
}

/// Render a value back into `kind:text` form.
#[must_use]
pub fn describe(value: &Value) -> String {
    format!("{}:{value}", value.kind())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_specs() {
        assert_eq!(parse_arg("int32:5").unwrap(), Value::Int32(5));
        assert_eq!(parse_arg("int:-42").unwrap(), Value::int(-42));
        assert_eq!(parse_arg("float64:3.5").unwrap(), Value::Float64(3.5));
        assert_eq!(parse_arg("string:a:b").unwrap(), Value::from("a:b"));
        assert_eq!(parse_arg("bool:true").unwrap(), Value::Bool(true));
    }

    #[test]
    fn untyped_specs_are_strings() {
        assert_eq!(parse_arg("Paul").unwrap(), Value::from("Paul"));
        assert_eq!(parse_arg("note:hi").unwrap(), Value::from("note:hi"));
    }

    #[test]
    fn bad_typed_spec_is_conversion_error() {
        assert!(matches!(parse_arg("int8:300"), Err(HarnessError::Conversion(_))));
        assert!(matches!(parse_kind("complex"), Err(HarnessError::UnknownKind(_))));
    }

    #[test]
    fn describe_round_trips() {
        let v = Value::Uint64(18_446_744_073_709_551_574);
        assert_eq!(describe(&v), "uint64:18446744073709551574");
        assert_eq!(parse_arg(&describe(&v)).unwrap(), v);
    }
}
