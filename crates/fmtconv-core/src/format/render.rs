//! Template rendering.
//!
//! Rendering never fails. Argument problems are spelled out inline:
//!
//! | situation | output |
//! |---|---|
//! | verb does not fit the argument kind | `%!d(string=hi)` |
//! | placeholder without an argument | `%!d(MISSING)` |
//! | arguments left over | `%!(EXTRA int=5, string=x)` appended |
//! | `%` at the end of the template | `%!(NOVERB)` |
//! | width or precision above [`MAX_WIDTH`] | `%!(BADWIDTH)` / `%!(BADPREC)` |

use super::float;
use super::template::{Directive, MAX_WIDTH, Segment, Template};
use crate::value::Value;

/// Render `template` with positional `args`.
#[must_use]
pub fn render(template: &str, args: &[Value]) -> String {
    let parsed = Template::parse(template);
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut next = 0;

    for segment in parsed.segments() {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Percent => out.push('%'),
            Segment::NoVerb => out.push_str("%!(NOVERB)"),
            Segment::Directive(directive) => match args.get(next) {
                Some(arg) => {
                    next += 1;
                    write_directive(directive, arg, &mut out);
                }
                None => {
                    out.push_str("%!");
                    out.push(directive.verb);
                    out.push_str("(MISSING)");
                }
            },
        }
    }

    if let Some(extra) = args.get(next..).filter(|rest| !rest.is_empty()) {
        out.push_str("%!(EXTRA ");
        for (i, arg) in extra.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            push_tagged(arg, &mut out);
        }
        out.push(')');
    }
    out
}

/// Default (`%v`) rendering of a single value.
#[must_use]
pub fn format_value(value: &Value) -> String {
    let mut out = String::new();
    write_directive(&Directive::bare('v'), value, &mut out);
    out
}

/// Render one argument under one directive.
pub fn write_directive(d: &Directive, arg: &Value, out: &mut String) {
    if d.width.is_some_and(|w| w > MAX_WIDTH) {
        out.push_str("%!(BADWIDTH)");
        return;
    }
    if d.precision.is_some_and(|p| p > MAX_WIDTH) {
        out.push_str("%!(BADPREC)");
        return;
    }
    match d.verb {
        'T' => write_str(arg.kind().name(), d, out),
        'v' => write_default(d, arg, out),
        'd' | 'x' | 'X' | 'o' => match arg.integer_bits() {
            Some(bits) => write_integer(bits, d, out),
            None => bad_verb(d, arg, out),
        },
        'f' | 'F' | 'e' | 'E' | 'g' | 'G' => match arg.float_value() {
            Some(v) => write_float(v, matches!(arg, Value::Float32(_)), d, out),
            None => bad_verb(d, arg, out),
        },
        's' => match arg.as_str() {
            Some(s) => write_str(s, d, out),
            None => bad_verb(d, arg, out),
        },
        't' => match arg.as_bool() {
            Some(b) => write_str(bool_text(b), d, out),
            None => bad_verb(d, arg, out),
        },
        _ => bad_verb(d, arg, out),
    }
}

fn write_default(d: &Directive, arg: &Value, out: &mut String) {
    match arg {
        Value::String(s) => write_str(s, d, out),
        Value::Bool(b) => write_str(bool_text(*b), d, out),
        Value::Float32(v) => write_float(f64::from(*v), true, &Directive { verb: 'g', ..*d }, out),
        Value::Float64(v) => write_float(*v, false, &Directive { verb: 'g', ..*d }, out),
        _ => {
            if let Some(bits) = arg.integer_bits() {
                write_integer(bits, &Directive { verb: 'd', ..*d }, out);
            }
        }
    }
}

/// `%!<verb>(<type>=<value>)`.
fn bad_verb(d: &Directive, arg: &Value, out: &mut String) {
    out.push_str("%!");
    out.push(d.verb);
    out.push('(');
    push_tagged(arg, out);
    out.push(')');
}

/// `<type>=<value>` with the value in default form.
fn push_tagged(arg: &Value, out: &mut String) {
    out.push_str(arg.kind().name());
    out.push('=');
    write_default(&Directive::bare('v'), arg, out);
}

const fn bool_text(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

/// Render an integer (already widened to `i128`) under `d`.
fn write_integer(value: i128, d: &Directive, out: &mut String) {
    let negative = value < 0;
    // Payloads come from at most 64-bit kinds, so the magnitude fits.
    let abs = value.unsigned_abs() as u64;

    let (base, uppercase) = int_base(d.verb);
    let mut digits = [0u8; 64];
    let digit_count = render_digits(abs, base, uppercase, &mut digits);
    let digit_slice = &digits[64 - digit_count..];

    let sign = if negative {
        Some('-')
    } else if d.flags.force_sign {
        Some('+')
    } else if d.flags.space_sign {
        Some(' ')
    } else {
        None
    };

    // Precision: minimum digits (pad with zeros).
    let min_digits = d.precision.unwrap_or(1);
    let zero_prefix_count = min_digits.saturating_sub(digit_count);
    let prefix = if abs != 0 { alt_prefix(d) } else { "" };

    // Explicit precision 0 with value 0: no digits emitted.
    let suppress_zero = abs == 0 && d.precision == Some(0);
    let content_len = usize::from(sign.is_some())
        + prefix.len()
        + if suppress_zero {
            0
        } else {
            zero_prefix_count + digit_count
        };

    // An explicit precision disables zero padding.
    let zero_pad = d.flags.zero_pad && d.precision.is_none();
    let pad_total = d.width.unwrap_or(0).saturating_sub(content_len);

    if !d.flags.left_justify && !zero_pad {
        pad(out, ' ', pad_total);
    }
    if let Some(s) = sign {
        out.push(s);
    }
    out.push_str(prefix);
    if !d.flags.left_justify && zero_pad {
        pad(out, '0', pad_total);
    }
    if !suppress_zero {
        pad(out, '0', zero_prefix_count);
        out.extend(digit_slice.iter().map(|&b| char::from(b)));
    }
    if d.flags.left_justify {
        pad(out, ' ', pad_total);
    }
}

/// Render a float under `d`. `single` selects `float32` shortest digits.
fn write_float(value: f64, single: bool, d: &Directive, out: &mut String) {
    if value.is_nan() {
        return write_special("NaN", d, out);
    }
    if value.is_infinite() {
        let text = if value > 0.0 {
            if d.flags.force_sign || !d.flags.space_sign { "+Inf" } else { " Inf" }
        } else {
            "-Inf"
        };
        return write_special(text, d, out);
    }

    let negative = value.is_sign_negative();
    let abs = value.abs();
    let uppercase = d.verb.is_ascii_uppercase();

    let body = match d.verb {
        'e' | 'E' => float::exponent(abs, d.precision.unwrap_or(6), uppercase, d.flags.alt_form),
        'g' | 'G' => float::general(abs, d.precision, single, uppercase, d.flags.alt_form),
        _ => float::fixed(abs, d.precision.unwrap_or(6), d.flags.alt_form),
    };

    let sign = if negative {
        Some('-')
    } else if d.flags.force_sign {
        Some('+')
    } else if d.flags.space_sign {
        Some(' ')
    } else {
        None
    };

    let content_len = usize::from(sign.is_some()) + body.len();
    let pad_total = d.width.unwrap_or(0).saturating_sub(content_len);

    if !d.flags.left_justify && !d.flags.zero_pad {
        pad(out, ' ', pad_total);
    }
    if let Some(s) = sign {
        out.push(s);
    }
    if !d.flags.left_justify && d.flags.zero_pad {
        pad(out, '0', pad_total);
    }
    out.push_str(&body);
    if d.flags.left_justify {
        pad(out, ' ', pad_total);
    }
}

/// Render text under `d`; precision truncates, width pads (in chars).
fn write_str(s: &str, d: &Directive, out: &mut String) {
    let effective = match d.precision {
        Some(p) => match s.char_indices().nth(p) {
            Some((cut, _)) => &s[..cut],
            None => s,
        },
        None => s,
    };
    let pad_total = d.width.unwrap_or(0).saturating_sub(effective.chars().count());

    if !d.flags.left_justify {
        pad(out, ' ', pad_total);
    }
    out.push_str(effective);
    if d.flags.left_justify {
        pad(out, ' ', pad_total);
    }
}

/// NaN/Inf ignore zero padding.
fn write_special(text: &str, d: &Directive, out: &mut String) {
    let pad_total = d.width.unwrap_or(0).saturating_sub(text.len());
    if !d.flags.left_justify {
        pad(out, ' ', pad_total);
    }
    out.push_str(text);
    if d.flags.left_justify {
        pad(out, ' ', pad_total);
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn int_base(verb: char) -> (u64, bool) {
    match verb {
        'o' => (8, false),
        'x' => (16, false),
        'X' => (16, true),
        _ => (10, false),
    }
}

/// Render `value` in the given `base` into the END of `buf`.
/// Returns the number of digits written.
fn render_digits(mut value: u64, base: u64, uppercase: bool, buf: &mut [u8; 64]) -> usize {
    if value == 0 {
        buf[63] = b'0';
        return 1;
    }
    let alpha = if uppercase { b'A' } else { b'a' };
    let mut pos = 64;
    while value > 0 && pos > 0 {
        pos -= 1;
        let digit = (value % base) as u8;
        buf[pos] = if digit < 10 {
            b'0' + digit
        } else {
            alpha + (digit - 10)
        };
        value /= base;
    }
    64 - pos
}

fn alt_prefix(d: &Directive) -> &'static str {
    if !d.flags.alt_form {
        return "";
    }
    match d.verb {
        'o' => "0",
        'x' => "0x",
        'X' => "0X",
        _ => "",
    }
}

fn pad(out: &mut String, fill: char, count: usize) {
    out.extend(std::iter::repeat_n(fill, count));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: impl IntoIterator<Item = Value>) -> Vec<Value> {
        values.into_iter().collect()
    }

    #[test]
    fn arithmetic_line() {
        let out = render("%d + %d = %d", &args([2.into(), 3.into(), 5.into()]));
        assert_eq!(out, "2 + 3 = 5");
    }

    #[test]
    fn type_name_not_value() {
        assert_eq!(render("%T", &[Value::from(5i32)]), "int32");
        assert_eq!(
            render("%T %T %T %T", &args([Value::int(1), 1i8.into(), 1i32.into(), 1i64.into()])),
            "int int8 int32 int64"
        );
        assert_eq!(render("%T", &[Value::from("s")]), "string");
        assert_eq!(render("%T", &[Value::uint(1)]), "uint");
    }

    #[test]
    fn strings_and_greeting() {
        let out = render("hello, %s! Welcome.", &[Value::from("Paul")]);
        assert_eq!(out, "hello, Paul! Welcome.");
        let out = render(
            "Hi %s %s, you are %d years old!",
            &args(["Paul".into(), "Smith".into(), Value::int(29)]),
        );
        assert_eq!(out, "Hi Paul Smith, you are 29 years old!");
    }

    #[test]
    fn float_verbs() {
        assert_eq!(render("%f", &[Value::from(3.14159f64)]), "3.141590");
        assert_eq!(render("%f", &[Value::from(32.0f32)]), "32.000000");
        assert_eq!(render("%g", &[Value::from(32.0f64)]), "32");
        assert_eq!(render("%.2f", &[Value::from(2.675f64)]), "2.67");
        assert_eq!(render("%e", &[Value::from(1234.5f64)]), "1.234500e+03");
        assert_eq!(render("%8.3f|", &[Value::from(-1.5f64)]), "  -1.500|");
        assert_eq!(render("%08.3f", &[Value::from(-1.5f64)]), "-001.500");
        assert_eq!(render("%+g", &[Value::from(1.5f64)]), "+1.5");
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(render("%f", &[Value::from(f64::NAN)]), "NaN");
        assert_eq!(render("%v", &[Value::from(f64::INFINITY)]), "+Inf");
        assert_eq!(render("%g", &[Value::from(f64::NEG_INFINITY)]), "-Inf");
        assert_eq!(render("%06f", &[Value::from(f64::NAN)]), "   NaN");
    }

    #[test]
    fn default_verb_per_kind() {
        assert_eq!(render("%v", &[Value::from(-7i8)]), "-7");
        assert_eq!(render("%v", &[Value::from(u64::MAX)]), "18446744073709551615");
        assert_eq!(render("%v", &[Value::from(0.5f32)]), "0.5");
        assert_eq!(render("%v", &[Value::from(true)]), "true");
        assert_eq!(render("%v", &[Value::from("x")]), "x");
        assert_eq!(format_value(&Value::from(1.0e6f64)), "1e+06");
    }

    #[test]
    fn integer_flags_width_precision() {
        assert_eq!(render("%5d|", &[Value::from(42i32)]), "   42|");
        assert_eq!(render("%-5d|", &[Value::from(42i32)]), "42   |");
        assert_eq!(render("%05d", &[Value::from(-42i32)]), "-0042");
        assert_eq!(render("%.3d", &[Value::from(7i32)]), "007");
        assert_eq!(render("%.0d|", &[Value::from(0i32)]), "|");
        assert_eq!(render("%+d", &[Value::from(7i32)]), "+7");
        assert_eq!(render("%x %X %o", &args([255i32.into(), 255i32.into(), 8i32.into()])), "ff FF 10");
        assert_eq!(render("%#x %#o", &args([255i32.into(), 8i32.into()])), "0xff 010");
        assert_eq!(render("%x", &[Value::from(-42i64)]), "-2a");
        assert_eq!(render("%d", &[Value::from(i64::MIN)]), "-9223372036854775808");
    }

    #[test]
    fn string_width_and_precision() {
        assert_eq!(render("[%6s]", &[Value::from("abc")]), "[   abc]");
        assert_eq!(render("[%-6s]", &[Value::from("abc")]), "[abc   ]");
        assert_eq!(render("[%.2s]", &[Value::from("héllo")]), "[hé]");
        assert_eq!(render("[%8T]", &[Value::from(1u8)]), "[   uint8]");
    }

    #[test]
    fn wide_padding_is_not_truncated() {
        let out = render("%5000d", &[Value::int(1)]);
        assert_eq!(out.len(), 5000);
        assert!(out.ends_with(" 1"));
        let out = render("%-5000s|", &[Value::from("x")]);
        assert_eq!(out.len(), 5001);
        assert!(out.starts_with("x "));
        assert_eq!(render("%01000000d", &[Value::int(7)]).len(), 1_000_000);
    }

    #[test]
    fn oversized_width_or_precision_is_flagged() {
        assert_eq!(render("%1000001d", &[Value::int(1)]), "%!(BADWIDTH)");
        assert_eq!(render("%.1000001f", &[Value::from(1.5f64)]), "%!(BADPREC)");
        assert_eq!(
            render("%99999999999999999999999s|%d", &[Value::from("a"), Value::int(2)]),
            "%!(BADWIDTH)|2"
        );
    }

    #[test]
    fn mismatched_kinds_render_inline() {
        assert_eq!(render("%d", &[Value::from("hi")]), "%!d(string=hi)");
        assert_eq!(render("%s", &[Value::int(5)]), "%!s(int=5)");
        assert_eq!(render("%f", &[Value::from(5i32)]), "%!f(int32=5)");
        assert_eq!(render("%t", &[Value::from(1.5f64)]), "%!t(float64=1.5)");
        assert_eq!(render("%z", &[Value::from(true)]), "%!z(bool=true)");
    }

    #[test]
    fn argument_count_mismatch_renders_inline() {
        assert_eq!(render("%d and %d", &[Value::int(1)]), "1 and %!d(MISSING)");
        assert_eq!(
            render("%d", &args([Value::int(1), Value::int(2), "x".into()])),
            "1%!(EXTRA int=2, string=x)"
        );
        assert_eq!(render("no verbs", &[]), "no verbs");
        assert_eq!(render("tail %", &[]), "tail %!(NOVERB)");
        assert_eq!(render("100%%", &[]), "100%");
    }
}
