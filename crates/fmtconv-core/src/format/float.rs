//! Digit generation for floating-point verbs.
//!
//! All functions take a finite, non-negative value; sign, padding, and the
//! non-finite spellings are handled by the renderer. Rust's `{:e}` / `{}`
//! machinery produces correctly rounded and shortest round-trip digits;
//! this module only reshapes them.

/// Shortest-form `%g` switches to exponent notation at this decimal exponent.
const SHORTEST_EXP_LIMIT: i32 = 6;

/// `%f`: fixed-point with `precision` fractional digits.
pub(crate) fn fixed(abs: f64, precision: usize, alt_form: bool) -> String {
    let mut s = format!("{abs:.precision$}");
    if precision == 0 && alt_form {
        s.push('.');
    }
    s
}

/// `%e`: `d.ddde±XX` with `precision` fractional digits.
pub(crate) fn exponent(abs: f64, precision: usize, uppercase: bool, alt_form: bool) -> String {
    let sci = format!("{abs:.precision$e}");
    let (mantissa, exp) = split_exponent(&sci);
    let mut out = String::with_capacity(mantissa.len() + 5);
    out.push_str(mantissa);
    if precision == 0 && alt_form {
        out.push('.');
    }
    push_exponent(&mut out, exp, uppercase);
    out
}

/// `%g`: shortest round-trip digits when `precision` is `None`, otherwise
/// `precision` significant digits.
///
/// `single` selects the shortest form that round-trips through `f32`.
pub(crate) fn general(
    abs: f64,
    precision: Option<usize>,
    single: bool,
    uppercase: bool,
    alt_form: bool,
) -> String {
    let Some(p) = precision else {
        let sci = if single {
            format!("{:e}", abs as f32)
        } else {
            format!("{abs:e}")
        };
        let (mantissa, exp) = split_exponent(&sci);
        if !(-4..SHORTEST_EXP_LIMIT).contains(&exp) {
            let mut out = mantissa.to_string();
            push_exponent(&mut out, exp, uppercase);
            return out;
        }
        return if single {
            format!("{}", abs as f32)
        } else {
            format!("{abs}")
        };
    };

    let p = p.max(1);
    let sci = format!("{abs:.prec$e}", prec = p - 1);
    let (mantissa, exp) = split_exponent(&sci);
    if exp < -4 || exp >= p as i32 {
        let mut out = mantissa.to_string();
        if !alt_form {
            strip_trailing_zeros(&mut out);
        }
        push_exponent(&mut out, exp, uppercase);
        out
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        let mut out = format!("{abs:.decimals$}");
        if !alt_form {
            strip_trailing_zeros(&mut out);
        }
        out
    }
}

/// Split Rust's `{:e}` output (`1.5e-7`) into mantissa and exponent.
fn split_exponent(sci: &str) -> (&str, i32) {
    match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

/// Append `e±XX` (at least two exponent digits).
fn push_exponent(out: &mut String, exp: i32, uppercase: bool) {
    out.push(if uppercase { 'E' } else { 'e' });
    out.push(if exp < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}", exp.unsigned_abs()));
}

/// Remove trailing zeros after the decimal point.
fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}
