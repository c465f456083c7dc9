//! Formatted input: typed values scanned out of a text stream.
//!
//! Targets are `&mut Value`. The target's current variant names the kind to
//! convert into; on success the target is overwritten, on failure it is
//! left untouched.
//!
//! - [`read_token`]: next whitespace-delimited token.
//! - [`read_line`]: rest of the current line, or the next one.
//! - [`read_formatted`]: input matched against a small `%` format.

pub mod input;

use std::io::BufRead;

use crate::convert::text_to_value;
use crate::error::ScanError;
use crate::value::{Kind, Value};

pub use input::{ScanInput, is_blank, is_space};

/// Read the next whitespace-delimited token into `target`.
///
/// Leading whitespace (including newlines) is skipped; the delimiter after
/// the token is left unread.
pub fn read_token<R: BufRead>(input: &mut ScanInput<R>, target: &mut Value) -> Result<(), ScanError> {
    input.skip_while(is_space)?;
    let bytes = input.take_while(|b| !is_space(b))?;
    if bytes.is_empty() {
        return Err(ScanError::EndOfInput);
    }
    let token = into_text(bytes)?;
    store(target, &token)
}

/// Read the rest of a line into `target`.
///
/// If a previous read stopped mid-line, blanks are skipped and, when the
/// line has nothing left, its terminator is consumed so the following line
/// is read. At the start of a line the content is taken verbatim, leading
/// blanks included, and an empty line yields `""`. The line is consumed
/// through its `\n`; the content (minus `\n` and a trailing `\r`) is
/// converted. A last line without a terminator is accepted.
pub fn read_line<R: BufRead>(input: &mut ScanInput<R>, target: &mut Value) -> Result<(), ScanError> {
    if !input.at_line_start() {
        input.skip_while(is_blank)?;
        if input.peek()? == Some(b'\n') {
            input.next_byte()?;
        }
    }
    if input.peek()?.is_none() {
        return Err(ScanError::EndOfInput);
    }
    let mut bytes = input.take_while(|b| b != b'\n')?;
    input.next_byte()?;
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    let line = into_text(bytes)?;
    store(target, &line)
}

/// Match the input against `format`, filling `targets` in order.
///
/// Format language:
/// - `%d`: optional sign and decimal digits (leading blanks skipped).
/// - `%s`, `%v`, `%f`/`%g`/`%e`, `%t`: a whitespace-delimited token.
/// - `%%`: a literal `%`.
/// - `\n`: optional blanks, then a newline (or end of input).
/// - other whitespace: any run of blanks, possibly empty.
/// - anything else: that exact character.
///
/// Returns the number of targets filled.
pub fn read_formatted<R: BufRead>(
    input: &mut ScanInput<R>,
    format: &str,
    targets: &mut [Value],
) -> Result<usize, ScanError> {
    let mut filled = 0;
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        match c {
            '%' => {
                let Some(verb) = chars.next() else {
                    return Err(ScanError::parse("verb after '%'", "end of format"));
                };
                if verb == '%' {
                    input.skip_while(is_blank)?;
                    expect_char(input, '%')?;
                    continue;
                }
                let Some(target) = targets.get_mut(filled) else {
                    return Err(ScanError::parse(format!("a target for %{verb}"), "none left"));
                };
                scan_verb(input, verb, target)?;
                filled += 1;
            }
            '\n' => {
                input.skip_while(is_blank)?;
                match input.next_byte()? {
                    Some(b'\n') | None => {}
                    Some(other) => {
                        return Err(ScanError::parse("newline", char::from(other).to_string()));
                    }
                }
            }
            c if c.is_whitespace() => input.skip_while(is_blank)?,
            c => expect_char(input, c)?,
        }
    }
    Ok(filled)
}

/// Scan one `%<verb>` into `target`.
fn scan_verb<R: BufRead>(
    input: &mut ScanInput<R>,
    verb: char,
    target: &mut Value,
) -> Result<(), ScanError> {
    let kind = target.kind();
    let fits = match verb {
        'd' => kind.is_integer(),
        's' => kind == Kind::String,
        'f' | 'g' | 'e' => kind.is_float(),
        't' => kind == Kind::Bool,
        'v' => true,
        _ => false,
    };
    if !fits {
        return Err(ScanError::parse(
            format!("a target accepted by %{verb}"),
            kind.name(),
        ));
    }

    input.skip_while(is_blank)?;
    let bytes = if verb == 'd' || (verb == 'v' && kind.is_integer()) {
        take_decimal(input)?
    } else {
        input.take_while(|b| !is_space(b))?
    };
    let has_digit = bytes.iter().any(u8::is_ascii_digit);
    if bytes.is_empty() || (kind.is_integer() && !has_digit) {
        return match input.peek()? {
            None => Err(ScanError::EndOfInput),
            Some(b) => {
                let mut found = String::from_utf8_lossy(&bytes).into_owned();
                found.push(char::from(b));
                Err(ScanError::parse(format!("{kind} for %{verb}"), found))
            }
        };
    }
    let token = into_text(bytes)?;
    store(target, &token)
}

/// Optional sign followed by decimal digits.
fn take_decimal<R: BufRead>(input: &mut ScanInput<R>) -> Result<Vec<u8>, ScanError> {
    let mut text = Vec::new();
    if let Some(sign @ (b'+' | b'-')) = input.peek()? {
        input.next_byte()?;
        text.push(sign);
    }
    text.extend(input.take_while(|b| b.is_ascii_digit())?);
    Ok(text)
}

fn expect_char<R: BufRead>(input: &mut ScanInput<R>, expected: char) -> Result<(), ScanError> {
    let mut encoded = [0u8; 4];
    for &want in expected.encode_utf8(&mut encoded).as_bytes() {
        match input.next_byte()? {
            Some(got) if got == want => {}
            Some(got) => {
                return Err(ScanError::parse(
                    format!("{expected:?}"),
                    char::from(got).to_string(),
                ));
            }
            None => return Err(ScanError::EndOfInput),
        }
    }
    Ok(())
}

fn into_text(bytes: Vec<u8>) -> Result<String, ScanError> {
    String::from_utf8(bytes).map_err(|err| {
        ScanError::parse(
            "utf-8 text",
            String::from_utf8_lossy(err.as_bytes()).into_owned(),
        )
    })
}

/// Convert `text` to the target's kind and store it.
fn store(target: &mut Value, text: &str) -> Result<(), ScanError> {
    let kind = target.kind();
    *target = text_to_value(text, kind).map_err(|_| ScanError::parse(kind.name(), text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> ScanInput<&[u8]> {
        ScanInput::new(text.as_bytes())
    }

    #[test]
    fn token_skips_leading_whitespace() {
        let mut inp = input("  \n\tPaul Smith");
        let mut name = Value::from("");
        read_token(&mut inp, &mut name).unwrap();
        assert_eq!(name, Value::from("Paul"));
        assert_eq!(inp.peek().unwrap(), Some(b' '));
    }

    #[test]
    fn token_converts_to_target_kind() {
        let mut inp = input("29 x");
        let mut age = Value::int(0);
        read_token(&mut inp, &mut age).unwrap();
        assert_eq!(age, Value::int(29));

        let mut n = Value::Int32(7);
        let err = read_token(&mut inp, &mut n).unwrap_err();
        assert!(matches!(err, ScanError::Parse { ref found, .. } if found == "x"));
        assert_eq!(n, Value::Int32(7));
    }

    #[test]
    fn token_at_end_of_input() {
        let mut inp = input("   \n");
        let mut s = Value::from("");
        assert!(matches!(read_token(&mut inp, &mut s), Err(ScanError::EndOfInput)));
    }

    #[test]
    fn line_after_token_reads_next_line() {
        let mut inp = input("Paul\nSmith Jr\r\nrest");
        let mut first = Value::from("");
        let mut last = Value::from("");
        read_token(&mut inp, &mut first).unwrap();
        read_line(&mut inp, &mut last).unwrap();
        assert_eq!(last, Value::from("Smith Jr"));
        assert_eq!(inp.peek().unwrap(), Some(b'r'));
    }

    #[test]
    fn line_keeps_leading_blanks_and_empty_lines() {
        let mut inp = input("  Smith Jr\n\nnext\n");
        let mut line = Value::from("");
        read_line(&mut inp, &mut line).unwrap();
        assert_eq!(line, Value::from("  Smith Jr"));
        read_line(&mut inp, &mut line).unwrap();
        assert_eq!(line, Value::from(""));
        read_line(&mut inp, &mut line).unwrap();
        assert_eq!(line, Value::from("next"));
    }

    #[test]
    fn line_after_token_skips_only_one_terminator() {
        let mut inp = input("Paul \n\nSmith\n");
        let mut first = Value::from("");
        let mut line = Value::from("x");
        read_token(&mut inp, &mut first).unwrap();
        read_line(&mut inp, &mut line).unwrap();
        assert_eq!(line, Value::from(""));
        read_line(&mut inp, &mut line).unwrap();
        assert_eq!(line, Value::from("Smith"));
    }

    #[test]
    fn line_without_terminator_at_eof() {
        let mut inp = input("42");
        let mut n = Value::Uint8(0);
        read_line(&mut inp, &mut n).unwrap();
        assert_eq!(n, Value::Uint8(42));
        assert!(matches!(read_line(&mut inp, &mut n), Err(ScanError::EndOfInput)));
    }

    #[test]
    fn line_conversion_mismatch() {
        let mut inp = input("twelve\n");
        let mut n = Value::int(0);
        assert!(matches!(read_line(&mut inp, &mut n), Err(ScanError::Parse { .. })));
    }

    #[test]
    fn formatted_decimal() {
        let mut inp = input("29\n");
        let mut targets = [Value::int(0)];
        assert_eq!(read_formatted(&mut inp, "%d", &mut targets).unwrap(), 1);
        assert_eq!(targets[0], Value::int(29));
        assert_eq!(inp.peek().unwrap(), Some(b'\n'));
    }

    #[test]
    fn formatted_decimal_stops_at_non_digit() {
        let mut inp = input("-12kg");
        let mut targets = [Value::Int16(0)];
        read_formatted(&mut inp, "%d", &mut targets).unwrap();
        assert_eq!(targets[0], Value::Int16(-12));
        assert_eq!(inp.peek().unwrap(), Some(b'k'));
    }

    #[test]
    fn formatted_literals_and_multiple_targets() {
        let mut inp = input("x=3, y=-4 name: Ann");
        let mut targets = [Value::int(0), Value::int(0), Value::from("")];
        let n = read_formatted(&mut inp, "x=%d, y=%d name: %s", &mut targets).unwrap();
        assert_eq!(n, 3);
        assert_eq!(targets, [Value::int(3), Value::int(-4), Value::from("Ann")]);
    }

    #[test]
    fn formatted_float_bool_and_percent() {
        let mut inp = input("2.5 true 50%");
        let mut targets = [Value::Float64(0.0), Value::Bool(false), Value::Uint(0)];
        let n = read_formatted(&mut inp, "%f %t %d%%", &mut targets).unwrap();
        assert_eq!(n, 3);
        assert_eq!(targets, [Value::Float64(2.5), Value::Bool(true), Value::uint(50)]);
    }

    #[test]
    fn formatted_mismatch_is_parse_error() {
        let mut inp = input("abc");
        let mut targets = [Value::int(0)];
        let err = read_formatted(&mut inp, "%d", &mut targets).unwrap_err();
        assert!(matches!(err, ScanError::Parse { ref found, .. } if found == "a"));

        let mut inp = input("a=1");
        let err = read_formatted(&mut inp, "b=%d", &mut targets).unwrap_err();
        assert!(matches!(err, ScanError::Parse { .. }));
    }

    #[test]
    fn formatted_out_of_range_is_parse_error() {
        let mut inp = input("300");
        let mut targets = [Value::Int8(0)];
        let err = read_formatted(&mut inp, "%d", &mut targets).unwrap_err();
        assert!(matches!(err, ScanError::Parse { ref expected, .. } if expected == "int8"));
        assert_eq!(targets[0], Value::Int8(0));
    }

    #[test]
    fn formatted_end_of_input() {
        let mut inp = input("  ");
        let mut targets = [Value::int(0)];
        assert!(matches!(
            read_formatted(&mut inp, "%d", &mut targets),
            Err(ScanError::EndOfInput)
        ));
    }

    #[test]
    fn formatted_newline_must_match() {
        let mut inp = input("1 2");
        let mut targets = [Value::int(0), Value::int(0)];
        let err = read_formatted(&mut inp, "%d\n%d", &mut targets).unwrap_err();
        assert!(matches!(err, ScanError::Parse { ref expected, .. } if expected == "newline"));
    }

    #[test]
    fn formatted_verb_target_mismatch() {
        let mut inp = input("5");
        let mut targets = [Value::from("")];
        assert!(matches!(
            read_formatted(&mut inp, "%d", &mut targets),
            Err(ScanError::Parse { .. })
        ));
        let mut none: [Value; 0] = [];
        assert!(matches!(
            read_formatted(&mut inp, "%d", &mut none),
            Err(ScanError::Parse { .. })
        ));
    }
}
