//! Error types shared by the scanner and the converter.
//!
//! Lossy numeric reinterpretation (width truncation, sign reinterpretation,
//! float precision loss) is deterministic and never produces any of these.

use thiserror::Error;

/// Why a text -> number conversion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionFailure {
    /// Empty input, stray characters, or a malformed literal.
    #[error("invalid syntax")]
    Syntax,
    /// Well-formed literal outside the target kind's range.
    #[error("value out of range")]
    Range,
}

/// A text -> number conversion failure.
///
/// Displays as `text_to_integer: parsing "abc": invalid syntax`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{op}: parsing {input:?}: {failure}")]
pub struct ConversionError {
    /// Name of the conversion that failed.
    pub op: &'static str,
    /// The offending input text.
    pub input: String,
    pub failure: ConversionFailure,
}

impl ConversionError {
    pub(crate) fn syntax(op: &'static str, input: &str) -> Self {
        Self {
            op,
            input: input.to_string(),
            failure: ConversionFailure::Syntax,
        }
    }

    pub(crate) fn range(op: &'static str, input: &str) -> Self {
        Self {
            op,
            input: input.to_string(),
            failure: ConversionFailure::Range,
        }
    }
}

/// Failure of a console read operation.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input did not have the shape the read operation asked for.
    #[error("parse error: expected {expected}, found {found:?}")]
    Parse { expected: String, found: String },
    /// Input ended before a complete token, line, or pattern.
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    pub(crate) fn parse(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::Parse {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
