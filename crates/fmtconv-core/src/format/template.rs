//! Template parsing.
//!
//! A template is literal text interleaved with `%` directives:
//! `%` [flags `-+ #0`] [width] [`.` precision] verb. Any character is
//! accepted as a verb here; the renderer decides what an unknown verb does.

// ---------------------------------------------------------------------------
// Directive types
// ---------------------------------------------------------------------------

/// Largest width or precision a directive may carry. Larger values render as
/// `%!(BADWIDTH)` / `%!(BADPREC)`.
pub const MAX_WIDTH: usize = 1_000_000;

/// Flags parsed from a directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub left_justify: bool, // '-'
    pub force_sign: bool,   // '+'
    pub space_sign: bool,   // ' '
    pub alt_form: bool,     // '#'
    pub zero_pad: bool,     // '0'
}

/// A parsed placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub verb: char,
}

impl Directive {
    /// A bare `%<verb>` with no flags, width, or precision.
    #[must_use]
    pub const fn bare(verb: char) -> Self {
        Self {
            flags: Flags {
                left_justify: false,
                force_sign: false,
                space_sign: false,
                alt_form: false,
                zero_pad: false,
            },
            width: None,
            precision: None,
            verb,
        }
    }
}

/// A piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text emitted verbatim.
    Literal(&'a str),
    /// `%%`.
    Percent,
    /// A placeholder consuming the next argument.
    Directive(Directive),
    /// A `%` at the very end of the template.
    NoVerb,
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    /// Split `text` into literal runs and directives.
    #[must_use]
    pub fn parse(text: &'a str) -> Self {
        let bytes = text.as_bytes();
        let len = bytes.len();
        let mut segments = Vec::new();
        let mut pos = 0;

        while pos < len {
            let start = pos;
            while pos < len && bytes[pos] != b'%' {
                pos += 1;
            }
            if pos > start {
                segments.push(Segment::Literal(&text[start..pos]));
            }
            if pos >= len {
                break;
            }
            // Skip the '%'.
            pos += 1;
            if pos >= len {
                segments.push(Segment::NoVerb);
                break;
            }
            if bytes[pos] == b'%' {
                segments.push(Segment::Percent);
                pos += 1;
                continue;
            }
            match parse_directive(&text[pos..]) {
                Some((directive, consumed)) => {
                    segments.push(Segment::Directive(directive));
                    pos += consumed;
                }
                None => {
                    // Flags or width ran into the end of the template.
                    segments.push(Segment::NoVerb);
                    break;
                }
            }
        }

        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Number of argument-consuming placeholders.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|seg| matches!(seg, Segment::Directive(_)))
            .count()
    }
}

/// Parse one directive from the text following a `%`.
///
/// Returns `(directive, bytes_consumed)`, or `None` if the text ends before
/// a verb.
fn parse_directive(text: &str) -> Option<(Directive, usize)> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    // --- flags ---
    let mut flags = Flags::default();
    while pos < len {
        match bytes[pos] {
            b'-' => flags.left_justify = true,
            b'+' => flags.force_sign = true,
            b' ' => flags.space_sign = true,
            b'#' => flags.alt_form = true,
            b'0' => flags.zero_pad = true,
            _ => break,
        }
        pos += 1;
    }
    // '+' overrides ' '; '-' overrides '0'.
    if flags.force_sign {
        flags.space_sign = false;
    }
    if flags.left_justify {
        flags.zero_pad = false;
    }

    // --- width ---
    let start = pos;
    while pos < len && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let width = (pos > start).then(|| parse_decimal(&bytes[start..pos]));

    // --- precision ---
    let precision = if pos < len && bytes[pos] == b'.' {
        pos += 1;
        let start = pos;
        while pos < len && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        Some(parse_decimal(&bytes[start..pos]))
    } else {
        None
    };

    // --- verb ---
    let verb = text[pos..].chars().next()?;
    pos += verb.len_utf8();

    Some((
        Directive {
            flags,
            width,
            precision,
            verb,
        },
        pos,
    ))
}

fn parse_decimal(digits: &[u8]) -> usize {
    let mut result = 0_usize;
    for &d in digits {
        result = result
            .saturating_mul(10)
            .saturating_add((d - b'0') as usize);
    }
    result
}
