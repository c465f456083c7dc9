//! Byte-at-a-time lookahead over a buffered reader.

use std::io::{self, BufRead};

/// Space, tab, CR, LF, VT, FF.
#[must_use]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Whitespace that does not end a line.
#[must_use]
pub const fn is_blank(b: u8) -> bool {
    is_space(b) && b != b'\n'
}

/// One byte of lookahead over `R`. Every read blocks until the reader has
/// data or reports end of input.
#[derive(Debug)]
pub struct ScanInput<R> {
    reader: R,
    at_line_start: bool,
}

impl<R: BufRead> ScanInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            at_line_start: true,
        }
    }

    /// True before anything is consumed and right after a `\n`.
    #[must_use]
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    fn consume(&mut self, b: u8) {
        self.reader.consume(1);
        self.at_line_start = b == b'\n';
    }

    /// Next byte without consuming it; `None` at end of input.
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    /// Consume and return the next byte.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let b = self.peek()?;
        if let Some(b) = b {
            self.consume(b);
        }
        Ok(b)
    }

    /// Consume bytes while `pred` holds.
    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) -> io::Result<()> {
        while let Some(b) = self.peek()? {
            if !pred(b) {
                break;
            }
            self.consume(b);
        }
        Ok(())
    }

    /// Consume and collect bytes while `pred` holds.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> io::Result<Vec<u8>> {
        let mut taken = Vec::new();
        while let Some(b) = self.peek()? {
            if !pred(b) {
                break;
            }
            taken.push(b);
            self.consume(b);
        }
        Ok(taken)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
