//! Console context: an input source and an output sink passed explicitly.
//!
//! [`Console::stdio`] wires the process streams; [`Console::new`] takes any
//! reader/writer pair, which is how tests substitute in-memory buffers.
//! Reads flush pending output first so prompts are visible before the
//! caller blocks on input.

use std::io::{self, BufRead, Write};

use crate::error::ScanError;
use crate::format::{format_value, render};
use crate::scan::{self, ScanInput};
use crate::value::Value;

#[derive(Debug)]
pub struct Console<R, W> {
    input: ScanInput<R>,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process stdin/stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            input: ScanInput::new(reader),
            output: writer,
        }
    }

    // --- output ---

    /// Write `text` verbatim.
    pub fn emit(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    /// Write `text` followed by a newline.
    pub fn emit_line(&mut self, text: &str) -> io::Result<()> {
        self.emit(text)?;
        self.emit("\n")
    }

    /// Write the default renderings of `values`, space separated, then a
    /// newline.
    pub fn emit_values(&mut self, values: &[Value]) -> io::Result<()> {
        let line = values
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(" ");
        self.emit_line(&line)
    }

    /// Render `template` with `args` and write the result.
    pub fn printf(&mut self, template: &str, args: &[Value]) -> io::Result<()> {
        self.emit(&render(template, args))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    // --- input ---

    /// See [`scan::read_token`].
    pub fn read_token(&mut self, target: &mut Value) -> Result<(), ScanError> {
        self.flush()?;
        scan::read_token(&mut self.input, target)
    }

    /// See [`scan::read_line`].
    pub fn read_line(&mut self, target: &mut Value) -> Result<(), ScanError> {
        self.flush()?;
        scan::read_line(&mut self.input, target)
    }

    /// See [`scan::read_formatted`].
    pub fn read_formatted(&mut self, format: &str, targets: &mut [Value]) -> Result<usize, ScanError> {
        self.flush()?;
        scan::read_formatted(&mut self.input, format, targets)
    }

    // --- access ---

    pub fn writer(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input.into_inner(), self.output)
    }
}
