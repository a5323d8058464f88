//! Interactive input acquisition.
//!
//! [`Console`] drives the prompt/read exchange over any `BufRead` and
//! `Write` pair, one line per field.

use std::io::{BufRead, Write};

use crate::error::{PricerError, PricerResult};
use crate::quote::{BondQuote, Field};

/// Parses a finite real number from a line of text.
///
/// Surrounding whitespace is ignored. Empty text, trailing garbage and
/// non-finite spellings (`inf`, `NaN`) are rejected.
pub fn parse_real(field: Field, text: &str) -> PricerResult<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PricerError::input_parse(field, trimmed)),
    }
}

/// Prompt/read exchange over a reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console that gives up on the first malformed line.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_attempts: 1,
        }
    }

    /// Sets how many lines each field may consume before the parse error
    /// is returned. Values below one are treated as one.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Prompts for and reads the three inputs into `quote`.
    ///
    /// The quote is only written once all three fields parsed; on error it
    /// is left untouched and no price is computed.
    pub fn read_inputs(&mut self, quote: &mut BondQuote) -> PricerResult<()> {
        let mut values = [0.0; 3];
        for (slot, field) in values.iter_mut().zip(Field::ALL) {
            *slot = self.read_field(field)?;
        }
        for (value, field) in values.into_iter().zip(Field::ALL) {
            quote.set(field, value);
        }
        Ok(())
    }

    /// Prompts for and reads one field.
    pub fn read_field(&mut self, field: Field) -> PricerResult<f64> {
        let mut attempt = 1;
        loop {
            self.write_str(field.prompt())?;

            // Raw bytes: invalid UTF-8 is malformed input, not an I/O failure.
            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(PricerError::UnexpectedEof { field });
            }
            let line = String::from_utf8_lossy(&buf);

            match parse_real(field, &line) {
                Ok(value) => {
                    tracing::debug!(%field, value, "read input");
                    return Ok(value);
                }
                Err(_) if attempt < self.max_attempts => {
                    tracing::warn!(%field, attempt, input = line.trim(), "rejected input");
                    writeln!(self.writer, "Invalid number '{}', try again.", line.trim())?;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Writes text and flushes so prompts appear before the read blocks.
    pub fn write_str(&mut self, text: &str) -> PricerResult<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
