use crate::domain::quote::{DeliveryOption, QuoteResult};
use crate::error::{QuoteError, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct QuoteBody<'a> {
    options: &'a [DeliveryOption],
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

/// Writes quote results and errors as the JSON bodies the service boundary
/// exposes: `{ "options": [...] }` on success, `{ "message": <key> }` on
/// failure.
pub struct QuoteWriter<W: Write> {
    writer: W,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_quote(&mut self, result: &QuoteResult) -> Result<()> {
        serde_json::to_writer(
            &mut self.writer,
            &QuoteBody {
                options: &result.options,
            },
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn write_error(&mut self, error: &QuoteError) -> Result<()> {
        serde_json::to_writer(
            &mut self.writer,
            &ErrorBody {
                message: error.message_key(),
            },
        )?;
        writeln!(self.writer)?;
        Ok(())
    }
}
