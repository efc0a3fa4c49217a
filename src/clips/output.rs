use crate::clips::error::ClipError;
use csv::{Writer, WriterBuilder};
use std::io::Write;

/// Sink for record identifiers. Each call appends one single-column CSV row.
pub struct IdWriter<W: Write> {
    destination: &'static str,
    wtr: Writer<W>,
}

impl<W: Write> IdWriter<W> {
    pub fn new(destination: &'static str, w: W) -> Self {
        // better to be explicit in case library defaults change
        let wtr = WriterBuilder::new()
            .delimiter(b',')
            .has_headers(false)
            .from_writer(w);
        IdWriter { destination, wtr }
    }

    /// Appends `id` as its own row.
    pub fn write(&mut self, id: &str) -> Result<(), ClipError> {
        self.wtr
            .write_record(&[id])
            .map_err(|source| ClipError::Write {
                destination: self.destination,
                source,
            })
    }

    /// Flushes everything written so far and hands back the underlying writer.
    pub fn finish(self) -> Result<W, ClipError> {
        let destination = self.destination;
        self.wtr
            .into_inner()
            .map_err(|err| ClipError::Close {
                destination,
                source: err.into_error(),
            })
    }
}
