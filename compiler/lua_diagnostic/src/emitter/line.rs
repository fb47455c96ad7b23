//! Single-line emitter.

use std::io::{self, Write};

use crate::{Diagnostic, DEFAULT_FILENAME};

use super::DiagnosticEmitter;

/// Writes each diagnostic as `<file>:<line>:<column>: <message>\n`.
pub struct LineEmitter<W: Write> {
    writer: W,
    filename: String,
}

impl<W: Write> LineEmitter<W> {
    pub fn new(writer: W, filename: impl Into<String>) -> Self {
        LineEmitter {
            writer,
            filename: filename.into(),
        }
    }

    /// Emitter reporting against [`DEFAULT_FILENAME`].
    pub fn with_default_filename(writer: W) -> Self {
        Self::new(writer, DEFAULT_FILENAME)
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for LineEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        writeln!(self.writer, "{}", diagnostic.render(&self.filename))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
