//! Diagnostic Emitters
//!
//! The evaluator has a single output format: one `file:line:column: message`
//! line per fault. The trait keeps the driver independent of the sink.

mod line;

pub use line::LineEmitter;

use std::io;

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
}
