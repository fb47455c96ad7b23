//! Diagnostic reporting for the fault channel.
//!
//! Every fault the evaluator raises ends up as exactly one line:
//!
//! ```text
//! ./main.lua:1:15: attempt to compare number with string
//! ```
//!
//! The position is the lexer's position when the fault surfaced, not the
//! position of the offending operand. The file name is configurable and
//! defaults to [`DEFAULT_FILENAME`].

mod diagnostic;
pub mod emitter;
mod filename;

pub use diagnostic::{Category, Diagnostic};
pub use emitter::{DiagnosticEmitter, LineEmitter};
pub use filename::{display_filename, DEFAULT_FILENAME};
