//! The statement loop and its fault channel.

use std::io;

use lua_diagnostic::{Diagnostic, DiagnosticEmitter, LineEmitter};
use lua_eval::{EvalError, Interpreter};
use lua_parse::Parser;
use tracing::{debug, info_span};

use crate::{Fault, RunConfig};

/// How a run ended, when the host itself did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every statement ran.
    Completed,
    /// A fault stopped the run; it has already been emitted.
    Faulted(Diagnostic),
}

/// Run `source` statement by statement until it ends or faults.
///
/// Each statement executes as soon as it is parsed, so a fault is located at
/// the lexer's position at that moment. The first fault is emitted and ends
/// the run. Only host I/O failures come back as `Err`.
pub fn run_source<E: DiagnosticEmitter>(
    source: &str,
    interp: &mut Interpreter,
    emitter: &mut E,
) -> io::Result<Outcome> {
    let _span = info_span!("run_source", len = source.len()).entered();
    let mut parser = Parser::new(source);
    let fault = loop {
        match parser.next_statement() {
            Ok(Some(stmt)) => match interp.execute(&stmt) {
                Ok(()) => {}
                Err(EvalError::Io(err)) => return Err(err),
                Err(err) => break Fault::from(err),
            },
            Ok(None) => return Ok(Outcome::Completed),
            Err(err) => break Fault::from(err),
        }
    };

    let diagnostic = Diagnostic::new(fault.category(), parser.position(), fault.to_string());
    debug!(category = %diagnostic.category, "fault");
    emitter.emit(&diagnostic)?;
    emitter.flush()?;
    Ok(Outcome::Faulted(diagnostic))
}

/// Read the configured input and run it, printing to stdout.
pub fn run(config: &RunConfig) -> io::Result<Outcome> {
    let source = config.read_source()?;
    let mut interp = Interpreter::new();
    let mut emitter = LineEmitter::new(io::stdout(), config.filename.as_str());
    run_source(&source, &mut interp, &mut emitter)
}
