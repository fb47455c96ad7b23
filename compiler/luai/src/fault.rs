//! The single fault type the driver reports.

use lua_diagnostic::Category;
use lua_eval::EvalError;
use lua_parse::ParseError;
use thiserror::Error;

/// Anything that stops a run early.
#[derive(Debug, Error)]
pub enum Fault {
    /// Lexing or parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A statement failed while executing.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Fault {
    pub fn category(&self) -> Category {
        match self {
            Fault::Parse(ParseError::Lex(_)) => Category::Lexical,
            Fault::Parse(_) => Category::Syntax,
            Fault::Eval(_) => Category::Runtime,
        }
    }
}
