//! Lexical errors.

use thiserror::Error;

use crate::UnescapeError;

/// A token that could not be produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected symbol near '{0}'")]
    UnexpectedSymbol(String),
    #[error("malformed number near '{0}'")]
    MalformedNumber(String),
    #[error("unfinished string near '{0}'")]
    UnfinishedString(String),
    #[error("unfinished long comment near <eof>")]
    UnfinishedComment,
    /// A string literal with a bad escape; the message is the decoder's.
    #[error(transparent)]
    Escape(#[from] UnescapeError),
}
