//! Parse errors.

use lua_lexer::LexError;
use thiserror::Error;

/// Why the token stream does not form a statement.
///
/// `near` is already formatted: a quoted token (`'x'`) or `<eof>`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("unexpected symbol near {near}")]
    UnexpectedSymbol { near: String },
    #[error("'{expected}' expected near {near}")]
    Expected { expected: &'static str, near: String },
    /// A name that is neither called nor assigned.
    #[error("syntax error near {near}")]
    Syntax { near: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_follow_lua_wording() {
        let err = ParseError::Expected {
            expected: ")",
            near: "<eof>".into(),
        };
        assert_eq!(err.to_string(), "')' expected near <eof>");
        let err = ParseError::UnexpectedSymbol { near: "'+'".into() };
        assert_eq!(err.to_string(), "unexpected symbol near '+'");
    }
}
