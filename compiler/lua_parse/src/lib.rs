//! Parser for the luai evaluator.
//!
//! Recursive descent over a pull-based [`Lexer`]. The parser yields one
//! statement at a time through [`Parser::next_statement`], so the driver can
//! execute each statement before the next one is lexed. This keeps the
//! lexer position meaningful when a runtime fault is reported.
//!
//! # Grammar
//!
//! ```text
//! chunk     := { stat [';'] }
//! stat      := Name '(' [exprlist] ')'
//!            | Name { ',' Name } '=' exprlist
//! exprlist  := expr { ',' expr }
//! expr      := (simpleexp | unop expr) { binop expr }
//! simpleexp := nil | true | false | Number | String | Name
//!            | Name '(' [exprlist] ')' | '(' expr ')'
//! ```

mod error;
mod grammar;

use lua_ir::{Position, Stmt};
use lua_lexer::{Lexer, Token, TokenKind};

pub use error::ParseError;

/// Parser state.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    /// One-token lookahead; `None` until peeked.
    lookahead: Option<Token>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            lookahead: None,
        }
    }

    /// Position of the most recently consumed source character.
    ///
    /// Includes the lookahead token, which the lexer has already consumed.
    pub fn position(&self) -> Position {
        self.lexer.position()
    }

    /// Parse every remaining statement (for tests and tooling).
    pub fn parse_chunk(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while let Some(stmt) = self.next_statement()? {
            stmts.push(stmt);
        }
        Ok(stmts)
    }

    // ===== Token access =====

    fn peek(&mut self) -> Result<&Token, ParseError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(self.lookahead.insert(token))
    }

    fn peek_kind(&mut self) -> Result<&TokenKind, ParseError> {
        Ok(&self.peek()?.kind)
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => Ok(self.lexer.next_token()?),
        }
    }

    /// Consume the next token if it matches `kind` exactly.
    fn eat(&mut self, kind: &TokenKind) -> Result<bool, ParseError> {
        if self.peek_kind()? == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if self.peek_kind()? == kind {
            self.advance()
        } else {
            let near = self.peek()?.near();
            Err(ParseError::Expected {
                expected: kind.describe(),
                near,
            })
        }
    }

    fn expect_name(&mut self) -> Result<(String, Position), ParseError> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::Name(name) => Ok((name, token.position)),
            _ => Err(ParseError::Expected {
                expected: "<name>",
                near: token.near(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
