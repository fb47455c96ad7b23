//! Statement parsing.

use lua_ir::{Stmt, StmtKind};
use lua_lexer::TokenKind;
use tracing::debug;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse the next statement, or `None` at end of input.
    ///
    /// Stray `;` separators are skipped.
    pub fn next_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        while self.eat(&TokenKind::Semicolon)? {}
        if self.peek_kind()? == &TokenKind::Eof {
            return Ok(None);
        }

        let token = self.advance()?;
        let position = token.position;
        let TokenKind::Name(name) = token.kind else {
            return Err(ParseError::UnexpectedSymbol { near: token.near() });
        };

        let kind = match self.peek_kind()? {
            TokenKind::LParen => {
                let args = self.call_args()?;
                StmtKind::Call { name, args }
            }
            TokenKind::Assign | TokenKind::Comma => self.assignment(name)?,
            _ => {
                let near = self.peek()?.near();
                return Err(ParseError::Syntax { near });
            }
        };

        let stmt = Stmt::new(kind, position);
        debug!(position = %stmt.position, "parsed statement");
        Ok(Some(stmt))
    }

    /// `Name { ',' Name } '=' exprlist`, with the first name already consumed.
    fn assignment(&mut self, first: String) -> Result<StmtKind, ParseError> {
        let mut targets = vec![first];
        while self.eat(&TokenKind::Comma)? {
            let (name, _) = self.expect_name()?;
            targets.push(name);
        }
        self.expect(&TokenKind::Assign)?;
        let values = self.expr_list()?;
        Ok(StmtKind::Assign { targets, values })
    }
}
