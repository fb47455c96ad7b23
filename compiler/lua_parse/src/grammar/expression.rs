//! Expression parsing.
//!
//! Precedence climbing over [`BinaryOp::precedence`]. A binary operator is
//! taken while its precedence is above the current limit; the right operand
//! is parsed with the operator's own level as the new limit, or one below it
//! for right-associative operators.

use lua_ir::{BinaryOp, Expr, ExprKind, UnaryOp};
use lua_lexer::TokenKind;
use lua_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::Caret => BinaryOp::Pow,
        TokenKind::DotDot => BinaryOp::Concat,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::TildeEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::And => BinaryOp::And,
        TokenKind::Or => BinaryOp::Or,
        _ => return None,
    };
    Some(op)
}

fn unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Not => Some(UnaryOp::Not),
        TokenKind::Hash => Some(UnaryOp::Len),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parse a full expression.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.sub_expression(0)
    }

    fn sub_expression(&mut self, limit: u8) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.climb(limit))
    }

    fn climb(&mut self, limit: u8) -> Result<Expr, ParseError> {
        let mut left = match unary_op(self.peek_kind()?) {
            Some(op) => {
                let token = self.advance()?;
                let operand = self.sub_expression(UnaryOp::PRECEDENCE)?;
                Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    token.position,
                )
            }
            None => self.simple_expression()?,
        };

        while let Some(op) = binary_op(self.peek_kind()?) {
            let precedence = op.precedence();
            if precedence <= limit {
                break;
            }
            self.advance()?;
            let right_limit = if op.is_right_assoc() {
                precedence - 1
            } else {
                precedence
            };
            let right = self.sub_expression(right_limit)?;
            let position = left.position;
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                position,
            );
        }

        Ok(left)
    }

    fn simple_expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.primary())
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.advance()?;
        let position = token.position;
        let kind = match token.kind {
            TokenKind::Nil => ExprKind::Nil,
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Number(n) => ExprKind::Number(n),
            TokenKind::Str(bytes) => ExprKind::Str(bytes),
            TokenKind::Name(name) => {
                if self.peek_kind()? == &TokenKind::LParen {
                    let args = self.call_args()?;
                    ExprKind::Call { name, args }
                } else {
                    ExprKind::Name(name)
                }
            }
            TokenKind::LParen => {
                let mut inner = self.parse_expression()?;
                self.expect(&TokenKind::RParen)?;
                inner.position = position;
                return Ok(inner);
            }
            _ => return Err(ParseError::UnexpectedSymbol { near: token.near() }),
        };
        Ok(Expr::new(kind, position))
    }

    /// `'(' [exprlist] ')'`
    pub(crate) fn call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect(&TokenKind::LParen)?;
        if self.eat(&TokenKind::RParen)? {
            return Ok(Vec::new());
        }
        let args = self.expr_list()?;
        self.expect(&TokenKind::RParen)?;
        Ok(args)
    }

    /// `expr { ',' expr }`
    pub(crate) fn expr_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expression()?];
        while self.eat(&TokenKind::Comma)? {
            exprs.push(self.parse_expression()?);
        }
        Ok(exprs)
    }
}
