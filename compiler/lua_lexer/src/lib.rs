//! Lexer for the luai evaluator.
//!
//! Two layers:
//! - `raw_token`: a `logos` DFA that recognizes token shapes
//! - [`Lexer`]: cooks literals (numbers, unescaped strings), skips comments
//!   and tracks the position of the most recently consumed character
//!
//! The position is what the fault channel reports, so it only advances when a
//! token is actually pulled. Reaching end of input does not move it.

mod escape;
mod lex_error;
mod raw_token;
mod token;
mod unescape;

use std::ops::Range;

use logos::Logos;
use lua_ir::Position;
use tracing::trace;

use raw_token::RawToken;

pub use escape::escape;
pub use lex_error::LexError;
pub use token::{Token, TokenKind};
pub use unescape::{unescape, UnescapeError};

/// Pull-based lexer over a borrowed source string.
pub struct Lexer<'src> {
    raw: logos::Lexer<'src, RawToken>,
    source: &'src str,
    /// Byte offset up to which positions have been accounted for.
    scanned: usize,
    /// Position of the next unconsumed character.
    next: Position,
    /// Position of the most recently consumed character.
    last: Position,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            raw: RawToken::lexer(source),
            source,
            scanned: 0,
            next: Position::START,
            last: Position::START,
        }
    }

    /// 0-indexed position of the most recently consumed character.
    ///
    /// `Position::START` until the first token is pulled.
    #[inline]
    pub fn position(&self) -> Position {
        self.last
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.last.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.last.column
    }

    /// Produce the next token, or `TokenKind::Eof` once input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let Some(result) = self.raw.next() else {
                return Ok(Token::eof(self.next));
            };
            let span = self.raw.span();
            self.consume_to(span.start);
            let start = self.next;

            let raw = match result {
                Ok(raw) => raw,
                Err(()) => return Err(self.classify_error(span)),
            };
            if raw == RawToken::Comment {
                self.consume_to(span.end);
                continue;
            }

            let kind = self.cook(raw)?;
            let span = self.raw.span();
            self.consume_to(span.end);
            let token = Token::new(kind, &self.source[span], start);
            trace!(kind = ?token.kind, position = %token.position, "token");
            return Ok(token);
        }
    }

    /// Advance the position bookkeeping over `source[scanned..end]`.
    fn consume_to(&mut self, end: usize) {
        if end <= self.scanned {
            return;
        }
        for c in self.source[self.scanned..end].chars() {
            self.last = self.next;
            if c == '\n' {
                self.next = Position::new(self.next.line.saturating_add(1), 0);
            } else {
                self.next.column = self.next.column.saturating_add(1);
            }
        }
        self.scanned = end;
    }

    /// Convert a raw token into a cooked kind, decoding literals.
    fn cook(&mut self, raw: RawToken) -> Result<TokenKind, LexError> {
        let slice = self.raw.slice();
        let kind = match raw {
            RawToken::Ident => TokenKind::Name(slice.to_string()),
            RawToken::Reserved => TokenKind::Reserved(slice.to_string()),
            RawToken::Decimal | RawToken::Hex => {
                self.reject_number_suffix(raw == RawToken::Decimal)?;
                let value = if raw == RawToken::Hex {
                    Some(parse_hex(&slice[2..]))
                } else {
                    slice.parse::<f64>().ok()
                };
                match value {
                    Some(value) => TokenKind::Number(value),
                    None => return Err(LexError::MalformedNumber(slice.to_string())),
                }
            }
            RawToken::Str => {
                self.consume_to(self.raw.span().end);
                let body = &slice[1..slice.len() - 1];
                TokenKind::Str(unescape(body)?)
            }
            RawToken::And => TokenKind::And,
            RawToken::Or => TokenKind::Or,
            RawToken::Not => TokenKind::Not,
            RawToken::Nil => TokenKind::Nil,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Hash => TokenKind::Hash,
            RawToken::DotDot => TokenKind::DotDot,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::TildeEq => TokenKind::TildeEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Assign => TokenKind::Assign,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Comment => unreachable!("comments are skipped before cooking"),
        };
        Ok(kind)
    }

    /// A numeral immediately followed by name characters or a dot (`3x`,
    /// `1e`, `1.2.3`) is one malformed number, not two tokens. With
    /// `exponent_signs`, a sign right after `e` or `E` belongs to the numeral
    /// too, so `1e+` is malformed rather than `1e` then `+`.
    fn reject_number_suffix(&mut self, exponent_signs: bool) -> Result<(), LexError> {
        let remainder = self.raw.remainder();
        let mut prev = self.raw.slice().chars().next_back();
        let mut suffix = remainder.len();
        for (i, c) in remainder.char_indices() {
            let continues = c.is_ascii_alphanumeric()
                || c == '_'
                || c == '.'
                || (exponent_signs && matches!(c, '+' | '-') && matches!(prev, Some('e' | 'E')));
            if !continues {
                suffix = i;
                break;
            }
            prev = Some(c);
        }
        if suffix == 0 {
            return Ok(());
        }
        self.raw.bump(suffix);
        let span = self.raw.span();
        self.consume_to(span.end);
        Err(LexError::MalformedNumber(self.source[span].to_string()))
    }

    fn classify_error(&mut self, span: Range<usize>) -> LexError {
        let rest = &self.source[span.start..];
        if rest.starts_with("--") {
            self.consume_to(self.source.len());
            return LexError::UnfinishedComment;
        }
        if rest.starts_with('"') || rest.starts_with('\'') {
            let len = rest.find('\n').unwrap_or(rest.len());
            self.consume_to(span.start + len);
            return LexError::UnfinishedString(rest[..len].to_string());
        }
        let symbol = rest.chars().next().map(String::from).unwrap_or_default();
        self.consume_to(span.start + symbol.len());
        LexError::UnexpectedSymbol(symbol)
    }
}

/// Hex digits to a double. Wide literals lose precision instead of failing.
fn parse_hex(digits: &str) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0.0, |acc, d| acc * 16.0 + f64::from(d))
}

/// Lex a whole source string (for tests and tooling).
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests;
