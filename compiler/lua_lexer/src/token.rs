//! Cooked tokens handed to the parser.

use std::fmt;

use lua_ir::Position;

/// Token kinds with literal payloads already decoded.
#[derive(Clone, PartialEq, Debug)]
pub enum TokenKind {
    Name(String),
    Number(f64),
    Str(Vec<u8>),

    // Keywords
    Nil,
    True,
    False,
    And,
    Or,
    Not,
    /// A Lua keyword this subset does not support.
    Reserved(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Hash,
    DotDot,
    EqEq,
    TildeEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Assign,

    // Delimiters
    LParen,
    RParen,
    Comma,
    Semicolon,

    Eof,
}

impl TokenKind {
    /// Human-readable name used in "'x' expected" messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Name(_) => "<name>",
            TokenKind::Number(_) => "<number>",
            TokenKind::Str(_) => "<string>",
            TokenKind::Nil => "nil",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Reserved(_) => "<keyword>",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Caret => "^",
            TokenKind::Hash => "#",
            TokenKind::DotDot => "..",
            TokenKind::EqEq => "==",
            TokenKind::TildeEq => "~=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Assign => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Eof => "<eof>",
        }
    }
}

/// A token with its source text and the position of its first character.
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn eof(position: Position) -> Self {
        Token::new(TokenKind::Eof, "", position)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The `near ...` fragment of an error message: the quoted source text,
    /// or `<eof>` at end of input.
    pub fn near(&self) -> String {
        if self.is_eof() {
            "<eof>".to_string()
        } else {
            format!("'{}'", self.text)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            f.write_str("<eof>")
        } else {
            f.write_str(&self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_quotes_source_text() {
        let tok = Token::new(TokenKind::Name("abc".into()), "abc", Position::START);
        assert_eq!(tok.near(), "'abc'");
    }

    #[test]
    fn near_eof_is_unquoted() {
        assert_eq!(Token::eof(Position::START).near(), "<eof>");
    }

    #[test]
    fn describe_matches_spelling() {
        assert_eq!(TokenKind::RParen.describe(), ")");
        assert_eq!(TokenKind::TildeEq.describe(), "~=");
    }
}
