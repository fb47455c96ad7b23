//! Raw tokens produced by logos, before literals are cooked.

use logos::Logos;

/// Raw token from logos.
///
/// Literal payloads are not computed here; [`crate::Lexer`] converts the
/// slice once it knows the token is well formed.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
pub(crate) enum RawToken {
    /// `--` line comment or `--[[ ... ]]` long comment. Never reaches the parser.
    #[token("--", skip_comment)]
    Comment,

    // === Keywords ===
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    Not,
    #[token("nil")]
    Nil,
    #[token("true")]
    True,
    #[token("false")]
    False,

    /// Lua keywords with no meaning in this subset.
    #[token("break")]
    #[token("do")]
    #[token("else")]
    #[token("elseif")]
    #[token("end")]
    #[token("for")]
    #[token("function")]
    #[token("goto")]
    #[token("if")]
    #[token("in")]
    #[token("local")]
    #[token("repeat")]
    #[token("return")]
    #[token("then")]
    #[token("until")]
    #[token("while")]
    Reserved,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // === Literals ===
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    Decimal,
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Hex,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Str,

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("#")]
    Hash,
    #[token("..")]
    DotDot,
    #[token("==")]
    EqEq,
    #[token("~=")]
    TildeEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("=")]
    Assign,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
}

/// Extend a `--` match over the rest of the comment.
///
/// Returns `false` (a lexing error) for a long comment with no closing `]]`.
fn skip_comment(lex: &mut logos::Lexer<RawToken>) -> bool {
    let rest = lex.remainder();
    if let Some(body) = rest.strip_prefix("[[") {
        match body.find("]]") {
            Some(end) => {
                lex.bump(end + 4);
                true
            }
            None => false,
        }
    } else {
        let len = rest.find('\n').unwrap_or(rest.len());
        lex.bump(len);
        true
    }
}
