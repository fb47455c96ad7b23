#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  \n\t "), vec![TokenKind::Eof]);
}

#[test]
fn call_statement_tokens() {
    assert_eq!(
        kinds("print(1+2)"),
        vec![
            TokenKind::Name("print".into()),
            TokenKind::LParen,
            TokenKind::Number(1.0),
            TokenKind::Plus,
            TokenKind::Number(2.0),
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn signs_after_numerals_are_operators() {
    assert_eq!(
        kinds("0x1e+1 2-1"),
        vec![
            TokenKind::Number(30.0),
            TokenKind::Plus,
            TokenKind::Number(1.0),
            TokenKind::Number(2.0),
            TokenKind::Minus,
            TokenKind::Number(1.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_and_reserved_words() {
    assert_eq!(
        kinds("nil true false and or not while"),
        vec![
            TokenKind::Nil,
            TokenKind::True,
            TokenKind::False,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Reserved("while".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn numbers_are_doubles() {
    assert_eq!(
        kinds("3 3.0 3.5e2 .5 0x10 1E-2"),
        vec![
            TokenKind::Number(3.0),
            TokenKind::Number(3.0),
            TokenKind::Number(350.0),
            TokenKind::Number(0.5),
            TokenKind::Number(16.0),
            TokenKind::Number(0.01),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn strings_are_unescaped() {
    assert_eq!(
        kinds(r#""a\tb" 'c\"d' "\x41""#),
        vec![
            TokenKind::Str(b"a\tb".to_vec()),
            TokenKind::Str(b"c\"d".to_vec()),
            TokenKind::Str(b"A".to_vec()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("a -- note\n--[[ long\ncomment ]] b"),
        vec![
            TokenKind::Name("a".into()),
            TokenKind::Name("b".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn minus_minus_is_a_comment_not_two_minuses() {
    assert_eq!(
        kinds("1 - -2 --3"),
        vec![
            TokenKind::Number(1.0),
            TokenKind::Minus,
            TokenKind::Minus,
            TokenKind::Number(2.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn token_text_is_source_slice() {
    let tokens = lex(r#"x = "a\n""#).unwrap();
    assert_eq!(tokens[2].text, r#""a\n""#);
}

mod positions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn position_starts_at_origin() {
        let lexer = Lexer::new("print(1)");
        assert_eq!(lexer.position(), Position::START);
    }

    #[test]
    fn position_is_last_char_of_last_token() {
        let mut lexer = Lexer::new("print(1)");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.position, Position::new(0, 0));
        assert_eq!(lexer.position(), Position::new(0, 4));
        lexer.next_token().unwrap();
        assert_eq!((lexer.line(), lexer.column()), (0, 5));
    }

    #[test]
    fn newlines_advance_line_and_reset_column() {
        let mut lexer = Lexer::new("a\n  bb");
        lexer.next_token().unwrap();
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.position, Position::new(1, 2));
        assert_eq!(lexer.position(), Position::new(1, 3));
    }

    #[test]
    fn eof_does_not_move_position() {
        let mut lexer = Lexer::new("x  \n\n");
        lexer.next_token().unwrap();
        let eof = lexer.next_token().unwrap();
        assert!(eof.is_eof());
        assert_eq!(lexer.position(), Position::new(0, 0));
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let mut lexer = Lexer::new("\"é\" x");
        lexer.next_token().unwrap();
        assert_eq!(lexer.position(), Position::new(0, 2));
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.position, Position::new(0, 4));
    }

    #[test]
    fn long_comment_lines_are_counted() {
        let mut lexer = Lexer::new("--[[\n\n]] y");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.position, Position::new(2, 3));
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unexpected_symbol() {
        assert_eq!(lex("a @ b"), Err(LexError::UnexpectedSymbol("@".into())));
    }

    #[test]
    fn unexpected_symbol_moves_position_onto_it() {
        let mut lexer = Lexer::new("ab $");
        lexer.next_token().unwrap();
        assert!(lexer.next_token().is_err());
        assert_eq!(lexer.position(), Position::new(0, 3));
    }

    #[test]
    fn malformed_numbers() {
        assert_eq!(lex("3x"), Err(LexError::MalformedNumber("3x".into())));
        assert_eq!(lex("1e"), Err(LexError::MalformedNumber("1e".into())));
        assert_eq!(lex("1.2.3"), Err(LexError::MalformedNumber("1.2.3".into())));
    }

    #[test]
    fn dangling_exponent_sign_is_part_of_the_numeral() {
        assert_eq!(lex("x = 1e+"), Err(LexError::MalformedNumber("1e+".into())));
        assert_eq!(lex("2.5E-"), Err(LexError::MalformedNumber("2.5E-".into())));
        assert_eq!(lex("1e+x"), Err(LexError::MalformedNumber("1e+x".into())));
    }

    #[test]
    fn unfinished_string() {
        assert_eq!(
            lex("x = \"abc\ny"),
            Err(LexError::UnfinishedString("\"abc".into()))
        );
    }

    #[test]
    fn unfinished_long_comment() {
        assert_eq!(lex("--[[ never closed"), Err(LexError::UnfinishedComment));
    }

    #[test]
    fn bad_escape_reports_decoder_message() {
        let err = lex(r#"print("\q")"#).unwrap_err();
        assert_eq!(err.to_string(), r"invalid escape sequence '\q'");
    }

    #[test]
    fn bad_escape_position_is_end_of_literal() {
        let mut lexer = Lexer::new(r#"  "\q""#);
        assert!(lexer.next_token().is_err());
        assert_eq!(lexer.position(), Position::new(0, 5));
    }
}
