#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use lua_ir::{BinaryOp, Expr, ExprKind, StmtKind};
use lua_lexer::LexError;

use super::*;

/// Fully parenthesized rendering, to make grouping visible.
fn show(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Nil => "nil".into(),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Number(n) => n.to_string(),
        ExprKind::Str(s) => format!("{:?}", String::from_utf8_lossy(s)),
        ExprKind::Name(name) => name.clone(),
        ExprKind::Unary { op, operand } => format!("({op} {})", show(operand)),
        ExprKind::Binary { left, op, right } => {
            format!("({} {op} {})", show(left), show(right))
        }
        ExprKind::Call { name, args } => {
            let args: Vec<_> = args.iter().map(show).collect();
            format!("{name}({})", args.join(", "))
        }
    }
}

fn expr(source: &str) -> String {
    show(&Parser::new(source).parse_expression().unwrap())
}

fn chunk_err(source: &str) -> String {
    Parser::new(source).parse_chunk().unwrap_err().to_string()
}

mod precedence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn multiplicative_binds_tighter_than_additive() {
        assert_eq!(expr("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(expr("1 * 2 - 3 % 4"), "((1 * 2) - (3 % 4))");
    }

    #[test]
    fn additive_is_left_associative() {
        assert_eq!(expr("1 - 2 - 3"), "((1 - 2) - 3)");
    }

    #[test]
    fn concat_and_pow_are_right_associative() {
        assert_eq!(expr("a .. b .. c"), "(a .. (b .. c))");
        assert_eq!(expr("2 ^ 3 ^ 2"), "(2 ^ (3 ^ 2))");
    }

    #[test]
    fn unary_binds_looser_than_pow() {
        assert_eq!(expr("-2 ^ 2"), "(- (2 ^ 2))");
        assert_eq!(expr("not a == b"), "((not a) == b)");
        assert_eq!(expr("#s .. t"), "((# s) .. t)");
    }

    #[test]
    fn logical_levels() {
        assert_eq!(expr("a or b and c"), "(a or (b and c))");
        assert_eq!(expr("a < b and c ~= d"), "((a < b) and (c ~= d))");
    }

    #[test]
    fn concat_binds_looser_than_arithmetic() {
        assert_eq!(expr("1 + 2 .. 3"), "((1 + 2) .. 3)");
    }

    #[test]
    fn parentheses_override() {
        assert_eq!(expr("(1 + 2) * 3"), "((1 + 2) * 3)");
    }
}

mod primaries {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literals() {
        assert_eq!(expr("nil"), "nil");
        assert_eq!(expr("true"), "true");
        assert_eq!(expr("'hi'"), "\"hi\"");
        assert_eq!(expr("0x10"), "16");
    }

    #[test]
    fn nested_calls() {
        assert_eq!(expr("type(type(1), 2 + x)"), "type(type(1), (2 + x))");
        assert_eq!(expr("f()"), "f()");
    }

    #[test]
    fn binary_position_is_left_operand() {
        let parsed = Parser::new("  a + b").parse_expression().unwrap();
        assert_eq!(parsed.position, Position::new(0, 2));
        let ExprKind::Binary { op, right, .. } = &parsed.kind else {
            panic!("expected binary");
        };
        assert_eq!(*op, BinaryOp::Add);
        assert_eq!(right.position, Position::new(0, 6));
    }
}

mod statements {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn call_statement() {
        let stmts = Parser::new("print(1, 'a')").parse_chunk().unwrap();
        assert_eq!(stmts.len(), 1);
        let StmtKind::Call { name, args } = &stmts[0].kind else {
            panic!("expected call");
        };
        assert_eq!(name, "print");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn multiple_assignment() {
        let stmts = Parser::new("a, b = 1").parse_chunk().unwrap();
        assert_eq!(
            stmts[0].kind,
            StmtKind::Assign {
                targets: vec!["a".into(), "b".into()],
                values: vec![Expr::new(ExprKind::Number(1.0), Position::new(0, 7))],
            }
        );
    }

    #[test]
    fn semicolons_are_optional_separators() {
        let stmts = Parser::new(";;a = 1; print(a);\nb = 2")
            .parse_chunk()
            .unwrap();
        assert_eq!(stmts.len(), 3);
        assert_eq!(stmts[2].position, Position::new(1, 0));
    }

    #[test]
    fn empty_chunk() {
        assert_eq!(Parser::new("  -- nothing\n").parse_chunk().unwrap(), vec![]);
    }

    #[test]
    fn statements_are_yielded_one_at_a_time() {
        let mut parser = Parser::new("a = 1\nb = $");
        assert!(parser.next_statement().unwrap().is_some());
        assert!(parser.next_statement().is_err());
    }

    #[test]
    fn position_trails_the_lookahead_token() {
        let mut parser = Parser::new("print(1 == \"1\")");
        parser.next_statement().unwrap();
        assert_eq!(parser.position(), Position::new(0, 14));
    }
}

mod nesting {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEPTH: usize = 200_000;

    #[test]
    fn deep_parentheses() {
        let source = format!("x = {}1{}", "(".repeat(DEPTH), ")".repeat(DEPTH));
        let stmts = Parser::new(&source).parse_chunk().unwrap();
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn long_right_associative_chain() {
        let source = format!("x = 'a'{}", " .. 'a'".repeat(DEPTH));
        assert!(Parser::new(&source).parse_chunk().is_ok());
    }

    #[test]
    fn deep_unary_chain() {
        let source = format!("x = {}true", "not ".repeat(DEPTH));
        assert!(Parser::new(&source).parse_chunk().is_ok());
    }

    #[test]
    fn unbalanced_deep_parentheses_fail_cleanly() {
        let source = format!("x = {}1", "(".repeat(DEPTH));
        assert_eq!(chunk_err(&source), "')' expected near <eof>");
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_close_paren() {
        assert_eq!(chunk_err("print(1"), "')' expected near <eof>");
        assert_eq!(chunk_err("x = (1 + 2"), "')' expected near <eof>");
    }

    #[test]
    fn bare_name_is_a_syntax_error() {
        assert_eq!(chunk_err("x"), "syntax error near <eof>");
        assert_eq!(chunk_err("x 1"), "syntax error near '1'");
    }

    #[test]
    fn statement_must_start_with_a_name() {
        assert_eq!(chunk_err("1 = 2"), "unexpected symbol near '1'");
        assert_eq!(chunk_err("while"), "unexpected symbol near 'while'");
    }

    #[test]
    fn missing_operand() {
        assert_eq!(chunk_err("x = 1 +"), "unexpected symbol near <eof>");
        assert_eq!(chunk_err("x = )"), "unexpected symbol near ')'");
    }

    #[test]
    fn assignment_targets_must_be_names() {
        assert_eq!(chunk_err("a, 1 = 2"), "'<name>' expected near '1'");
        assert_eq!(chunk_err("a, b 2"), "'=' expected near '2'");
    }

    #[test]
    fn lex_errors_pass_through() {
        let err = Parser::new("x = 3x").parse_chunk().unwrap_err();
        assert_eq!(err, ParseError::Lex(LexError::MalformedNumber("3x".into())));
    }
}
