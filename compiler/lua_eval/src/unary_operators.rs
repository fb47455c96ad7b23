//! Unary operator kernel.

use lua_ir::UnaryOp;

use crate::errors::{unary_type_error, EvalResult, Verb};
use crate::Value;

/// Evaluate a unary operation on an already-evaluated operand.
pub fn evaluate_unary(operand: &Value, op: UnaryOp) -> EvalResult {
    match op {
        UnaryOp::Neg => negate(operand),
        UnaryOp::Not => not(operand),
        UnaryOp::Len => len(operand),
    }
}

pub fn negate(operand: &Value) -> EvalResult {
    match operand {
        Value::Number(n) => Ok(Value::Number(-n)),
        _ => Err(unary_type_error(Verb::Arithmetic, operand)),
    }
}

/// Boolean negation. Only booleans are accepted; `not nil` is an error.
pub fn not(operand: &Value) -> EvalResult {
    match operand {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        _ => Err(unary_type_error(Verb::Logic, operand)),
    }
}

/// Length of a string in bytes.
#[expect(
    clippy::cast_precision_loss,
    reason = "Strings longer than 2^53 bytes cannot be built"
)]
pub fn len(operand: &Value) -> EvalResult {
    match operand {
        Value::Str(bytes) => Ok(Value::Number(bytes.len() as f64)),
        _ => Err(unary_type_error(Verb::Length, operand)),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod negation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn numbers() {
            assert_eq!(negate(&Value::Number(5.0)).unwrap(), Value::Number(-5.0));
            assert_eq!(negate(&Value::Number(-5.0)).unwrap(), Value::Number(5.0));
        }

        #[test]
        fn zero_flips_sign() {
            let Value::Number(n) = negate(&Value::Number(0.0)).unwrap() else {
                panic!("expected number");
            };
            assert_eq!(n.to_bits(), (-0.0_f64).to_bits());
        }

        #[test]
        fn strings_are_not_coerced() {
            let err = negate(&Value::string("1")).unwrap_err();
            assert_eq!(
                err.to_string(),
                "attempt to perform arithmetic on a string value"
            );
        }
    }

    mod logical_not {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn booleans() {
            assert_eq!(not(&Value::Bool(true)).unwrap(), Value::Bool(false));
            assert_eq!(not(&Value::Bool(false)).unwrap(), Value::Bool(true));
        }

        #[test]
        fn nil_is_rejected() {
            let err = not(&Value::Nil).unwrap_err();
            assert_eq!(
                err.to_string(),
                "attempt to perform logical operation on a nil value"
            );
        }
    }

    mod length {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn counts_bytes() {
            assert_eq!(len(&Value::string("hello")).unwrap(), Value::Number(5.0));
            assert_eq!(len(&Value::string("")).unwrap(), Value::Number(0.0));
            assert_eq!(len(&Value::string("é")).unwrap(), Value::Number(2.0));
        }

        #[test]
        fn numbers_have_no_length() {
            let err = len(&Value::Number(3.0)).unwrap_err();
            assert_eq!(err.to_string(), "attempt to get length of a number value");
        }
    }

    #[test]
    fn dispatch() {
        assert_eq!(
            evaluate_unary(&Value::Number(1.0), UnaryOp::Neg).unwrap(),
            Value::Number(-1.0)
        );
        assert_eq!(
            evaluate_unary(&Value::Bool(true), UnaryOp::Not).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            evaluate_unary(&Value::string("ab"), UnaryOp::Len).unwrap(),
            Value::Number(2.0)
        );
    }
}
