//! Evaluation errors.
//!
//! Every fault the kernel or a built-in can raise is a variant here. Host I/O
//! failures ride the same channel as [`EvalError::Io`] so `?` works across
//! `print`, but the driver treats them differently from language faults.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::Value;

/// Result of evaluating an expression or calling an operator.
pub type EvalResult = Result<Value, EvalError>;

/// What an operator was trying to do, as it reads in a type-error message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    /// `+ - * / % ^` and unary `-`
    Arithmetic,
    /// `..`
    Concatenate,
    /// `== ~= < <= > >=`
    Compare,
    /// `#`
    Length,
    /// `and or not`
    Logic,
}

impl Verb {
    pub const fn as_str(self) -> &'static str {
        match self {
            Verb::Arithmetic => "perform arithmetic on",
            Verb::Concatenate => "concatenate",
            Verb::Compare => "compare",
            Verb::Length => "get length of",
            Verb::Logic => "perform logical operation on",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fault raised while evaluating.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Binary operands of different types.
    #[error("attempt to {verb} {left} with {right}")]
    TypeMismatch {
        verb: Verb,
        left: &'static str,
        right: &'static str,
    },
    /// Binary operands share a type the operator does not accept.
    #[error("attempt to {verb} two {type_name} values")]
    InvalidOperands { verb: Verb, type_name: &'static str },
    /// Unary operand of the wrong type.
    #[error("attempt to {verb} a {type_name} value")]
    InvalidOperand { verb: Verb, type_name: &'static str },
    #[error("attempt to call a nil value (global '{0}')")]
    CallNil(String),
    #[error("bad argument #{position} to '{function}' ({message})")]
    BadArgument {
        position: usize,
        function: &'static str,
        message: &'static str,
    },
    /// Writing program output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Type error for a binary operator.
///
/// Picks the "two T values" wording when both operands share a type.
#[cold]
pub fn binary_type_error(verb: Verb, left: &Value, right: &Value) -> EvalError {
    let (left, right) = (left.type_name(), right.type_name());
    if left == right {
        EvalError::InvalidOperands {
            verb,
            type_name: left,
        }
    } else {
        EvalError::TypeMismatch { verb, left, right }
    }
}

/// Type error for a unary operator.
#[cold]
pub fn unary_type_error(verb: Verb, operand: &Value) -> EvalError {
    EvalError::InvalidOperand {
        verb,
        type_name: operand.type_name(),
    }
}

#[cold]
pub fn call_nil(name: &str) -> EvalError {
    EvalError::CallNil(name.to_string())
}

#[cold]
pub fn bad_argument(position: usize, function: &'static str, message: &'static str) -> EvalError {
    EvalError::BadArgument {
        position,
        function,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mismatch_names_both_types() {
        let err = binary_type_error(Verb::Compare, &Value::Number(1.0), &Value::string("1"));
        assert_eq!(err.to_string(), "attempt to compare number with string");
    }

    #[test]
    fn same_type_uses_two_values_wording() {
        let err = binary_type_error(Verb::Arithmetic, &Value::Nil, &Value::Nil);
        assert_eq!(err.to_string(), "attempt to perform arithmetic on two nil values");
    }

    #[test]
    fn unary_wording() {
        let err = unary_type_error(Verb::Length, &Value::Bool(true));
        assert_eq!(err.to_string(), "attempt to get length of a boolean value");
    }

    #[test]
    fn call_and_argument_wording() {
        assert_eq!(
            call_nil("foo").to_string(),
            "attempt to call a nil value (global 'foo')"
        );
        assert_eq!(
            bad_argument(1, "type", "value expected").to_string(),
            "bad argument #1 to 'type' (value expected)"
        );
    }
}
