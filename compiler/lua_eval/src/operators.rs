//! Binary operator kernel.
//!
//! One function per operator, each taking both operands by reference. There
//! is no coercion: arithmetic and ordering want numbers, `..` wants strings,
//! `and`/`or` want booleans. `evaluate_binary` is the dispatch entry point
//! used by the interpreter.

use lua_ir::BinaryOp;

use crate::errors::{binary_type_error, EvalResult, Verb};
use crate::{EvalError, Value};

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => sub(left, right),
        BinaryOp::Mul => mul(left, right),
        BinaryOp::Div => div(left, right),
        BinaryOp::Mod => rem(left, right),
        BinaryOp::Pow => pow(left, right),
        BinaryOp::Concat => concat(left, right),
        BinaryOp::Eq => equals(left, right),
        BinaryOp::NotEq => not_equals(left, right),
        BinaryOp::Lt => less_than(left, right),
        BinaryOp::LtEq => less_equal(left, right),
        BinaryOp::Gt => greater_than(left, right),
        BinaryOp::GtEq => greater_equal(left, right),
        BinaryOp::And => and(left, right),
        BinaryOp::Or => or(left, right),
    }
}

// Operand extraction

#[inline]
fn numbers(left: &Value, right: &Value, verb: Verb) -> Result<(f64, f64), EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(binary_type_error(verb, left, right)),
    }
}

#[inline]
fn booleans(left: &Value, right: &Value) -> Result<(bool, bool), EvalError> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok((*a, *b)),
        _ => Err(binary_type_error(Verb::Logic, left, right)),
    }
}

fn arithmetic(left: &Value, right: &Value, f: fn(f64, f64) -> f64) -> EvalResult {
    let (a, b) = numbers(left, right, Verb::Arithmetic)?;
    Ok(Value::Number(f(a, b)))
}

fn ordering(left: &Value, right: &Value, f: fn(f64, f64) -> bool) -> EvalResult {
    let (a, b) = numbers(left, right, Verb::Compare)?;
    Ok(Value::Bool(f(a, b)))
}

/// Unwrap a result the kernel itself produced as a boolean.
fn truth(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

// Arithmetic

pub fn add(left: &Value, right: &Value) -> EvalResult {
    arithmetic(left, right, |a, b| a + b)
}

pub fn sub(left: &Value, right: &Value) -> EvalResult {
    arithmetic(left, right, |a, b| a - b)
}

pub fn mul(left: &Value, right: &Value) -> EvalResult {
    arithmetic(left, right, |a, b| a * b)
}

/// IEEE division: a zero divisor yields an infinity or NaN, never an error.
pub fn div(left: &Value, right: &Value) -> EvalResult {
    arithmetic(left, right, |a, b| a / b)
}

/// Truncated remainder; the result takes the sign of the dividend.
pub fn rem(left: &Value, right: &Value) -> EvalResult {
    arithmetic(left, right, |a, b| a % b)
}

pub fn pow(left: &Value, right: &Value) -> EvalResult {
    arithmetic(left, right, f64::powf)
}

// Strings

pub fn concat(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => {
            let mut bytes = Vec::with_capacity(a.len() + b.len());
            bytes.extend_from_slice(a);
            bytes.extend_from_slice(b);
            Ok(Value::string(bytes))
        }
        _ => Err(binary_type_error(Verb::Concatenate, left, right)),
    }
}

// Comparison

/// Equality between values of the same type.
///
/// Values of different types are not unequal, they are an error.
#[allow(clippy::float_cmp, reason = "Language equality is exact")]
pub fn equals(left: &Value, right: &Value) -> EvalResult {
    let equal = match (left, right) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        _ => return Err(binary_type_error(Verb::Compare, left, right)),
    };
    Ok(Value::Bool(equal))
}

pub fn not_equals(left: &Value, right: &Value) -> EvalResult {
    let equal = equals(left, right)?;
    Ok(Value::Bool(!truth(&equal)))
}

pub fn less_than(left: &Value, right: &Value) -> EvalResult {
    ordering(left, right, |a, b| a < b)
}

pub fn greater_than(left: &Value, right: &Value) -> EvalResult {
    ordering(left, right, |a, b| a > b)
}

/// `less_than || equals`, both evaluated.
pub fn less_equal(left: &Value, right: &Value) -> EvalResult {
    let less = less_than(left, right)?;
    let equal = equals(left, right)?;
    Ok(Value::Bool(truth(&less) || truth(&equal)))
}

/// `greater_than || equals`, both evaluated.
pub fn greater_equal(left: &Value, right: &Value) -> EvalResult {
    let greater = greater_than(left, right)?;
    let equal = equals(left, right)?;
    Ok(Value::Bool(truth(&greater) || truth(&equal)))
}

// Logic

/// Boolean conjunction. Both operands are already evaluated; nothing is
/// short-circuited.
pub fn and(left: &Value, right: &Value) -> EvalResult {
    let (a, b) = booleans(left, right)?;
    Ok(Value::Bool(a && b))
}

pub fn or(left: &Value, right: &Value) -> EvalResult {
    let (a, b) = booleans(left, right)?;
    Ok(Value::Bool(a || b))
}
