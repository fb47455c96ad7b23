//! Statement execution and expression evaluation.

use lua_ir::{Expr, ExprKind, Stmt, StmtKind};
use lua_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{
    evaluate_binary, evaluate_unary, stdout_handler, Environment, EvalError, EvalResult,
    SharedPrintHandler, Value,
};

/// Tree-walking interpreter over one global environment.
pub struct Interpreter {
    env: Environment,
    print: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(print: SharedPrintHandler) -> Self {
        Interpreter {
            env: Environment::new(),
            print,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// Execute one statement.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        trace!(position = %stmt.position, "execute");
        match &stmt.kind {
            StmtKind::Call { name, args } => {
                self.call(name, args)?;
            }
            StmtKind::Assign { targets, values } => {
                // Every right-hand side runs before any target is written.
                let values = values
                    .iter()
                    .map(|expr| self.eval(expr))
                    .collect::<Result<Vec<_>, _>>()?;
                let mut values = values.into_iter();
                for target in targets {
                    let value = values.next().unwrap_or_default();
                    debug!(%target, %value, "assign");
                    self.env.set(target.as_str(), value);
                }
            }
        }
        Ok(())
    }

    /// Evaluate an expression. Operands are evaluated left to right, and
    /// both operands of every binary operator are always evaluated.
    pub fn eval(&self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Nil => Ok(Value::Nil),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Str(bytes) => Ok(Value::string(bytes)),
            ExprKind::Name(name) => Ok(self.env.get(name)),
            ExprKind::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                evaluate_unary(&operand, *op)
            }
            ExprKind::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(&left, &right, *op)
            }
            ExprKind::Call { name, args } => self.call(name, args),
        }
    }

    fn call(&self, name: &str, args: &[Expr]) -> EvalResult {
        let args = args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<Result<Vec<_>, _>>()?;
        self.env.call_builtin(name, &args, &self.print)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
