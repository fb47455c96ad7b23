//! Expression Types

use std::fmt;
use std::mem;

use crate::{BinaryOp, Position, UnaryOp};

/// Expression node.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    /// Position of the first character of the expression.
    pub position: Position,
}

impl Expr {
    pub fn new(kind: ExprKind, position: Position) -> Self {
        Expr { kind, position }
    }
}

/// Dismantles the tree with an explicit stack. The derived recursive drop
/// would overflow on deeply nested input.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(&mut self.kind, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr.kind, &mut pending);
        }
    }
}

/// Move the direct children of `kind` onto `pending`, leaving leaves behind.
fn detach_children(kind: &mut ExprKind, pending: &mut Vec<Expr>) {
    match kind {
        ExprKind::Unary { operand, .. } => pending.push(take(operand)),
        ExprKind::Binary { left, right, .. } => {
            pending.push(take(left));
            pending.push(take(right));
        }
        ExprKind::Call { args, .. } => pending.append(args),
        ExprKind::Nil
        | ExprKind::Bool(_)
        | ExprKind::Number(_)
        | ExprKind::Str(_)
        | ExprKind::Name(_) => {}
    }
}

fn take(slot: &mut Expr) -> Expr {
    mem::replace(slot, Expr::new(ExprKind::Nil, Position::START))
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.position)
    }
}

/// Expression kinds.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// `nil`
    Nil,
    /// `true` / `false`
    Bool(bool),
    /// Numeric literal, already converted to a double.
    Number(f64),
    /// String literal, already unescaped.
    Str(Vec<u8>),
    /// Identifier read from the value table.
    Name(String),
    /// Unary operation.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Binary operation. Both sides are always evaluated, left first.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// `name(args...)`, resolved against the built-in function table.
    Call { name: String, args: Vec<Expr> },
}
