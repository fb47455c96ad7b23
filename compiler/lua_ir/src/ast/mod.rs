//! AST node types.
//!
//! - `operators`: binary and unary operators with precedence
//! - `expr`: expression nodes
//! - `stmt`: statement nodes

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Stmt, StmtKind};
