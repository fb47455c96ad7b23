//! Lua IR - syntax tree types shared by the parser and the evaluator.
//!
//! This crate contains:
//! - `Position` for lexer coordinates used by diagnostics
//! - Operators (`BinaryOp`, `UnaryOp`) with precedence information
//! - Expression and statement nodes
//!
//! # Design Philosophy
//!
//! The language has no nested scopes or function definitions, so the tree is
//! plain owned data (`Box<Expr>`) rather than an arena. Statements are handed
//! to the evaluator one at a time as soon as they are parsed.

pub mod ast;
mod position;

pub use ast::{BinaryOp, Expr, ExprKind, Stmt, StmtKind, UnaryOp};
pub use position::Position;
