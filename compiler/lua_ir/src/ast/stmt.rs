//! Statement Types

use std::fmt;

use crate::{Expr, Position};

/// Statement node.
#[derive(Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub position: Position,
}

impl Stmt {
    pub fn new(kind: StmtKind, position: Position) -> Self {
        Stmt { kind, position }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.position)
    }
}

/// Statement kinds.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// A call evaluated for its side effects; the result is discarded.
    Call { name: String, args: Vec<Expr> },

    /// `a, b = e1, e2`
    ///
    /// All values are evaluated before any target is stored. Missing values
    /// assign nil; surplus values are evaluated and dropped.
    Assign { targets: Vec<String>, values: Vec<Expr> },
}
