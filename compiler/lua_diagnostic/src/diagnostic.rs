//! The diagnostic value produced by the fault channel.

use std::fmt;

use lua_ir::Position;

/// Which stage raised the fault.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    /// Malformed token or string escape.
    Lexical,
    /// Token stream does not form a statement.
    Syntax,
    /// Operator or call failed while evaluating.
    Runtime,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Lexical => "lexical",
            Category::Syntax => "syntax",
            Category::Runtime => "runtime",
        })
    }
}

/// A single fault, located at a lexer position.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub category: Category,
    pub position: Position,
    pub message: String,
}

impl Diagnostic {
    pub fn new(category: Category, position: Position, message: impl Into<String>) -> Self {
        Diagnostic {
            category,
            position,
            message: message.into(),
        }
    }

    /// Render as `<file>:<line>:<column>: <message>` with 1-indexed
    /// coordinates.
    pub fn render(&self, filename: &str) -> String {
        format!("{filename}:{}: {}", self.position, self.message)
    }
}
