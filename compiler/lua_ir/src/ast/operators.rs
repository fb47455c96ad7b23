//! Binary and Unary Operators
//!
//! Precedence follows the Lua 5.3 reference manual (§3.4.8), from lowest to
//! highest: `or`, `and`, comparison, `..`, additive, multiplicative, unary,
//! `^`.

use std::fmt;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // String
    Concat,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Concat => "..",
            Self::Eq => "==",
            Self::NotEq => "~=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = binds more tightly.
    /// - 1: `or`
    /// - 2: `and`
    /// - 3: `<` `>` `<=` `>=` `~=` `==`
    /// - 4: `..`
    /// - 5: `+` `-`
    /// - 6: `*` `/` `%`
    /// - 8: `^` (unary operators sit at 7)
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq | Self::NotEq | Self::Eq => 3,
            Self::Concat => 4,
            Self::Add | Self::Sub => 5,
            Self::Mul | Self::Div | Self::Mod => 6,
            Self::Pow => 8,
        }
    }

    /// `..` and `^` group to the right; everything else groups to the left.
    pub const fn is_right_assoc(self) -> bool {
        matches!(self, Self::Concat | Self::Pow)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `not x`
    Not,
    /// `#x`
    Len,
}

impl UnaryOp {
    /// Binding power of every unary operator: tighter than `*`, looser
    /// than `^`, so `-2 ^ 2` is `-(2 ^ 2)`.
    pub const PRECEDENCE: u8 = 7;

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "not",
            Self::Len => "#",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
