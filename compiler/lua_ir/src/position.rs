//! Lexer coordinates.

use std::fmt;

/// 0-indexed line and column of a consumed source character.
///
/// Columns count characters, not bytes. Diagnostics report both values
/// 1-indexed; see [`Position::one_based`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The position reported before any character has been consumed.
    pub const START: Position = Position { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Line and column as shown to users.
    #[inline]
    pub const fn one_based(self) -> (u32, u32) {
        (self.line.saturating_add(1), self.column.saturating_add(1))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.one_based();
        write!(f, "{line}:{column}")
    }
}
