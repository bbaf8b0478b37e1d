//! Source locations.

use std::fmt;

/// A 1-based `(line, column)` position in a feature file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns this location moved to `column` on the same line.
    ///
    /// A column of `0` keeps the current column, which lets callers pass the
    /// column of a span that may not have one.
    #[must_use]
    pub const fn with_column(self, column: u32) -> Self {
        if column == 0 {
            self
        } else {
            Self {
                line: self.line,
                column,
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.line, self.column)
    }
}
