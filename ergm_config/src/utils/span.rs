//! Source location tracking for configuration files
//!
//! Every token and every parsed term carries a span so errors can point at
//! the offending line and column.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line, column, and byte offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Byte offset from start of input (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// The starting position (offset 0, line 1, column 1)
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }

    /// Advance position by one character
    pub fn advance(self, ch: char) -> Self {
        match ch {
            '\n' => Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 1,
            },
            _ => Self {
                offset: self.offset + ch.len_utf8(),
                line: self.line,
                column: self.column + 1,
            },
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "Span start must not be after end"
        );
        Self { start, end }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Merge two spans into one covering both
    pub fn merge(self, other: Self) -> Self {
        let start = if self.start.offset <= other.start.offset {
            self.start
        } else {
            other.start
        };

        let end = if self.end.offset >= other.end.offset {
            self.end
        } else {
            other.end
        };

        Self { start, end }
    }

    /// Get the source text for this span from the input
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start.offset..self.end.offset]
    }

    /// Placeholder span for values that never came from a file (defaults, merged terms)
    pub fn dummy() -> Self {
        Self {
            start: Position::start(),
            end: Position::start(),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A value with an associated source span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_advance_tracks_lines() {
        let pos = Position::start().advance('a').advance('\n').advance('b');
        assert_eq!(pos, Position::new(3, 2, 2));
    }

    #[test]
    fn test_span_merge_and_slice() {
        let text = "Arc = 1.0";
        let a = Span::new(Position::new(0, 1, 1), Position::new(3, 1, 4));
        let b = Span::new(Position::new(6, 1, 7), Position::new(9, 1, 10));
        let merged = a.merge(b);

        assert_eq!(merged.slice(text), "Arc = 1.0");
        assert_eq!(b.merge(a), merged);
    }

    #[test]
    fn test_span_display() {
        let single = Span::new(Position::new(0, 3, 2), Position::new(4, 3, 6));
        assert_eq!(single.to_string(), "3:2-6");

        let multi = Span::new(Position::new(0, 1, 1), Position::new(20, 2, 4));
        assert_eq!(multi.to_string(), "1:1-2:4");
    }
}
