// src/domain/position.rs
use std::fmt;

use crate::domain::error::NoteError;

/// A cursor location in the editing surface's native addressing scheme:
/// 1-based line, 0-based character column.
///
/// The persistence layer never stores positions; it converts them to flat
/// character offsets on save and back on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.line, self.column)
    }
}

/// Count of characters (Unicode scalar values) from the buffer start to
/// `position`.
///
/// A column equal to the line length is valid, the cursor sits before the
/// newline; the position just past the final character of the buffer is
/// valid too. Anything further fails with a range error so callers can skip
/// the offending region.
pub fn to_offset(text: &str, position: Position) -> Result<usize, NoteError> {
    let out_of_bounds = || NoteError::PositionOutOfBounds {
        line: position.line,
        column: position.column,
    };

    if position.line == 0 {
        return Err(out_of_bounds());
    }

    let mut offset = 0;
    for (idx, line) in text.split('\n').enumerate() {
        if idx + 1 == position.line {
            let line_len = line.chars().count();
            if position.column > line_len {
                return Err(out_of_bounds());
            }
            return Ok(offset + position.column);
        }
        offset += line.chars().count() + 1;
    }
    Err(out_of_bounds())
}

/// Inverse of [`to_offset`]. An `offset` equal to the total character count
/// maps to the end of the buffer; larger offsets fail with a range error.
pub fn to_position(text: &str, offset: usize) -> Result<Position, NoteError> {
    let mut line = 1;
    let mut column = 0;
    let mut seen = 0;

    for ch in text.chars() {
        if seen == offset {
            return Ok(Position::new(line, column));
        }
        seen += 1;
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }

    if seen == offset {
        Ok(Position::new(line, column))
    } else {
        Err(NoteError::OffsetOutOfBounds { offset, len: seen })
    }
}
