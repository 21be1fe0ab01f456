// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Position {line}.{column} is outside the buffer")]
    PositionOutOfBounds { line: usize, column: usize },
    #[error("Offset {offset} is outside the buffer of length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },
    #[error("Notes file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Notes file encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
