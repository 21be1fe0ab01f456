// src/domain/mod.rs
pub mod error;
pub mod note;
pub mod placeholder;
pub mod position;

pub use error::NoteError;
pub use note::{Appearance, NoteRecord, Span, StyleKind, TagInfo};
pub use position::Position;
