// src/application/mod.rs
pub mod lifecycle;
pub mod markup;
pub mod surface;

pub use lifecycle::NoteLifecycle;
pub use markup::{apply_spans, extract_spans, extract_tag_info};
pub use surface::NoteSurface;
