// src/ports/render.rs
use std::path::PathBuf;

use crate::domain::{placeholder, NoteRecord};
use crate::util::text::preview_line;

/// Renders note records for the terminal.
///
/// The editing surface turns `[[IMG:<path>]]` tokens into real pictures;
/// on a terminal they become `[image: <path>]` markers instead, with a
/// footer pointing at the directory relative paths resolve against.
#[derive(Debug)]
pub struct TextPresenter {
    image_dir: PathBuf,
}

impl TextPresenter {
    pub fn with_image_dir(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
        }
    }

    /// One listing row: right-aligned id, pin marker, then the note's name
    /// or, when it has none, the first line of its body.
    pub fn list_line(&self, id: &str, record: &NoteRecord) -> String {
        let marker = if record.appearance.is_pinned { '*' } else { ' ' };
        let label = match &record.name {
            Some(name) => name.clone(),
            None => preview_line(&record.text),
        };
        format!("{id:>8} {marker} {label}")
    }

    /// Full note view: header line, colors, then the body with image
    /// tokens substituted.
    pub fn render(&self, id: &str, record: &NoteRecord) -> String {
        let mut header = format!("Note {id}");
        if let Some(name) = &record.name {
            header.push_str(&format!(": {name}"));
        }
        if record.appearance.is_pinned {
            header.push_str(" [pinned]");
        }

        let colors = format!(
            "colors: header {}, text {} on {}",
            record.appearance.header_bg, record.appearance.text_fg, record.appearance.text_bg,
        );

        let body = placeholder::map_tokens(&record.text, |path| format!("[image: {path}]"));

        let mut out = format!("{header}\n{colors}\n\n{body}\n");
        if !placeholder::image_refs(&record.text).is_empty() {
            out.push_str(&format!("\nimages in {}\n", self.image_dir.display()));
        }
        out
    }
}
