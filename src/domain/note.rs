// src/domain/note.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{DEFAULT_HEADER_BG, DEFAULT_TEXT_BG, DEFAULT_TEXT_FG};

/// The closed set of text styles a note can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    Bold,
    Italic,
    BoldItalic,
    Underline,
    Strikethrough,
}

impl StyleKind {
    /// Every style the persistence layer knows about, in the order the
    /// save path extracts them.
    pub const ALL: [StyleKind; 5] = [
        StyleKind::Bold,
        StyleKind::Italic,
        StyleKind::BoldItalic,
        StyleKind::Underline,
        StyleKind::Strikethrough,
    ];

    /// The name used in the backing file and by the editing surface.
    pub fn name(&self) -> &'static str {
        match self {
            StyleKind::Bold => "bold",
            StyleKind::Italic => "italic",
            StyleKind::BoldItalic => "bold_italic",
            StyleKind::Underline => "underline",
            StyleKind::Strikethrough => "strikethrough",
        }
    }

    pub fn from_name(name: &str) -> Option<StyleKind> {
        StyleKind::ALL.iter().copied().find(|s| s.name() == name)
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A half-open `[start, end)` character-offset interval carrying one style.
///
/// Serializes as the two-element array the backing file stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span(pub usize, pub usize);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span(start, end)
    }

    pub fn start(&self) -> usize {
        self.0
    }

    pub fn end(&self) -> usize {
        self.1
    }

    /// Degenerate and inverted spans are neither extracted nor applied.
    pub fn is_well_formed(&self) -> bool {
        self.1 > self.0
    }
}

/// Styled-span lists keyed by style, the serializable half of rich text.
///
/// Deserialization drops unknown style names instead of failing the record:
/// one stray key in a hand-edited file must not cost the user the whole
/// store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagInfo(BTreeMap<StyleKind, Vec<Span>>);

impl TagInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, style: StyleKind, spans: Vec<Span>) {
        self.0.insert(style, spans);
    }

    /// Spans recorded for `style`; empty when the style is absent.
    pub fn spans(&self, style: StyleKind) -> &[Span] {
        self.0.get(&style).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleKind, &[Span])> + '_ {
        self.0.iter().map(|(style, spans)| (*style, spans.as_slice()))
    }

    /// True when no style carries any span.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|spans| spans.is_empty())
    }
}

impl<'de> Deserialize<'de> for TagInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Vec<Span>>::deserialize(deserializer)?;
        let known = raw
            .into_iter()
            .filter_map(|(name, spans)| StyleKind::from_name(&name).map(|style| (style, spans)))
            .collect();
        Ok(TagInfo(known))
    }
}

/// Window colors and pin state, persisted flat inside the note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    #[serde(default = "default_header_bg")]
    pub header_bg: String,
    #[serde(default = "default_text_bg")]
    pub text_bg: String,
    #[serde(default = "default_text_fg")]
    pub text_fg: String,
    #[serde(default)]
    pub is_pinned: bool,
}

fn default_header_bg() -> String {
    DEFAULT_HEADER_BG.to_string()
}
fn default_text_bg() -> String {
    DEFAULT_TEXT_BG.to_string()
}
fn default_text_fg() -> String {
    DEFAULT_TEXT_FG.to_string()
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            header_bg: default_header_bg(),
            text_bg: default_text_bg(),
            text_fg: default_text_fg(),
            is_pinned: false,
        }
    }
}

/// One persisted note: body text with inline `[[IMG:<path>]]` tokens,
/// appearance, and the styled spans needed to rebuild the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub appearance: Appearance,
    #[serde(default)]
    pub tag_info: TagInfo,
    /// User-assigned label. The save path preserves an existing one and
    /// never invents a new one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NoteRecord {
    pub fn new(text: impl Into<String>, appearance: Appearance, tag_info: TagInfo) -> Self {
        Self {
            text: text.into(),
            appearance,
            tag_info,
            name: None,
        }
    }

    /// Whitespace-only bodies are never persisted.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
