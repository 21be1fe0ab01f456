// src/application/markup.rs
use tracing::trace;

use crate::application::NoteSurface;
use crate::domain::position::{to_offset, to_position};
use crate::domain::{Span, StyleKind, TagInfo};

/// Collect the `[start, end)` offset spans currently carrying `style`, in
/// document order.
///
/// A region whose endpoints no longer resolve into the buffer is skipped
/// rather than failing the whole extraction, and degenerate runs are
/// dropped. Extraction for one style never touches another's regions.
pub fn extract_spans<S: NoteSurface + ?Sized>(surface: &S, style: StyleKind) -> Vec<Span> {
    let text = surface.buffer_text();
    let mut spans = Vec::new();

    for (start, end) in surface.style_regions(style) {
        let (start, end) = match (to_offset(&text, start), to_offset(&text, end)) {
            (Ok(start), Ok(end)) => (start, end),
            _ => {
                trace!(%style, "Skipping region with unresolvable endpoint");
                continue;
            }
        };
        if end > start {
            spans.push(Span::new(start, end));
        }
    }
    spans
}

/// Extract every style in the closed set, ready for persistence.
pub fn extract_tag_info<S: NoteSurface + ?Sized>(surface: &S) -> TagInfo {
    let mut tag_info = TagInfo::new();
    for style in StyleKind::ALL {
        tag_info.insert(style, extract_spans(surface, style));
    }
    tag_info
}

/// Re-apply persisted spans to a freshly filled buffer.
///
/// Malformed spans (`end <= start`) and spans falling outside the current
/// text are skipped one by one. Application is idempotent because styles
/// are set-like on the surface.
pub fn apply_spans<S: NoteSurface + ?Sized>(surface: &mut S, tag_info: &TagInfo) {
    let text = surface.buffer_text();

    for (style, spans) in tag_info.iter() {
        for span in spans {
            if !span.is_well_formed() {
                trace!(%style, start = span.start(), end = span.end(), "Skipping malformed span");
                continue;
            }
            match (to_position(&text, span.start()), to_position(&text, span.end())) {
                (Ok(start), Ok(end)) => surface.add_style_region(style, start, end),
                _ => {
                    trace!(%style, start = span.start(), end = span.end(), "Skipping span outside the buffer");
                }
            }
        }
    }
}
