// src/application/surface.rs
use crate::domain::{Appearance, Position, StyleKind};

/// Capability contract of the editing surface a note window provides.
///
/// Any rich-text buffer abstraction that can report and re-apply styled
/// regions satisfies it; the persistence core assumes no particular widget
/// toolkit. Tests use [`crate::util::testing::MockSurface`].
pub trait NoteSurface {
    /// The logical note body, inline image tokens intact.
    fn buffer_text(&self) -> String;

    /// Every contiguous run currently carrying `style`, as native start/end
    /// position pairs in document order.
    fn style_regions(&self, style: StyleKind) -> Vec<(Position, Position)>;

    /// Replace the buffer content. Implementations re-expand `[[IMG:...]]`
    /// tokens into visual images as a side effect.
    fn set_buffer_text(&mut self, text: &str);

    /// Mark `[start, end)` with `style`. Styles are set-like: re-adding an
    /// already styled region must not change the rendered result.
    fn add_style_region(&mut self, style: StyleKind, start: Position, end: Position);

    /// Current window colors and pin state.
    fn appearance(&self) -> Appearance;

    fn set_appearance(&mut self, appearance: &Appearance);

    /// Re-render after text, styles, and appearance have been pushed.
    fn refresh(&mut self);

    /// Ask the user to confirm deletion. The prompt itself (dialog box,
    /// terminal y/N line) is the surface's business.
    fn confirm_delete(&mut self) -> bool;

    /// Tear down the note window after a confirmed delete.
    fn close(&mut self);
}
