// src/application/lifecycle.rs
use tracing::{debug, info};

use crate::application::markup::{apply_spans, extract_tag_info};
use crate::application::NoteSurface;
use crate::domain::{NoteError, NoteRecord};
use crate::infrastructure::{AssetReconciler, NoteStore};

/// Orchestrates one note window's save, load, and delete against the shared
/// store, pushing and pulling text, styles, and appearance through the
/// surface port.
pub struct NoteLifecycle<S: NoteSurface> {
    id: String,
    surface: S,
    store: NoteStore,
    reconciler: AssetReconciler,
}

impl<S: NoteSurface> NoteLifecycle<S> {
    pub fn new(
        id: impl Into<String>,
        surface: S,
        store: NoteStore,
        reconciler: AssetReconciler,
    ) -> Self {
        Self {
            id: id.into(),
            surface,
            store,
            reconciler,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Persist the surface's current text, styles, and appearance, then
    /// sweep image assets the edit may have orphaned.
    ///
    /// A whitespace-only body is a deliberate no-op: nothing is written and
    /// no sweep runs.
    pub fn save_note(&mut self) -> Result<(), NoteError> {
        let text = self.surface.buffer_text();
        if text.trim().is_empty() {
            debug!(id = %self.id, "Buffer is blank, skipping save");
            return Ok(());
        }

        let record = NoteRecord::new(
            text,
            self.surface.appearance(),
            extract_tag_info(&self.surface),
        );
        self.store.save(&self.id, record)?;
        self.reconciler.reconcile();
        info!(id = %self.id, "Saved note");
        Ok(())
    }

    /// Pull the persisted record into the surface: text first so the
    /// collaborator re-renders inline images from their tokens, then
    /// styles, then appearance, then a refresh signal.
    ///
    /// Returns `false` and leaves the surface untouched when the id has no
    /// record.
    pub fn load_note(&mut self) -> bool {
        let Some(record) = self.store.load_one(&self.id) else {
            debug!(id = %self.id, "No stored record, leaving surface at defaults");
            return false;
        };

        self.surface.set_buffer_text(&record.text);
        apply_spans(&mut self.surface, &record.tag_info);
        self.surface.set_appearance(&record.appearance);
        self.surface.refresh();
        debug!(id = %self.id, "Loaded note into surface");
        true
    }

    /// Delete after an explicit confirmation from the surface.
    ///
    /// A declined prompt returns `Ok(false)` with nothing touched. A
    /// confirmed delete removes the record, sweeps orphaned images, and
    /// signals the window to close.
    pub fn delete_note(&mut self) -> Result<bool, NoteError> {
        if !self.surface.confirm_delete() {
            debug!(id = %self.id, "Delete not confirmed");
            return Ok(false);
        }

        self.store.delete(&self.id)?;
        self.reconciler.reconcile();
        self.surface.close();
        info!(id = %self.id, "Deleted note");
        Ok(true)
    }
}
