// src/infrastructure/assets.rs
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::domain::placeholder;
use crate::infrastructure::store::{NoteMap, NoteStore};

/// Mark-and-sweep collector for inline-image files.
///
/// Mark: scan every note body for `[[IMG:<path>]]` tokens and resolve each
/// to an existing file. Sweep: delete every file directly inside the image
/// directory whose absolute path no token resolved to. Runs after every
/// save and every delete, so images edited out of a note or belonging to a
/// deleted note do not linger on disk.
pub struct AssetReconciler {
    store: NoteStore,
    image_dir: PathBuf,
}

impl AssetReconciler {
    pub fn new(store: NoteStore, image_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            image_dir: image_dir.into(),
        }
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Run one full pass and return the number of files removed.
    ///
    /// Nothing in the pass is fatal: unresolvable references drop out of
    /// the mark set, a missing or unreadable image directory means nothing
    /// to sweep, and a failed deletion is logged and skipped.
    #[instrument(level = "debug", skip(self))]
    pub fn reconcile(&self) -> usize {
        let notes = self.store.load_all();
        let referenced = self.referenced_assets(&notes);

        let entries = match fs::read_dir(&self.image_dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(error = %e, dir = %self.image_dir.display(), "Image directory not readable, nothing to sweep");
                return 0;
            }
        };

        let mut removed = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Ok(absolute) = fs::canonicalize(&path) else {
                continue;
            };
            if referenced.contains(&absolute) {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => {
                    info!(path = %path.display(), "Removed unreferenced image");
                    removed += 1;
                }
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Failed to remove unreferenced image, skipping");
                }
            }
        }

        debug!(removed, referenced = referenced.len(), "Reconciliation pass complete");
        removed
    }

    /// Resolve every image token across `notes` to the absolute path of an
    /// existing file: first the path as given, then the same path joined
    /// under the image directory. Both lookups stay, in that order; saved
    /// notes depend on it. References resolving to no file are dropped.
    fn referenced_assets(&self, notes: &NoteMap) -> HashSet<PathBuf> {
        let mut referenced = HashSet::new();
        for (id, record) in notes {
            for raw in placeholder::image_refs(&record.text) {
                if let Ok(absolute) = fs::canonicalize(&raw) {
                    referenced.insert(absolute);
                } else if let Ok(absolute) = fs::canonicalize(self.image_dir.join(&raw)) {
                    referenced.insert(absolute);
                } else {
                    debug!(id = %id, path = %raw, "Dropping image reference to a missing file");
                }
            }
        }
        referenced
    }
}
