// src/infrastructure/store.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::domain::{NoteError, NoteRecord};

/// The full persisted collection, keyed by note id.
pub type NoteMap = BTreeMap<String, NoteRecord>;

/// The shared backing file holding every sticky note.
///
/// Every operation re-reads the whole file before acting, so one window
/// sees what another just wrote, and every mutation rewrites the file
/// wholesale. Concurrent processes race read-modify-write with last writer
/// wins; the design accepts that.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// A store over an explicit backing file. Nothing is created on disk
    /// until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record from the backing file.
    ///
    /// A missing file is an empty store. So is a file that no longer
    /// parses as a top-level object of records; the fallback is logged but
    /// never surfaced as a failure, because the alternative is an app that
    /// cannot open any note over a single bad byte.
    #[instrument(level = "debug", skip(self))]
    pub fn load_all(&self) -> NoteMap {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No notes file yet, starting empty");
                return NoteMap::new();
            }
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Failed to read notes file, treating store as empty");
                return NoteMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(notes) => notes,
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Notes file is corrupt, treating store as empty");
                NoteMap::new()
            }
        }
    }

    /// Fetch one record; `None` when the id has never been saved.
    pub fn load_one(&self, id: &str) -> Option<NoteRecord> {
        self.load_all().remove(id)
    }

    /// Read-modify-write the whole store with `record` under `id`.
    ///
    /// An existing user-assigned `name` survives a save that carries none.
    /// A whitespace-only body is a deliberate no-op: the record is neither
    /// created nor updated and no file write occurs.
    #[instrument(level = "debug", skip(self, record))]
    pub fn save(&self, id: &str, mut record: NoteRecord) -> Result<(), NoteError> {
        if record.is_blank() {
            debug!(id, "Record body is blank, leaving store untouched");
            return Ok(());
        }

        let mut notes = self.load_all();
        if record.name.is_none() {
            if let Some(existing) = notes.get(id) {
                record.name = existing.name.clone();
            }
        }
        notes.insert(id.to_string(), record);
        self.write(&notes)?;
        info!(id, "Saved note record");
        Ok(())
    }

    /// Remove `id` and rewrite the file. An absent id is a no-op, not an
    /// error, and skips the write.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&self, id: &str) -> Result<(), NoteError> {
        let mut notes = self.load_all();
        if notes.remove(id).is_none() {
            debug!(id, "No record to delete");
            return Ok(());
        }
        self.write(&notes)?;
        info!(id, "Deleted note record");
        Ok(())
    }

    /// Pretty-printed full overwrite, the only write path.
    fn write(&self, notes: &NoteMap) -> Result<(), NoteError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(notes)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
