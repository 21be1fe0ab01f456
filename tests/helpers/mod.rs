use anyhow::{Context, Result};
use std::path::PathBuf;
use stickypad::infrastructure::{AssetReconciler, NoteStore};
use tempfile::TempDir;

/// Test fixture for working with a throwaway notes file and image directory
#[allow(dead_code)]
pub struct TestVault {
    _temp_dir: TempDir,
    pub notes_file: PathBuf,
    pub image_dir: PathBuf,
}

#[allow(dead_code)]
impl TestVault {
    /// Create an empty vault inside a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()
            .context("Failed to create temporary directory")?;

        let notes_file = temp_dir.path().join("sticky_notes.json");
        let image_dir = temp_dir.path().join("sticky_notes_images");

        std::fs::create_dir_all(&image_dir)
            .context("Failed to create image directory")?;

        Ok(Self {
            _temp_dir: temp_dir,
            notes_file,
            image_dir,
        })
    }

    /// Open a store over this vault's notes file
    pub fn store(&self) -> NoteStore {
        NoteStore::new(&self.notes_file)
    }

    /// Open a reconciler sweeping this vault's image directory
    pub fn reconciler(&self) -> AssetReconciler {
        AssetReconciler::new(self.store(), &self.image_dir)
    }

    /// Drop a small file into the image directory
    pub fn add_image(&self, name: &str) -> Result<PathBuf> {
        let path = self.image_dir.join(name);
        std::fs::write(&path, b"png bytes")
            .with_context(|| format!("Failed to write image {name}"))?;
        Ok(path)
    }

    /// Sorted names of the files currently inside the image directory
    pub fn image_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = std::fs::read_dir(&self.image_dir)
            .context("Failed to list image directory")?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }
}
