// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use infrastructure::{AssetReconciler, Config, NoteStore};
use ports::TextPresenter;
use tracing::{debug, info};
use crate::cli::args::{Args, Command};
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, IMAGE_DIR_NAME, NOTES_FILE_NAME};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting stickypad with arguments");

    // Initialize infrastructure
    let config = load_config()?;
    let notes_file = resolve_notes_file(args.file, &config)?;
    let image_dir = resolve_image_dir(args.image_dir, &config, &notes_file);
    debug!(notes_file = %notes_file.display(), image_dir = %image_dir.display(), "Resolved storage paths");

    let store = NoteStore::new(&notes_file);
    let reconciler = AssetReconciler::new(store.clone(), &image_dir);

    // Initialize presentation
    let presenter = TextPresenter::with_image_dir(&image_dir);

    // Execute use case
    match args.command {
        Command::List { search } => {
            let notes = store.load_all();
            let mut shown = 0;
            for (id, record) in &notes {
                if let Some(term) = search.as_deref() {
                    let name_matches = record.name.as_deref().is_some_and(|n| n.contains(term));
                    if !name_matches && !record.text.contains(term) {
                        continue;
                    }
                }
                println!("{}", presenter.list_line(id, record));
                shown += 1;
            }
            debug!(shown, total = notes.len(), "Listed notes");
        }

        Command::Show { note_id, json } => {
            info!(id = %note_id, "Showing note");
            let record = store
                .load_one(&note_id)
                .with_context(|| format!("No note with id {note_id}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print!("{}", presenter.render(&note_id, &record));
            }
        }

        Command::Delete { note_id, yes } => {
            store
                .load_one(&note_id)
                .with_context(|| format!("No note with id {note_id}"))?;
            if !yes && !cli::confirm(&format!("Delete note {note_id}?"))? {
                println!("Nothing deleted");
                return Ok(());
            }
            store.delete(&note_id)?;
            let removed = reconciler.reconcile();
            info!(id = %note_id, removed, "Deleted note");
            println!("Deleted note {note_id}");
        }

        Command::Gc => {
            let removed = reconciler.reconcile();
            println!("Removed {removed} unreferenced image file(s)");
        }
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    let Some(base) = dirs::config_dir() else {
        debug!("No platform config directory, using built-in defaults");
        return Ok(Config::default());
    };
    let path = base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Config::default());
    }
    debug!(path = %path.display(), "Loading config file");
    Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Where the shared notes file lives: command-line flag first, then the
/// config file, then the platform data directory.
pub fn resolve_notes_file(cli_path: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        debug!(?path, "Using notes file from command line");
        return Ok(path);
    }
    if !config.storage.notes_file.is_empty() {
        return Ok(PathBuf::from(&config.storage.notes_file));
    }
    let data_dir = dirs::data_dir().context("Could not find platform data directory")?;
    Ok(data_dir.join(APP_DIR_NAME).join(NOTES_FILE_NAME))
}

/// Where image assets live: command-line flag first, then the config file,
/// then a directory next to the notes file.
pub fn resolve_image_dir(cli_path: Option<PathBuf>, config: &Config, notes_file: &Path) -> PathBuf {
    if let Some(path) = cli_path {
        debug!(?path, "Using image directory from command line");
        return path;
    }
    if !config.storage.image_dir.is_empty() {
        return PathBuf::from(&config.storage.image_dir);
    }
    match notes_file.parent() {
        Some(parent) => parent.join(IMAGE_DIR_NAME),
        None => PathBuf::from(IMAGE_DIR_NAME),
    }
}
