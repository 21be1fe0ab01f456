// src/infrastructure/mod.rs
pub mod assets;
pub mod config;
pub mod store;

pub use assets::AssetReconciler;
pub use config::Config;
pub use store::{NoteMap, NoteStore};
