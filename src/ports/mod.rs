// src/ports/mod.rs
pub mod render;

pub use render::TextPresenter;
