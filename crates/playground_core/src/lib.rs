//! Core library for the playground editor (config, palette, documents, selection).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across playground crates.
pub mod constants;
/// Initial document source for the editor.
pub mod document;
/// Process-global environment mutation helpers.
pub mod env;
/// Application error types.
pub mod error;
/// Color tokens shared by the editor theme.
pub mod palette;
/// Toolkit-independent selection predicates.
pub mod selection;

pub use config::Config;
pub use document::InitialDocument;
pub use error::AppError;
pub use palette::{Palette, Rgba};
pub use selection::{exists_non_empty_selection, SelectionRange};
