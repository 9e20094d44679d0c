//! Root crate facade for the playground editor.

pub use playground_core::{
    config, constants, document, error, palette, selection, AppError, Config, InitialDocument,
    Palette, Rgba, SelectionRange,
};
pub use playground_gui::{editor, run};
