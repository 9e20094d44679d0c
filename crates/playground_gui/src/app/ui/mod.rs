//! Panels drawn around the editor.

/// Bottom status bar content.
pub(super) mod status_bar;
