//! Per-render configuration handed to the text widget.

use super::keymap::Keymap;
use playground_core::{Palette, Rgba};
use std::fmt;

/// How a style fragment ranks against the base theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Base,
    /// Applied after every base rule; nothing overrides it.
    Highest,
}

/// Style overrides recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeFragment {
    /// Cap for the scrollable region, in pixels. Not validated.
    pub scroller_max_height: f32,
    pub active_line_background: Rgba,
    pub precedence: Precedence,
}

impl ThemeFragment {
    /// Builds the dynamic fragment for the current viewport and selection state.
    ///
    /// The active-line highlight is suppressed while a selection exists so the
    /// two backgrounds never stack over the same span.
    pub fn dynamic(editor_height: f32, exists_selection: bool, palette: &Palette) -> Self {
        Self {
            scroller_max_height: editor_height,
            active_line_background: if exists_selection {
                Rgba::TRANSPARENT
            } else {
                palette.active_line
            },
            precedence: Precedence::Highest,
        }
    }

    /// Max height as a CSS length, e.g. `480px`.
    pub fn max_height_css(&self) -> String {
        format!("{}px", self.scroller_max_height)
    }
}

impl fmt::Display for ThemeFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max-height: {}; active-line: {}",
            self.max_height_css(),
            self.active_line_background
        )
    }
}

/// One configuration unit accepted by the editor widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Extension {
    Keymap(Keymap),
    /// Pad the content so the last line can scroll to the top of the viewport.
    ScrollPastEnd,
    /// Keep the cursor vertically centered within a viewport of this height.
    CenterCursor { viewport_height: f32 },
    Theme(ThemeFragment),
}

/// Builds the extension list in its fixed order:
/// keymap, scroll-past-end, cursor centering, dynamic theme.
pub fn compose_extensions(
    keymap: &Keymap,
    editor_height: f32,
    exists_selection: bool,
    palette: &Palette,
) -> Vec<Extension> {
    vec![
        Extension::Keymap(keymap.clone()),
        Extension::ScrollPastEnd,
        Extension::CenterCursor {
            viewport_height: editor_height,
        },
        Extension::Theme(ThemeFragment::dynamic(
            editor_height,
            exists_selection,
            palette,
        )),
    ]
}

/// Flattened view of an extension list, ready for one frame of rendering.
#[derive(Debug, Default)]
pub(crate) struct ResolvedExtensions<'a> {
    pub(crate) keymap: Option<&'a Keymap>,
    pub(crate) scroll_past_end: bool,
    pub(crate) center_cursor: Option<f32>,
    pub(crate) theme: Option<&'a ThemeFragment>,
}

impl<'a> ResolvedExtensions<'a> {
    /// Later entries replace earlier ones of the same kind, except that a
    /// theme fragment never replaces one of higher precedence.
    pub(crate) fn resolve(extensions: &'a [Extension]) -> Self {
        let mut resolved = Self::default();
        for extension in extensions {
            match extension {
                Extension::Keymap(keymap) => resolved.keymap = Some(keymap),
                Extension::ScrollPastEnd => resolved.scroll_past_end = true,
                Extension::CenterCursor { viewport_height } => {
                    resolved.center_cursor = Some(*viewport_height)
                }
                Extension::Theme(fragment) => {
                    let outranked = resolved
                        .theme
                        .is_some_and(|current| current.precedence > fragment.precedence);
                    if !outranked {
                        resolved.theme = Some(fragment);
                    }
                }
            }
        }
        resolved
    }
}
