//! Embeddable code editor that reports its text and typecheck requests to a host.
//!
//! The text widget itself (layout, cursor movement, undo) is egui's
//! `TextEdit`. This module wires it to host-owned state: text changes and the
//! typecheck request travel out through a [`HostSink`], selection state feeds
//! the per-render [`ThemeFragment`], and the reserved chord is intercepted
//! before the widget can insert a newline.

mod bridge;
mod extensions;
mod keymap;
mod scroll;
mod view;


pub use bridge::{HostEvent, HostSink};
pub use extensions::{compose_extensions, Extension, Precedence, ThemeFragment};
pub use keymap::{chord_label, Command, KeyBinding, Keymap, TYPECHECK_SHORTCUT};
pub use scroll::{center_offset, scroll_past_end_padding};
pub(crate) use view::color32;

use eframe::egui;
use playground_core::{exists_non_empty_selection, InitialDocument, Palette, SelectionRange};
use tracing::{debug, info};

/// Default widget id; hosts embedding several editors should pass their own.
pub const EDITOR_ID: &str = "playground_editor";

/// Payload of one widget update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewUpdate {
    /// Whether the selection differs from the previous update.
    pub selection_set: bool,
    /// Every selection range the widget currently reports.
    pub ranges: Vec<SelectionRange>,
}

/// The editor component. Owns the widget's text and the local selection flag.
pub struct PlaygroundEditor {
    id: egui::Id,
    text: String,
    palette: Palette,
    keymap: Keymap,
    sink: HostSink,
    exists_selection: bool,
    last_ranges: Vec<SelectionRange>,
    created: bool,
    pending_scroll_offset: Option<f32>,
    log_events: bool,
}

impl PlaygroundEditor {
    /// Creates an editor seeded with `document`. Nothing is sent to the host
    /// until [`Self::on_create`] runs (the first [`Self::show`] calls it).
    pub fn new(document: InitialDocument, palette: Palette, sink: HostSink) -> Self {
        Self {
            id: egui::Id::new(EDITOR_ID),
            text: document.text,
            palette,
            keymap: Keymap::playground(),
            sink,
            exists_selection: false,
            last_ranges: Vec::new(),
            created: false,
            pending_scroll_offset: None,
            log_events: false,
        }
    }

    pub fn with_id(mut self, id: egui::Id) -> Self {
        self.id = id;
        self
    }

    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Logs every bridge/tracker event at debug level.
    pub fn with_event_logging(mut self, enabled: bool) -> Self {
        self.log_events = enabled;
        self
    }

    pub fn id(&self) -> egui::Id {
        self.id
    }

    /// The widget's current document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn exists_selection(&self) -> bool {
        self.exists_selection
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Construction hook: publishes the initial text and resets the viewport
    /// to the top. Runs once per editor instance.
    pub fn on_create(&mut self) {
        if self.created {
            return;
        }
        self.created = true;
        self.sink.set_text(&self.text);
        self.pending_scroll_offset = Some(0.0);
        info!(bytes = self.text.len(), "editor created");
    }

    /// Change hook: publishes the widget's current text unconditionally.
    pub fn on_change(&self) {
        self.trace_event("change", format_args!("bytes={}", self.text.len()));
        self.sink.set_text(&self.text);
    }

    /// Replaces the document as if the user had edited it, then fires the
    /// change hook.
    pub fn apply_edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.on_change();
    }

    /// Update hook: recomputes the selection flag when the selection moved.
    pub fn on_update(&mut self, update: &ViewUpdate) {
        if !update.selection_set {
            return;
        }
        let exists = exists_non_empty_selection(&update.ranges);
        if exists != self.exists_selection {
            self.trace_event("selection", format_args!("exists={}", exists));
            self.exists_selection = exists;
        }
    }

    /// Runs the command bound to the chord, if any.
    ///
    /// # Returns
    /// `true` when the chord was handled and the widget must not act on it.
    pub fn handle_chord(&self, modifiers: egui::Modifiers, key: egui::Key) -> bool {
        match self.keymap.lookup(modifiers, key) {
            Some(command) => self.run_command(command),
            None => false,
        }
    }

    pub(crate) fn run_command(&self, command: Command) -> bool {
        match command {
            Command::RequestTypecheck => {
                debug!("typecheck requested from keymap");
                self.sink.set_need_typecheck(true);
                true
            }
        }
    }

    /// Extensions for a render at `editor_height`, in fixed order.
    pub fn extensions(&self, editor_height: f32) -> Vec<Extension> {
        compose_extensions(
            &self.keymap,
            editor_height,
            self.exists_selection,
            &self.palette,
        )
    }

    /// The dynamic theme fragment the next render will apply.
    pub fn theme_fragment(&self, editor_height: f32) -> ThemeFragment {
        ThemeFragment::dynamic(editor_height, self.exists_selection, &self.palette)
    }

    /// Scroll offset queued for the next render, if any.
    pub fn pending_scroll_offset(&self) -> Option<f32> {
        self.pending_scroll_offset
    }

    fn trace_event(&self, event: &str, detail: std::fmt::Arguments<'_>) {
        if self.log_events {
            debug!("editor {}: {}", event, detail);
        }
    }
}
