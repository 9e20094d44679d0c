//! eframe host that owns the editor's outbound state.
//!
//! The host keeps its own copy of the document and the typecheck-request
//! flag, applies [`HostEvent`]s from the editor each frame, and is the only
//! party that clears the flag.

mod style;
mod ui;

#[cfg(test)]
mod tests;

use crate::editor::{
    chord_label, color32, HostEvent, HostSink, PlaygroundEditor, TYPECHECK_SHORTCUT,
};
use crossbeam_channel::Receiver;
use eframe::egui;
use playground_core::{AppError, Config, InitialDocument, Palette};
use std::time::{Duration, Instant};
use tracing::info;

#[doc = "Default initial window size for the playground window."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [960.0, 720.0];
#[doc = "Minimum window size that keeps the status bar readable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [480.0, 320.0];
const STATUS_TTL: Duration = Duration::from_secs(4);

struct StatusMessage {
    text: String,
    expires_at: Instant,
}

/// Host application embedding one [`PlaygroundEditor`].
pub(crate) struct PlaygroundApp {
    editor: PlaygroundEditor,
    events: Receiver<HostEvent>,
    palette: Palette,
    /// Host copy of the document, written only through [`HostEvent::SetText`].
    text: String,
    need_typecheck: bool,
    typecheck_requests: u64,
    fixed_editor_height: Option<f32>,
    document_label: String,
    status: Option<StatusMessage>,
    style_applied: bool,
}

impl PlaygroundApp {
    /// Builds the host from configuration.
    ///
    /// # Errors
    /// Returns an error when the configured document cannot be read.
    pub(crate) fn new(config: &Config) -> Result<Self, AppError> {
        let document = InitialDocument::load(config)?;
        let palette = Palette::one_dark().with_active_line(config.active_line_color);
        Ok(Self::with_document(document, palette, config))
    }

    pub(crate) fn with_document(
        document: InitialDocument,
        palette: Palette,
        config: &Config,
    ) -> Self {
        let document_label = document
            .source
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "example".to_string());
        let (sink, events) = HostSink::channel();
        let editor = PlaygroundEditor::new(document, palette, sink)
            .with_event_logging(config.log_events);
        Self {
            editor,
            events,
            palette,
            text: String::new(),
            need_typecheck: false,
            typecheck_requests: 0,
            fixed_editor_height: config.editor_height,
            document_label,
            status: None,
            style_applied: false,
        }
    }

    fn apply_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::SetText(text) => self.text = text,
            HostEvent::SetNeedTypecheck(flag) => self.need_typecheck = flag,
        }
    }

    fn drain_editor_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply_event(event);
        }
    }

    /// Records a pending typecheck request and clears the flag.
    ///
    /// Running the checker itself is left to whatever consumes the count.
    fn acknowledge_typecheck(&mut self) {
        if !self.need_typecheck {
            return;
        }
        self.need_typecheck = false;
        self.typecheck_requests += 1;
        info!(
            request = self.typecheck_requests,
            chars = self.text.chars().count(),
            "typecheck requested"
        );
        self.status = Some(StatusMessage {
            text: format!("Typecheck requested (#{})", self.typecheck_requests),
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    fn expire_status(&mut self, now: Instant) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| now >= status.expires_at)
        {
            self.status = None;
        }
    }

    /// Draws one frame: status bar, then the editor filling the central panel.
    pub(crate) fn render(&mut self, ctx: &egui::Context) {
        self.ensure_style(ctx);
        self.expire_status(Instant::now());

        self.render_status_bar(ctx);
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin::ZERO))
            .show(ctx, |ui| {
                let editor_height = self
                    .fixed_editor_height
                    .unwrap_or_else(|| ui.available_height());
                self.editor.show(ui, editor_height);
            });

        // Editor writes land after the frame so the next frame sees them.
        self.drain_editor_events();
        self.acknowledge_typecheck();
        if let Some(status) = &self.status {
            ctx.request_repaint_after(status.expires_at.saturating_duration_since(Instant::now()));
        }
    }
}

impl eframe::App for PlaygroundApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}
