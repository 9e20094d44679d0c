//! Bottom status bar showing document size and typecheck requests.

use super::super::*;
use eframe::egui;

impl PlaygroundApp {
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let muted = color32(self.palette.muted);
        let accent = color32(self.palette.accent);
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .fill(color32(self.palette.chrome_background)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(chord_label(&TYPECHECK_SHORTCUT))
                            .small()
                            .monospace()
                            .color(muted),
                    );
                    ui.label(egui::RichText::new("typecheck").small().color(muted));
                    if let Some(status) = &self.status {
                        ui.separator();
                        ui.label(egui::RichText::new(&status.text).small().color(accent));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(document_summary(&self.text))
                                .small()
                                .color(muted),
                        );
                        ui.separator();
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(self.document_label.as_str())
                                    .small()
                                    .monospace()
                                    .color(muted),
                            )
                            .truncate(),
                        );
                    });
                });
            });
    }
}

/// `"{lines} lines, {chars} chars"` for the host's copy of the text.
pub(crate) fn document_summary(text: &str) -> String {
    let lines = text.lines().count().max(1);
    let chars = text.chars().count();
    format!(
        "{} {}, {} {}",
        lines,
        if lines == 1 { "line" } else { "lines" },
        chars,
        if chars == 1 { "char" } else { "chars" }
    )
}
