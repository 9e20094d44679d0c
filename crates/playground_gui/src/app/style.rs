//! One-time base style for the host window, derived from the injected palette.

use super::PlaygroundApp;
use crate::editor::color32;
use eframe::egui::{self, FontFamily, FontId, Stroke, TextStyle, Visuals};

pub(super) const EDITOR_FONT_SIZE: f32 = 15.0;

impl PlaygroundApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }
        let palette = self.palette;

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::dark();
        style.visuals.override_text_color = Some(color32(palette.foreground));
        style.visuals.panel_fill = color32(palette.background);
        style.visuals.window_fill = color32(palette.background);
        style.visuals.extreme_bg_color = color32(palette.background);
        style.visuals.faint_bg_color = color32(palette.chrome_background);
        style.visuals.selection.bg_fill = color32(palette.selection);
        style.visuals.selection.stroke = Stroke::new(1.0, color32(palette.foreground));
        style.visuals.text_cursor.stroke = Stroke::new(2.0, color32(palette.cursor));
        style.visuals.text_edit_bg_color = Some(color32(palette.background));

        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.text_styles.insert(
            TextStyle::Monospace,
            FontId::new(EDITOR_FONT_SIZE, FontFamily::Monospace),
        );
        style
            .text_styles
            .insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));

        ctx.set_style(style);
        self.style_applied = true;
    }
}
