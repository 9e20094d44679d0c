//! egui rendering for [`PlaygroundEditor`].

use super::extensions::ResolvedExtensions;
use super::scroll::{center_offset, rows_that_fit, scroll_past_end_padding};
use super::{PlaygroundEditor, ViewUpdate};
use eframe::egui::{self, Color32};
use playground_core::{Rgba, SelectionRange};

/// Converts a palette color into egui's premultiplied representation.
pub(crate) fn color32(rgba: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Whether this frame carries input that moves the cursor from the keyboard.
fn keyboard_input_this_frame(ui: &egui::Ui) -> bool {
    ui.input(|input| {
        input.events.iter().any(|event| {
            matches!(
                event,
                egui::Event::Key { pressed: true, .. }
                    | egui::Event::Text(_)
                    | egui::Event::Paste(_)
            )
        })
    })
}

struct FrameResult {
    response: egui::Response,
    ranges: Vec<SelectionRange>,
    /// Cursor row top in content coordinates.
    cursor_top: Option<f32>,
}

impl PlaygroundEditor {
    /// Renders the editor into `ui` with a viewport `editor_height` pixels tall.
    ///
    /// The first call runs the construction hook. Every call rebuilds the
    /// extension list from the current selection state and height.
    pub fn show(&mut self, ui: &mut egui::Ui, editor_height: f32) -> egui::Response {
        self.on_create();

        let extensions = self.extensions(editor_height);
        let resolved = ResolvedExtensions::resolve(&extensions);

        let focused = ui.memory(|memory| memory.has_focus(self.id));
        if focused {
            if let Some(keymap) = resolved.keymap {
                // Bound key presses are removed so the TextEdit never inserts them.
                let mut commands = Vec::new();
                ui.input_mut(|input| {
                    input.events.retain(|event| match event {
                        egui::Event::Key {
                            key,
                            pressed: true,
                            modifiers,
                            ..
                        } => match keymap.lookup(*modifiers, *key) {
                            Some(command) => {
                                commands.push(command);
                                false
                            }
                            None => true,
                        },
                        _ => true,
                    });
                });
                for command in commands {
                    self.run_command(command);
                }
            }
        }
        let keyboard_input = focused && keyboard_input_this_frame(ui);

        let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
        let max_height = resolved
            .theme
            .map_or(editor_height, |theme| theme.scroller_max_height);
        let active_line = resolved
            .theme
            .map_or(self.palette.active_line, |theme| theme.active_line_background);
        let bottom_padding = resolved
            .scroll_past_end
            .then(|| scroll_past_end_padding(editor_height, row_height));
        let rows = rows_that_fit(editor_height, row_height);

        let mut scroll = egui::ScrollArea::vertical()
            .id_salt(self.id.with("scroll"))
            .max_height(max_height)
            .auto_shrink([false; 2]);
        if let Some(offset) = self.pending_scroll_offset.take() {
            scroll = scroll.vertical_scroll_offset(offset);
        }

        let id = self.id;
        let text = &mut self.text;
        let scroll_output = scroll.show(ui, |ui| {
            let active_line_slot = ui.painter().add(egui::Shape::Noop);
            let output = egui::TextEdit::multiline(text)
                .id(id)
                .code_editor()
                .frame(false)
                .desired_width(f32::INFINITY)
                .desired_rows(rows)
                .lock_focus(true)
                .show(ui);

            let content_top = ui.min_rect().min.y;
            let cursor_rect = output.cursor_range.map(|range| {
                output
                    .galley
                    .pos_from_cursor(range.primary)
                    .translate(output.galley_pos.to_vec2())
            });
            if let Some(rect) = cursor_rect {
                if !active_line.is_transparent() {
                    let row =
                        egui::Rect::from_x_y_ranges(ui.max_rect().x_range(), rect.y_range());
                    ui.painter().set(
                        active_line_slot,
                        egui::Shape::rect_filled(row, 0.0, color32(active_line)),
                    );
                }
            }
            if let Some(padding) = bottom_padding {
                ui.add_space(padding);
            }

            FrameResult {
                response: output.response,
                ranges: output
                    .cursor_range
                    .map(|range| SelectionRange::new(range.secondary.index, range.primary.index))
                    .into_iter()
                    .collect(),
                cursor_top: cursor_rect.map(|rect| rect.min.y - content_top),
            }
        });

        let current_offset = scroll_output.state.offset.y;
        let FrameResult {
            response,
            ranges,
            cursor_top,
        } = scroll_output.inner;

        let changed = response.changed();
        if changed {
            self.on_change();
        }
        let selection_set = ranges != self.last_ranges;
        self.on_update(&ViewUpdate {
            selection_set,
            ranges: ranges.clone(),
        });
        if selection_set {
            self.last_ranges = ranges;
        }

        if let (Some(viewport_height), Some(top)) = (resolved.center_cursor, cursor_top) {
            if keyboard_input && (changed || selection_set) {
                let target = center_offset(top, row_height, viewport_height);
                if (target - current_offset).abs() > 0.5 {
                    self.pending_scroll_offset = Some(target);
                    ui.ctx().request_repaint();
                }
            }
        }

        response
    }
}
