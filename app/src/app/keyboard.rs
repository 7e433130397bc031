use egui::{Context, Key, Modifiers};

use super::*;

/// Bindings shown in the shortcuts window.
const SHORTCUTS: &[(&str, &str)] = &[
    ("Delete selection", "Delete"),
    ("Duplicate selected node", "Ctrl+D"),
    ("Connect nodes", "Drag from a node's right port"),
    ("Open video or link", "Double-click the node"),
    ("Zoom", "Ctrl+Scroll / pinch"),
    ("Zoom to fit", "Ctrl+Double-click"),
    ("Pan", "Drag the background"),
    ("Close menu or window", "Esc"),
];

impl TavlaApp {
    /// Format keyboard shortcut for display (adapts to platform).
    fn format_shortcut(shortcut: &str) -> String {
        #[cfg(target_os = "macos")]
        {
            shortcut.replace("Ctrl", "⌘")
        }
        #[cfg(not(target_os = "macos"))]
        {
            shortcut.to_string()
        }
    }

    /// Global keyboard handling. Skipped while a text field has focus
    /// so typing doesn't delete nodes.
    pub(super) fn handle_keyboard(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|i| i.key_pressed(Key::Delete) || i.key_pressed(Key::Backspace)) {
            if self.canvas.has_selection() {
                self.canvas.remove_selected();
                self.status = "Selection removed".to_string();
            }
        }

        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::D)) {
            if let Some(node) = self.canvas.selected_node() {
                let id = node.id.clone();
                self.canvas.duplicate_node(&id);
                self.status = format!("Duplicated {}", id);
            }
        }

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.show_shortcuts = false;
        }
    }

    /// Modal listing the keyboard and mouse bindings.
    pub(super) fn render_shortcuts_window(&mut self, ctx: &Context) {
        if !self.show_shortcuts {
            return;
        }

        let mut open = self.show_shortcuts;
        egui::Window::new("Keyboard shortcuts")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for (label, keys) in SHORTCUTS {
                            ui.label(*label);
                            ui.label(
                                egui::RichText::new(Self::format_shortcut(keys))
                                    .weak()
                                    .monospace(),
                            );
                            ui.end_row();
                        }
                    });
            });
        self.show_shortcuts = open;
    }
}
