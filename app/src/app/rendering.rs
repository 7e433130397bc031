use egui::{Context, TopBottomPanel};
use tavla_types::GraphNode;

use crate::graph::CanvasEditor;

use super::*;

impl TavlaApp {
    /// Top toolbar: add-text input, canvas actions, theme selection.
    pub(super) fn render_toolbar(&mut self, ctx: &Context) {
        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Tavla");
                ui.separator();

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.text_input)
                        .hint_text("New text node")
                        .desired_width(200.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Add text").clicked() || submitted {
                    self.add_text_node_from_toolbar();
                }

                ui.separator();

                if ui
                    .button("Clear")
                    .on_hover_text("Remove all nodes and edges")
                    .clicked()
                {
                    self.canvas.clear();
                    self.status = "Canvas cleared".to_string();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("⌨")
                        .on_hover_text("Keyboard shortcuts")
                        .clicked()
                    {
                        self.show_shortcuts = !self.show_shortcuts;
                    }

                    let previous = self.theme;
                    egui::ComboBox::from_id_salt("theme_select")
                        .selected_text(self.theme.label())
                        .show_ui(ui, |ui| {
                            for theme in ThemePreference::all() {
                                ui.selectable_value(&mut self.theme, theme, theme.label());
                            }
                        });
                    if self.theme != previous {
                        self.apply_theme(ctx);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    /// Bottom status bar: graph size and the latest status message.
    pub(super) fn render_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} nodes, {} edges",
                    self.canvas.nodes().len(),
                    self.canvas.edges().len()
                ));
                ui.separator();
                ui.label(&self.status);
            });
        });
    }

    /// Insert a text node from the toolbar input at a scattered
    /// position, mirroring content added without an explicit drop point.
    fn add_text_node_from_toolbar(&mut self) {
        let text = self.text_input.trim();
        if text.is_empty() {
            return;
        }
        let node = GraphNode::text(text, CanvasEditor::scatter_position());
        self.status = format!("Added {}", node.id);
        self.canvas.insert_node(node);
        self.text_input.clear();
    }
}
