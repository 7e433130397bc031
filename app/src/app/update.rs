use egui::{CentralPanel, Context};
use tavla_types::{GraphNode, NodeChange, Position};

use crate::menu::{MenuAction, MenuState};
use crate::state::AppMessage;

use super::*;

impl eframe::App for TavlaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Process all pending channel messages: nodes resolved by the
        // async probe path. Each carries the canvas epoch it was
        // dispatched under; stale ones are discarded.
        while let Ok(msg) = self.channels.rx.try_recv() {
            match msg {
                AppMessage::UrlResolved { node, epoch } => {
                    let id = node.id.clone();
                    if crate::drop::commit_resolved(&mut self.canvas, node, epoch) {
                        self.status = format!("Added {}", id);
                    }
                }
            }
        }

        // Drop/paste intake for this frame
        if let Some(payload) = crate::drop::collect_payload(ctx) {
            tracing::info!(
                "Drop payload: uri={} files={} text={}",
                payload.uri.is_some(),
                payload.files.len(),
                payload.text.is_some()
            );
            self.drops.handle(payload, &mut self.canvas, ctx);
        }

        self.handle_keyboard(ctx);

        self.render_toolbar(ctx);
        self.render_status_bar(ctx);

        let canvas_response = CentralPanel::default()
            .show(ctx, |ui| self.canvas.show(ui))
            .inner;

        // Right clicks reported by the canvas open the matching menu;
        // opening one implicitly closes the other.
        if let Some((node_id, pos)) = canvas_response.node_context {
            let canvas_rect = self
                .canvas
                .canvas_rect()
                .unwrap_or(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0)));
            self.menu.open_node(node_id, pos, canvas_rect);
        } else if let Some(pos) = canvas_response.pane_context {
            self.menu.open_pane(pos);
        }

        // Pane-menu actions that create content use the menu's own
        // position as the drop target.
        let menu_target = match self.menu.state() {
            MenuState::Pane { pos } => self.canvas.screen_to_world(*pos),
            _ => Position::default(),
        };
        if let Some(action) = self.menu.show(ctx, menu_target) {
            self.apply_menu_action(action);
        }

        self.render_shortcuts_window(ctx);
    }
}

impl TavlaApp {
    fn apply_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::AddTextNode { position } => {
                let text = if self.text_input.trim().is_empty() {
                    "Note".to_string()
                } else {
                    self.text_input.trim().to_string()
                };
                let node = GraphNode::text(text, position);
                self.status = format!("Added {}", node.id);
                self.canvas.insert_node(node);
                self.text_input.clear();
            }
            MenuAction::ZoomToFit => self.canvas.zoom_to_fit(),
            MenuAction::ResetView => self.canvas.reset_view(),
            MenuAction::ClearCanvas => {
                self.canvas.clear();
                self.status = "Canvas cleared".to_string();
            }
            MenuAction::DuplicateNode(id) => {
                self.canvas.duplicate_node(&id);
                self.status = format!("Duplicated {}", id);
            }
            MenuAction::DeselectNode(id) => {
                self.canvas
                    .apply_node_changes(vec![NodeChange::Selected { id, selected: false }]);
            }
            MenuAction::DeleteNode(id) => {
                self.canvas.remove_node(&id);
                self.status = format!("Removed {}", id);
            }
        }
    }
}
