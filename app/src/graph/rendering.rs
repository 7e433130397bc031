use egui::{pos2, vec2, Color32, FontId, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};
use tavla_types::{GraphNode, NodeChange, NodeKind, NodePayload};

use super::*;

/// What the canvas reported back from one rendered frame, beyond the
/// mutations it applied itself: right-click targets for the menu layer.
pub struct CanvasResponse {
    /// A node was right-clicked at this screen position
    pub node_context: Option<(NodeId, Pos2)>,
    /// The pane background was right-clicked at this screen position
    pub pane_context: Option<Pos2>,
}

impl CanvasEditor {
    /// Calculate the bounding box of all nodes in world coordinates.
    /// Returns None if the canvas is empty.
    fn calculate_bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for node in &self.nodes {
            let rect = Rect::from_min_size(
                pos2(node.position.x, node.position.y),
                vec2(node.size.w, node.size.h),
            );
            bounds = Some(match bounds {
                Some(b) => b.union(rect),
                None => rect,
            });
        }
        bounds
    }

    /// Reset the view to the default zoom and pan offset.
    pub fn reset_view(&mut self) {
        self.pan_offset = Vec2::ZERO;
        self.zoom = DEFAULT_ZOOM;
    }

    /// Zoom to fit all nodes in the view.
    /// If the canvas is empty, resets to the default view.
    pub fn zoom_to_fit(&mut self) {
        let Some(bounds) = self.calculate_bounds() else {
            self.reset_view();
            return;
        };

        let canvas_size = self
            .last_canvas_rect
            .map(|r| vec2(r.width(), r.height()))
            .unwrap_or(vec2(800.0, 600.0));

        let available_width = (canvas_size.x - ZOOM_TO_FIT_PADDING * 2.0).max(100.0);
        let available_height = (canvas_size.y - ZOOM_TO_FIT_PADDING * 2.0).max(100.0);

        let zoom_x = if bounds.width() > 0.0 {
            available_width / bounds.width()
        } else {
            MAX_ZOOM_TO_FIT
        };
        let zoom_y = if bounds.height() > 0.0 {
            available_height / bounds.height()
        } else {
            MAX_ZOOM_TO_FIT
        };

        self.zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM_TO_FIT, MAX_ZOOM_TO_FIT);

        // Center the view on the bounds center:
        // screen_pos = rect_min + (world_pos * zoom) + pan_offset, so for
        // the bounds center to land at the canvas center:
        // pan_offset = canvas_center - (bounds_center * zoom)
        let bounds_center = bounds.center();
        let canvas_center = canvas_size / 2.0;
        self.pan_offset =
            canvas_center - vec2(bounds_center.x * self.zoom, bounds_center.y * self.zoom);
    }

    /// Render the canvas and handle direct manipulation.
    pub fn show(&mut self, ui: &mut Ui) -> CanvasResponse {
        ui.push_id("canvas_editor", |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size_before_wrap(), Sense::click_and_drag());

            // Store the canvas rect for coordinate transforms and menu anchoring
            self.last_canvas_rect = Some(response.rect);

            let zoom = self.zoom;
            let pan_offset = self.pan_offset;
            let rect_min = response.rect.min;

            let to_screen = |pos: Pos2| -> Pos2 { rect_min + (pos.to_vec2() * zoom) + pan_offset };
            let from_screen =
                |pos: Pos2| -> Pos2 { ((pos - rect_min - pan_offset) / zoom).to_pos2() };

            // Handle zoom and scroll - use global pointer position so it
            // works even over nodes, but not while a window is hovered
            let pointer_pos = ui.input(|i| i.pointer.hover_pos());
            let pointer_in_canvas = pointer_pos
                .map(|p| response.rect.contains(p))
                .unwrap_or(false);
            let window_hovered = ui.ctx().wants_pointer_input();

            if pointer_in_canvas && !window_hovered {
                let hover_pos = pointer_pos.unwrap_or(response.rect.center());
                let scroll_delta = ui.input(|i| i.smooth_scroll_delta);
                let pinch_zoom = ui.input(|i| i.zoom_delta());
                let modifiers = ui.input(|i| i.modifiers);

                if pinch_zoom != 1.0 {
                    self.zoom = (self.zoom * pinch_zoom).clamp(0.1, 3.0);
                    // Adjust pan to zoom towards cursor
                    let world_pos = from_screen(hover_pos);
                    let new_screen_pos =
                        rect_min + (world_pos.to_vec2() * self.zoom) + self.pan_offset;
                    self.pan_offset += hover_pos - new_screen_pos;
                } else if (modifiers.ctrl || modifiers.alt) && scroll_delta.y != 0.0 {
                    let zoom_delta = scroll_delta.y * 0.001;
                    self.zoom = (self.zoom + zoom_delta).clamp(0.1, 3.0);
                    let world_pos = from_screen(hover_pos);
                    let new_screen_pos =
                        rect_min + (world_pos.to_vec2() * self.zoom) + self.pan_offset;
                    self.pan_offset += hover_pos - new_screen_pos;
                } else if scroll_delta.x != 0.0 {
                    self.pan_offset.x += scroll_delta.x;
                } else if modifiers.shift && scroll_delta.y != 0.0 {
                    self.pan_offset.x += scroll_delta.y;
                } else if scroll_delta.y != 0.0 {
                    self.pan_offset.y += scroll_delta.y;
                }
            }

            self.draw_grid(ui, &painter, response.rect);

            // Draw nodes and collect interaction results; mutations are
            // applied through change lists after the loop.
            let mut changes: Vec<NodeChange> = Vec::new();
            let mut clicked_node: Option<NodeId> = None;
            let mut node_context: Option<(NodeId, Pos2)> = None;
            let mut open_uri: Option<String> = None;
            let mut port_rects: Vec<(NodeId, Rect)> = Vec::new();

            for node in &self.nodes {
                let screen_pos = to_screen(pos2(node.position.x, node.position.y));
                let node_rect = Rect::from_min_size(
                    screen_pos,
                    vec2(node.size.w * zoom, node.size.h * zoom),
                );

                let is_hovered = self.hovered_node.as_deref() == Some(node.id.as_str());
                let node_response = self.draw_node(ui, &painter, node, node_rect, is_hovered);

                // Track hover state
                if node_response.hovered() {
                    self.hovered_node = Some(node.id.clone());
                } else if self.hovered_node.as_deref() == Some(node.id.as_str()) {
                    self.hovered_node = None;
                }

                // Select on click or when starting to drag
                if node_response.clicked()
                    || (node_response.dragged() && self.dragging.is_none())
                {
                    clicked_node = Some(node.id.clone());
                }

                // Right-click opens the node menu
                if node_response.secondary_clicked() {
                    let pos = node_response
                        .interact_pointer_pos()
                        .unwrap_or(node_rect.center());
                    node_context = Some((node.id.clone(), pos));
                }

                // Double-click opens playable/linkable content externally
                if node_response.double_clicked() {
                    match &node.payload {
                        NodePayload::Video { uri } | NodePayload::Link { uri } => {
                            open_uri = Some(uri.clone());
                        }
                        _ => {}
                    }
                }

                // Handle node dragging
                if node_response.dragged() && self.connecting.is_none() {
                    if self.dragging.is_none() {
                        self.dragging = Some(node.id.clone());
                    }
                    if self.dragging.as_deref() == Some(node.id.as_str()) {
                        let delta = node_response.drag_delta() / zoom;
                        changes.push(NodeChange::Moved {
                            id: node.id.clone(),
                            position: node.position.offset(delta.x, delta.y),
                        });
                    }
                }

                port_rects.push((node.id.clone(), node_rect));
            }

            if let Some(uri) = open_uri {
                ui.ctx().open_url(egui::OpenUrl::new_tab(uri));
            }

            // Port interactions (may start a connection gesture)
            for (node_id, rect) in port_rects {
                self.handle_port_interaction(ui, &node_id, rect);
            }

            if let Some(id) = clicked_node {
                self.select_node(&id);
            }
            if !changes.is_empty() {
                self.apply_node_changes(changes);
            }

            // Handle canvas panning (only if not dragging a node)
            if response.dragged() && self.dragging.is_none() && self.connecting.is_none() {
                self.pan_offset += response.drag_delta();
            }

            // Reset dragging state and finalize connections when the
            // mouse is released
            if !ui.input(|i| i.pointer.primary_down()) {
                self.dragging = None;
                if let Some(from_id) = self.connecting.take() {
                    if let Some(to_id) = self.hovered_node.clone() {
                        if self.connect(&from_id, &to_id) {
                            tracing::debug!("Connected {} -> {}", from_id, to_id);
                        }
                    }
                }
            }

            // Draw edges after nodes so they appear on top
            let edges_clone = self.edges.clone();
            self.hovered_edge = None;

            for edge in &edges_clone {
                if let Some(hover_pos) = response.hover_pos() {
                    if self.is_point_near_edge(edge, hover_pos, &to_screen) {
                        self.hovered_edge = Some(edge.id.clone());
                    }
                }
                let is_selected = self.selected_edge.as_deref() == Some(edge.id.as_str());
                let is_hovered = self.hovered_edge.as_deref() == Some(edge.id.as_str());
                self.draw_edge(&painter, edge, &to_screen, is_selected, is_hovered);
            }

            // Edge selection on click
            if response.clicked() && self.hovered_edge.is_some() {
                let edge_id = self.hovered_edge.clone();
                self.deselect_all();
                self.selected_edge = edge_id;
            }

            // Deselect when clicking on empty space
            if response.clicked() && self.hovered_edge.is_none() && self.hovered_node.is_none() {
                self.deselect_all();
            }

            // Ctrl+double-click on background: zoom to fit
            if response.double_clicked()
                && self.hovered_edge.is_none()
                && self.hovered_node.is_none()
                && ui.input(|i| i.modifiers.ctrl)
            {
                self.zoom_to_fit();
            }

            // Draw the edge being created (on top of everything)
            if let Some(from_id) = self.connecting.clone() {
                if let Some(from_node) = self.node(&from_id) {
                    let from_screen = to_screen(self.port_position(from_node, false));
                    let to_pos = ui.input(|i| i.pointer.hover_pos().unwrap_or(from_screen));

                    let control_offset = 50.0 * zoom;
                    let control1 = from_screen + vec2(control_offset, 0.0);
                    let control2 = to_pos - vec2(control_offset, 0.0);

                    painter.add(egui::epaint::CubicBezierShape::from_points_stroke(
                        [from_screen, control1, control2, to_pos],
                        false,
                        Color32::TRANSPARENT,
                        Stroke::new(2.0, Color32::from_rgb(100, 150, 255)),
                    ));
                }
            }

            // Pane right-click (not over a node)
            let pane_context = if response.secondary_clicked()
                && self.hovered_node.is_none()
                && node_context.is_none()
            {
                response.interact_pointer_pos()
            } else {
                None
            };

            // Floating view control buttons at top center of canvas
            let button_group_width = 85.0;
            let button_pos = pos2(
                response.rect.center().x - button_group_width / 2.0,
                response.rect.min.y + 8.0,
            );

            egui::Area::new(egui::Id::new("canvas_view_controls"))
                .fixed_pos(button_pos)
                .order(egui::Order::Middle)
                .show(ui.ctx(), |ui| {
                    ui.horizontal(|ui| {
                        ui.style_mut().spacing.item_spacing.x = 4.0;

                        if ui
                            .add(egui::Button::new("Fit").min_size(vec2(32.0, 24.0)))
                            .on_hover_text("Zoom to fit all nodes (Ctrl+double-click)")
                            .clicked()
                        {
                            self.zoom_to_fit();
                        }

                        if ui
                            .add(egui::Button::new("Reset").min_size(vec2(40.0, 24.0)))
                            .on_hover_text("Reset view to default")
                            .clicked()
                        {
                            self.reset_view();
                        }
                    });
                });

            CanvasResponse {
                node_context,
                pane_context,
            }
        })
        .inner
    }

    fn draw_grid(&self, ui: &Ui, painter: &egui::Painter, rect: Rect) {
        let grid_spacing = 50.0 * self.zoom;
        let color = if ui.visuals().dark_mode {
            Color32::from_gray(40)
        } else {
            Color32::from_gray(200)
        };

        // Grid moves with content; rem_euclid for always-positive remainder
        let offset_x = self.pan_offset.x.rem_euclid(grid_spacing);
        let offset_y = self.pan_offset.y.rem_euclid(grid_spacing);

        let start_x = (rect.min.x / grid_spacing).floor() * grid_spacing + offset_x;
        let start_y = (rect.min.y / grid_spacing).floor() * grid_spacing + offset_y;

        let mut x = start_x;
        while x < rect.max.x {
            painter.line_segment(
                [pos2(x, rect.min.y), pos2(x, rect.max.y)],
                Stroke::new(1.0, color),
            );
            x += grid_spacing;
        }

        let mut y = start_y;
        while y < rect.max.y {
            painter.line_segment(
                [pos2(rect.min.x, y), pos2(rect.max.x, y)],
                Stroke::new(1.0, color),
            );
            y += grid_spacing;
        }
    }

    fn draw_node(
        &self,
        ui: &Ui,
        painter: &egui::Painter,
        node: &GraphNode,
        rect: Rect,
        is_hovered: bool,
    ) -> Response {
        let dark = ui.visuals().dark_mode;
        let accent = kind_accent(node.kind(), dark);

        let stroke_color = if node.selected {
            accent
        } else if is_hovered {
            accent.gamma_multiply(0.8)
        } else {
            accent.gamma_multiply(0.5)
        };
        let stroke_width = if node.selected {
            2.5
        } else if is_hovered {
            1.5
        } else {
            1.0
        };

        let fill_color = if dark {
            if node.selected {
                Color32::from_gray(45)
            } else if is_hovered {
                Color32::from_gray(38)
            } else {
                Color32::from_gray(32)
            }
        } else if node.selected {
            Color32::from_gray(235)
        } else if is_hovered {
            Color32::from_gray(243)
        } else {
            Color32::from_gray(250)
        };

        painter.rect(
            rect,
            6.0,
            fill_color,
            Stroke::new(stroke_width, stroke_color),
            egui::epaint::StrokeKind::Inside,
        );

        let text_color = if dark {
            Color32::from_gray(220)
        } else {
            Color32::from_gray(40)
        };

        match &node.payload {
            NodePayload::Image { uri } => {
                let content_rect = rect.shrink(4.0 * self.zoom);
                egui::Image::from_uri(uri.clone()).paint_at(ui, content_rect);
            }
            NodePayload::Video { uri } => {
                painter.text(
                    rect.center() - vec2(0.0, 8.0 * self.zoom),
                    egui::Align2::CENTER_CENTER,
                    "▶",
                    FontId::proportional(28.0 * self.zoom),
                    accent,
                );
                painter.text(
                    pos2(rect.center().x, rect.max.y - 12.0 * self.zoom),
                    egui::Align2::CENTER_CENTER,
                    truncate_label(uri, 38),
                    FontId::proportional(11.0 * self.zoom),
                    text_color,
                );
            }
            NodePayload::Link { uri } => {
                painter.text(
                    pos2(rect.min.x + 10.0 * self.zoom, rect.center().y),
                    egui::Align2::LEFT_CENTER,
                    format!("🔗 {}", truncate_label(uri, 32)),
                    FontId::proportional(13.0 * self.zoom),
                    accent,
                );
            }
            NodePayload::Text { text } => {
                let wrap_width = rect.width() - 16.0 * self.zoom;
                let galley = painter.layout(
                    text.clone(),
                    FontId::proportional(15.0 * self.zoom),
                    text_color,
                    wrap_width,
                );
                let text_pos = pos2(
                    rect.min.x + 8.0 * self.zoom,
                    rect.center().y - galley.size().y / 2.0,
                );
                painter.galley(text_pos, galley, text_color);
            }
        }

        self.draw_ports(painter, rect, accent.gamma_multiply(0.7));

        ui.interact(rect, ui.id().with(&node.id), Sense::click_and_drag())
    }
}

/// Accent color per node kind.
fn kind_accent(kind: NodeKind, dark_mode: bool) -> Color32 {
    match (kind, dark_mode) {
        (NodeKind::Image, true) => Color32::from_rgb(100, 220, 220),
        (NodeKind::Image, false) => Color32::from_rgb(0, 150, 150),
        (NodeKind::Video, true) => Color32::from_rgb(240, 160, 90),
        (NodeKind::Video, false) => Color32::from_rgb(200, 110, 30),
        (NodeKind::Link, true) => Color32::from_rgb(110, 160, 250),
        (NodeKind::Link, false) => Color32::from_rgb(50, 100, 210),
        (NodeKind::Text, true) => Color32::from_rgb(170, 200, 120),
        (NodeKind::Text, false) => Color32::from_rgb(100, 140, 50),
    }
}

/// Shorten a label for in-node display.
fn truncate_label(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavla_types::Position;

    #[test]
    fn bounds_cover_all_nodes() {
        let mut editor = CanvasEditor::new();
        assert!(editor.calculate_bounds().is_none());

        editor.insert_node(GraphNode::text("a", Position::new(0.0, 0.0)));
        editor.insert_node(GraphNode::image("b.png", Position::new(500.0, 400.0)));

        let bounds = editor.calculate_bounds().unwrap();
        assert_eq!(bounds.min, pos2(0.0, 0.0));
        assert_eq!(bounds.max, pos2(700.0, 600.0));
    }

    #[test]
    fn screen_world_round_trip() {
        let mut editor = CanvasEditor::new();
        editor.set_canvas_rect(Rect::from_min_size(pos2(10.0, 20.0), vec2(800.0, 600.0)));
        editor.zoom = 2.0;
        editor.pan_offset = vec2(5.0, -5.0);

        let world = editor.screen_to_world(pos2(100.0, 100.0));
        let screen = editor.world_to_screen(world);
        assert!((screen.x - 100.0).abs() < 1e-4);
        assert!((screen.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn labels_truncate_with_ellipsis() {
        assert_eq!(truncate_label("short", 10), "short");
        let long = "https://example.com/a/very/long/path/indeed.png";
        let truncated = truncate_label(long, 16);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncated.chars().count(), 16);
    }
}
