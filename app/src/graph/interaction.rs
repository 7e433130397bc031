use egui::{pos2, vec2, Color32, Pos2, Rect, Sense, Stroke, Ui};
use tavla_types::{GraphEdge, GraphNode};

use super::*;

impl CanvasEditor {
    /// World position of a node's connection port. Output ports sit on
    /// the right edge, input ports on the left, both vertically
    /// centered.
    pub(super) fn port_position(&self, node: &GraphNode, is_input: bool) -> Pos2 {
        let x = if is_input {
            node.position.x
        } else {
            node.position.x + node.size.w
        };
        pos2(x, node.position.y + node.size.h / 2.0)
    }

    /// World positions of an edge's endpoints, if both nodes exist.
    pub(super) fn edge_endpoints(&self, edge: &GraphEdge) -> Option<(Pos2, Pos2)> {
        let source = self.node(&edge.source)?;
        let target = self.node(&edge.target)?;
        Some((
            self.port_position(source, false),
            self.port_position(target, true),
        ))
    }

    pub(super) fn draw_edge(
        &self,
        painter: &egui::Painter,
        edge: &GraphEdge,
        to_screen: &impl Fn(Pos2) -> Pos2,
        is_selected: bool,
        is_hovered: bool,
    ) {
        let Some((from, to)) = self.edge_endpoints(edge) else {
            return;
        };
        let from_screen = to_screen(from);
        let to_screen_pos = to_screen(to);

        // Draw cubic bezier curve
        let control_offset = 50.0 * self.zoom;
        let control1 = from_screen + vec2(control_offset, 0.0);
        let control2 = to_screen_pos - vec2(control_offset, 0.0);

        let (color, width) = if is_selected {
            (Color32::from_rgb(100, 150, 255), 3.0)
        } else if is_hovered {
            (Color32::from_rgb(200, 200, 200), 2.5)
        } else {
            (Color32::from_rgb(150, 150, 150), 2.0)
        };

        painter.add(egui::epaint::CubicBezierShape::from_points_stroke(
            [from_screen, control1, control2, to_screen_pos],
            false,
            Color32::TRANSPARENT,
            Stroke::new(width, color),
        ));
    }

    /// Check if a point is near an edge's bezier curve (for click detection).
    pub(super) fn is_point_near_edge(
        &self,
        edge: &GraphEdge,
        point: Pos2,
        to_screen: &impl Fn(Pos2) -> Pos2,
    ) -> bool {
        let Some((from, to)) = self.edge_endpoints(edge) else {
            return false;
        };
        let from_screen = to_screen(from);
        let to_screen_pos = to_screen(to);

        let control_offset = 50.0 * self.zoom;
        let control1 = from_screen + vec2(control_offset, 0.0);
        let control2 = to_screen_pos - vec2(control_offset, 0.0);

        // Sample points along the curve and check distance
        let threshold = 10.0;
        let samples = 20;

        for i in 0..=samples {
            let t = i as f32 / samples as f32;
            let bezier_point =
                evaluate_cubic_bezier(from_screen, control1, control2, to_screen_pos, t);
            if point.distance(bezier_point) < threshold {
                return true;
            }
        }

        false
    }

    /// Handle the connection ports on a node: dragging from the output
    /// port starts an edge, releasing over another node's input port
    /// completes it.
    pub(super) fn handle_port_interaction(&mut self, ui: &Ui, node_id: &str, rect: Rect) {
        let port_radius = 6.0 * self.zoom;
        let interaction_size = port_radius * 2.0 + 4.0 * self.zoom;

        let output_center = pos2(rect.max.x, rect.center().y);
        let output_rect =
            Rect::from_center_size(output_center, vec2(interaction_size, interaction_size));
        let output_response = ui.interact(
            output_rect,
            ui.id().with((node_id, "out")),
            Sense::click_and_drag(),
        );

        if output_response.drag_started()
            || (output_response.dragged() && self.connecting.is_none())
        {
            self.connecting = Some(node_id.to_string());
        }
    }

    /// Draw the connection ports for a node.
    pub(super) fn draw_ports(&self, painter: &egui::Painter, rect: Rect, accent: Color32) {
        let port_radius = 6.0 * self.zoom;
        let input_center = pos2(rect.min.x, rect.center().y);
        let output_center = pos2(rect.max.x, rect.center().y);
        painter.circle_filled(input_center, port_radius, accent);
        painter.circle_filled(output_center, port_radius, accent);
    }
}

/// Evaluate a cubic bezier curve at parameter t.
pub(super) fn evaluate_cubic_bezier(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, t: f32) -> Pos2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    pos2(
        mt3 * p0.x + 3.0 * mt2 * t * p1.x + 3.0 * mt * t2 * p2.x + t3 * p3.x,
        mt3 * p0.y + 3.0 * mt2 * t * p1.y + 3.0 * mt * t2 * p2.y + t3 * p3.y,
    )
}
