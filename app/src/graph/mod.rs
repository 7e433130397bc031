//! Node-based canvas editor for dropped media.

mod data;
mod interaction;
mod rendering;

use egui::{Pos2, Rect, Vec2};
use tavla_types::{EdgeId, GraphEdge, GraphNode, NodeId, Position};

/// Default zoom level
pub(super) const DEFAULT_ZOOM: f32 = 1.0;

/// Maximum zoom level for zoom-to-fit (to avoid excessive zoom on single nodes)
pub(super) const MAX_ZOOM_TO_FIT: f32 = 1.0;

/// Minimum zoom level for zoom-to-fit
pub(super) const MIN_ZOOM_TO_FIT: f32 = 0.1;

/// Padding around all nodes when using zoom-to-fit (in screen pixels)
pub(super) const ZOOM_TO_FIT_PADDING: f32 = 50.0;

/// Offset applied when duplicating a node, so the copy doesn't cover
/// the original.
pub(super) const DUPLICATE_OFFSET: f32 = 30.0;

/// Represents the state of the canvas editor: the node/edge graph it
/// owns plus transient view and interaction state.
pub struct CanvasEditor {
    /// Nodes on the canvas
    nodes: Vec<GraphNode>,
    /// Edges between nodes
    edges: Vec<GraphEdge>,
    /// Bumped whenever the whole graph is cleared. Async drop
    /// resolutions carry the epoch they were dispatched under and are
    /// discarded when it no longer matches.
    epoch: u64,
    /// Offset for panning the canvas
    pub pan_offset: Vec2,
    /// Zoom level
    pub zoom: f32,
    /// Node being dragged
    dragging: Option<NodeId>,
    /// Node an edge is being drawn from
    connecting: Option<NodeId>,
    /// Hover state for nodes
    hovered_node: Option<NodeId>,
    /// Hovered edge id
    hovered_edge: Option<EdgeId>,
    /// Currently selected edge id
    selected_edge: Option<EdgeId>,
    /// Last known canvas rect (for coordinate transforms and menu anchoring)
    last_canvas_rect: Option<Rect>,
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            epoch: 0,
            pan_offset: Vec2::ZERO,
            zoom: DEFAULT_ZOOM,
            dragging: None,
            connecting: None,
            hovered_node: None,
            hovered_edge: None,
            selected_edge: None,
            last_canvas_rect: None,
        }
    }
}

impl CanvasEditor {
    /// Create a new canvas editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canvas rect from the last rendered frame, if any.
    pub fn canvas_rect(&self) -> Option<Rect> {
        self.last_canvas_rect
    }

    /// Convert a screen position to canvas (world) coordinates.
    pub fn screen_to_world(&self, pos: Pos2) -> Position {
        let origin = self.last_canvas_rect.map(|r| r.min).unwrap_or(Pos2::ZERO);
        let world = (pos - origin - self.pan_offset) / self.zoom;
        Position::new(world.x, world.y)
    }

    /// Convert a canvas position to screen coordinates.
    pub fn world_to_screen(&self, pos: Position) -> Pos2 {
        let origin = self.last_canvas_rect.map(|r| r.min).unwrap_or(Pos2::ZERO);
        origin + egui::vec2(pos.x, pos.y) * self.zoom + self.pan_offset
    }

    #[cfg(test)]
    pub(crate) fn set_canvas_rect(&mut self, rect: Rect) {
        self.last_canvas_rect = Some(rect);
    }
}
