//! Canvas node definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node on the canvas.
///
/// Ids are prefixed by the node kind (e.g. `IMG-`, `VID-`) followed by a
/// generated UUID suffix, so they stay readable in logs while remaining
/// collision-free.
pub type NodeId = String;

/// A point in canvas (world) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// This position shifted by the given amounts.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Display extent of a node in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// Kind of content a node carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Image,
    Video,
    Link,
    Text,
}

/// Content carried by a node.
///
/// The payload is tagged so the rendering layer can dispatch on it
/// directly instead of inspecting the content reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodePayload {
    /// A displayable image, referenced by URI (remote URL, registered
    /// byte buffer, or local file path).
    Image { uri: String },
    /// A playable video, referenced by URI.
    Video { uri: String },
    /// A plain clickable reference, not embedded media.
    Link { uri: String },
    /// Literal text entered or pasted by the user.
    Text { text: String },
}

impl NodePayload {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodePayload::Image { .. } => NodeKind::Image,
            NodePayload::Video { .. } => NodeKind::Video,
            NodePayload::Link { .. } => NodeKind::Link,
            NodePayload::Text { .. } => NodeKind::Text,
        }
    }
}

/// A positioned, typed unit of content on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique identifier for this node
    pub id: NodeId,
    /// The content this node displays. Immutable after creation.
    pub payload: NodePayload,
    /// Position in canvas coordinates (top-left corner)
    pub position: Position,
    /// Whether the node is currently selected
    #[serde(default)]
    pub selected: bool,
    /// Display extent
    pub size: Size,
}

impl GraphNode {
    fn build(prefix: &str, payload: NodePayload, position: Position, selected: bool, size: Size) -> Self {
        Self {
            id: format!("{}-{}", prefix, Uuid::new_v4().simple()),
            payload,
            position,
            selected,
            size,
        }
    }

    /// Create an image node from a displayable content reference.
    pub fn image(uri: impl Into<String>, position: Position) -> Self {
        Self::build(
            "IMG",
            NodePayload::Image { uri: uri.into() },
            position,
            false,
            Size::new(200.0, 200.0),
        )
    }

    /// Create an image node that starts out selected, so it can be moved
    /// immediately after it materializes on the canvas.
    pub fn image_selected(uri: impl Into<String>, position: Position) -> Self {
        Self::build(
            "IMG",
            NodePayload::Image { uri: uri.into() },
            position,
            true,
            Size::new(200.0, 200.0),
        )
    }

    /// Create a video node.
    pub fn video(uri: impl Into<String>, position: Position) -> Self {
        Self::build(
            "VID",
            NodePayload::Video { uri: uri.into() },
            position,
            false,
            Size::new(320.0, 200.0),
        )
    }

    /// Create a link node.
    pub fn link(uri: impl Into<String>, position: Position) -> Self {
        Self::build(
            "LINK",
            NodePayload::Link { uri: uri.into() },
            position,
            false,
            Size::new(240.0, 70.0),
        )
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>, position: Position) -> Self {
        Self::build(
            "text",
            NodePayload::Text { text: text.into() },
            position,
            false,
            Size::new(240.0, 90.0),
        )
    }

    pub fn kind(&self) -> NodeKind {
        self.payload.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_kind_prefix() {
        let pos = Position::new(0.0, 0.0);
        assert!(GraphNode::image("a.png", pos).id.starts_with("IMG-"));
        assert!(GraphNode::video("a.mp4", pos).id.starts_with("VID-"));
        assert!(GraphNode::link("https://example.com", pos).id.starts_with("LINK-"));
        assert!(GraphNode::text("hello", pos).id.starts_with("text-"));
    }

    #[test]
    fn ids_are_unique() {
        let pos = Position::new(0.0, 0.0);
        let a = GraphNode::image("a.png", pos);
        let b = GraphNode::image("a.png", pos);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn only_url_dropped_images_start_selected() {
        let pos = Position::new(0.0, 0.0);
        assert!(GraphNode::image_selected("a.png", pos).selected);
        assert!(!GraphNode::image("a.png", pos).selected);
        assert!(!GraphNode::video("a.mp4", pos).selected);
        assert!(!GraphNode::link("https://example.com", pos).selected);
        assert!(!GraphNode::text("hello", pos).selected);
    }

    #[test]
    fn kind_follows_payload() {
        let pos = Position::new(0.0, 0.0);
        assert_eq!(GraphNode::video("a.mp4", pos).kind(), NodeKind::Video);
        assert_eq!(GraphNode::text("hi", pos).kind(), NodeKind::Text);
    }

    #[test]
    fn payload_serializes_tagged() {
        let node = GraphNode::link("https://example.com", Position::new(1.0, 2.0));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["payload"]["kind"], "link");
        assert_eq!(json["payload"]["uri"], "https://example.com");

        let back: GraphNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }
}
