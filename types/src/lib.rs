//! Shared types for the Tavla canvas editor.
//!
//! This crate contains the domain model for the canvas: nodes, edges,
//! the change lists emitted by the interaction layer, and the content
//! classification verdicts produced by the drop pipeline.

pub mod change;
pub mod content;
pub mod edge;
pub mod node;

// Re-export commonly used types
pub use change::{EdgeChange, NodeChange};
pub use content::ContentKind;
pub use edge::{EdgeId, GraphEdge};
pub use node::{GraphNode, NodeId, NodeKind, NodePayload, Position, Size};
