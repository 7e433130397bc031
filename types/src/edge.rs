//! Edges between canvas nodes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::node::NodeId;

/// Unique identifier for an edge.
pub type EdgeId = String;

/// A user-drawn connection between two nodes.
///
/// Edges store node ids, not references, so removing a node must
/// explicitly remove the edges that mention it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: EdgeId,
    /// Source node id
    pub source: NodeId,
    /// Target node id
    pub target: NodeId,
}

impl GraphEdge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: format!("edge-{}", Uuid::new_v4().simple()),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Whether this edge references the given node.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touches_matches_either_end() {
        let edge = GraphEdge::new("a", "b");
        assert!(edge.touches("a"));
        assert!(edge.touches("b"));
        assert!(!edge.touches("c"));
    }
}
