//! Change lists emitted by the canvas interaction layer.
//!
//! Direct manipulation (move, select, delete) does not mutate the graph
//! in place; it produces change lists that the store applies in one
//! step, rebuilding its collections.

use serde::{Deserialize, Serialize};

use crate::edge::EdgeId;
use crate::node::{NodeId, Position};

/// A single mutation to the node collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeChange {
    /// A node moved to a new position.
    Moved { id: NodeId, position: Position },
    /// A node's selection state changed.
    Selected { id: NodeId, selected: bool },
    /// A node was removed.
    Removed { id: NodeId },
}

/// A single mutation to the edge collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EdgeChange {
    /// An edge was removed.
    Removed { id: EdgeId },
}
