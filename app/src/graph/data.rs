use tavla_types::{EdgeChange, GraphEdge, GraphNode, NodeChange, Position};

use super::*;

impl CanvasEditor {
    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// All edges, in creation order.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// The current graph epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The currently selected node, if exactly one thing is selected.
    pub fn selected_node(&self) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.selected)
    }

    /// Insert a node built by the drop pipeline or a menu action.
    pub fn insert_node(&mut self, node: GraphNode) {
        tracing::debug!("Inserting node {} at ({}, {})", node.id, node.position.x, node.position.y);
        self.nodes.push(node);
    }

    /// Remove a node and every edge that references it, so no dangling
    /// edges remain.
    pub fn remove_node(&mut self, id: &str) {
        self.nodes.retain(|n| n.id != id);
        self.edges.retain(|e| !e.touches(id));
        if self.hovered_node.as_deref() == Some(id) {
            self.hovered_node = None;
        }
        if self.dragging.as_deref() == Some(id) {
            self.dragging = None;
        }
    }

    /// Connect two nodes with an edge.
    ///
    /// Self-edges, duplicate connections, and references to unknown
    /// nodes are rejected. Returns whether an edge was created.
    pub fn connect(&mut self, source: &str, target: &str) -> bool {
        if source == target {
            return false;
        }
        if self.node(source).is_none() || self.node(target).is_none() {
            return false;
        }
        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return false;
        }
        self.edges.push(GraphEdge::new(source, target));
        true
    }

    /// Apply a change list from the interaction layer to the node
    /// collection. The collection is rebuilt so the result is a fresh
    /// snapshot; last writer wins on conflicting position updates.
    pub fn apply_node_changes(&mut self, changes: Vec<NodeChange>) {
        let mut nodes = std::mem::take(&mut self.nodes);
        for change in changes {
            match change {
                NodeChange::Moved { id, position } => {
                    if let Some(node) = nodes.iter_mut().find(|n| n.id == id) {
                        node.position = position;
                    }
                }
                NodeChange::Selected { id, selected } => {
                    if let Some(node) = nodes.iter_mut().find(|n| n.id == id) {
                        node.selected = selected;
                    }
                }
                NodeChange::Removed { id } => {
                    nodes.retain(|n| n.id != id);
                    self.edges.retain(|e| !e.touches(&id));
                }
            }
        }
        self.nodes = nodes;
    }

    /// Apply a change list to the edge collection.
    pub fn apply_edge_changes(&mut self, changes: Vec<EdgeChange>) {
        let mut edges = std::mem::take(&mut self.edges);
        for change in changes {
            match change {
                EdgeChange::Removed { id } => {
                    edges.retain(|e| e.id != id);
                    if self.selected_edge.as_deref() == Some(&id) {
                        self.selected_edge = None;
                    }
                }
            }
        }
        self.edges = edges;
    }

    /// Remove everything from the canvas and bump the epoch so that
    /// in-flight drop resolutions dispatched before the clear are
    /// discarded when they land.
    pub fn clear(&mut self) {
        tracing::info!(
            "Clearing canvas ({} nodes, {} edges)",
            self.nodes.len(),
            self.edges.len()
        );
        self.nodes.clear();
        self.edges.clear();
        self.epoch += 1;
        self.selected_edge = None;
        self.hovered_node = None;
        self.hovered_edge = None;
        self.dragging = None;
        self.connecting = None;
    }

    /// Duplicate a node, offsetting the copy so it doesn't cover the
    /// original. The copy becomes the selection.
    pub fn duplicate_node(&mut self, id: &str) {
        let Some(original) = self.node(id) else {
            return;
        };
        let position = original
            .position
            .offset(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        let mut copy = match &original.payload {
            tavla_types::NodePayload::Image { uri } => GraphNode::image(uri.clone(), position),
            tavla_types::NodePayload::Video { uri } => GraphNode::video(uri.clone(), position),
            tavla_types::NodePayload::Link { uri } => GraphNode::link(uri.clone(), position),
            tavla_types::NodePayload::Text { text } => GraphNode::text(text.clone(), position),
        };
        copy.size = original.size;
        copy.selected = true;
        self.deselect_all();
        self.insert_node(copy);
    }

    /// Deselect all nodes and edges.
    pub fn deselect_all(&mut self) {
        for node in &mut self.nodes {
            node.selected = false;
        }
        self.selected_edge = None;
    }

    /// Whether a node or edge is selected.
    pub fn has_selection(&self) -> bool {
        self.selected_edge.is_some() || self.nodes.iter().any(|n| n.selected)
    }

    /// Remove the current selection (node with its edges, or edge).
    pub fn remove_selected(&mut self) {
        let selected_nodes: Vec<String> =
            self.nodes.iter().filter(|n| n.selected).map(|n| n.id.clone()).collect();
        for id in selected_nodes {
            self.remove_node(&id);
        }
        if let Some(id) = self.selected_edge.take() {
            self.edges.retain(|e| e.id != id);
        }
    }

    /// Mark a single node as the selection.
    pub fn select_node(&mut self, id: &str) {
        let changes: Vec<NodeChange> = self
            .nodes
            .iter()
            .map(|n| NodeChange::Selected {
                id: n.id.clone(),
                selected: n.id == id,
            })
            .collect();
        self.apply_node_changes(changes);
        self.selected_edge = None;
    }

    /// Compute a world-space position for content added without an
    /// explicit drop point (e.g. the toolbar's add-text action).
    pub fn scatter_position() -> Position {
        // Derived from UUID entropy so WASM and native behave the same
        // without pulling in a PRNG.
        let bytes = *uuid::Uuid::new_v4().as_bytes();
        let x = u16::from_le_bytes([bytes[0], bytes[1]]) % 1001;
        let y = u16::from_le_bytes([bytes[2], bytes[3]]) % 1001;
        Position::new(x as f32, y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavla_types::NodeKind;

    fn editor_with_nodes() -> (CanvasEditor, String, String) {
        let mut editor = CanvasEditor::new();
        let a = GraphNode::image("a.png", Position::new(0.0, 0.0));
        let b = GraphNode::video("b.mp4", Position::new(300.0, 0.0));
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        editor.insert_node(a);
        editor.insert_node(b);
        (editor, a_id, b_id)
    }

    #[test]
    fn remove_node_drops_referencing_edges() {
        let (mut editor, a, b) = editor_with_nodes();
        assert!(editor.connect(&a, &b));
        assert_eq!(editor.edges().len(), 1);

        editor.remove_node(&a);

        assert_eq!(editor.nodes().len(), 1);
        assert!(!editor.edges().iter().any(|e| e.touches(&a)));
        assert!(editor.edges().is_empty());
    }

    #[test]
    fn connect_rejects_self_and_duplicates() {
        let (mut editor, a, b) = editor_with_nodes();
        assert!(!editor.connect(&a, &a));
        assert!(editor.connect(&a, &b));
        assert!(!editor.connect(&a, &b));
        assert!(!editor.connect(&a, "missing"));
        assert_eq!(editor.edges().len(), 1);
    }

    #[test]
    fn node_changes_rebuild_collection() {
        let (mut editor, a, b) = editor_with_nodes();
        editor.connect(&a, &b);

        editor.apply_node_changes(vec![
            NodeChange::Moved {
                id: a.clone(),
                position: Position::new(50.0, 60.0),
            },
            NodeChange::Selected {
                id: a.clone(),
                selected: true,
            },
            NodeChange::Removed { id: b.clone() },
        ]);

        let node = editor.node(&a).unwrap();
        assert_eq!(node.position, Position::new(50.0, 60.0));
        assert!(node.selected);
        assert!(editor.node(&b).is_none());
        // Removing a node through a change list also cascades to edges.
        assert!(editor.edges().is_empty());
    }

    #[test]
    fn last_writer_wins_on_position() {
        let (mut editor, a, _) = editor_with_nodes();
        editor.apply_node_changes(vec![
            NodeChange::Moved {
                id: a.clone(),
                position: Position::new(1.0, 1.0),
            },
            NodeChange::Moved {
                id: a.clone(),
                position: Position::new(2.0, 2.0),
            },
        ]);
        assert_eq!(editor.node(&a).unwrap().position, Position::new(2.0, 2.0));
    }

    #[test]
    fn edge_changes_remove_by_id() {
        let (mut editor, a, b) = editor_with_nodes();
        editor.connect(&a, &b);
        let edge_id = editor.edges()[0].id.clone();
        editor.apply_edge_changes(vec![EdgeChange::Removed { id: edge_id }]);
        assert!(editor.edges().is_empty());
    }

    #[test]
    fn clear_bumps_epoch() {
        let (mut editor, _, _) = editor_with_nodes();
        let before = editor.epoch();
        editor.clear();
        assert!(editor.nodes().is_empty());
        assert!(editor.edges().is_empty());
        assert_eq!(editor.epoch(), before + 1);
    }

    #[test]
    fn duplicate_offsets_and_selects_copy() {
        let (mut editor, a, _) = editor_with_nodes();
        editor.duplicate_node(&a);
        assert_eq!(editor.nodes().len(), 3);
        let copy = editor.nodes().last().unwrap();
        assert_ne!(copy.id, a);
        assert_eq!(copy.kind(), NodeKind::Image);
        assert_eq!(copy.position, Position::new(30.0, 30.0));
        assert!(copy.selected);
    }

    #[test]
    fn select_node_is_exclusive() {
        let (mut editor, a, b) = editor_with_nodes();
        editor.select_node(&a);
        editor.select_node(&b);
        assert!(!editor.node(&a).unwrap().selected);
        assert!(editor.node(&b).unwrap().selected);
        assert_eq!(editor.selected_node().unwrap().id, b);
    }

    #[test]
    fn remove_selected_takes_node_and_edges() {
        let (mut editor, a, b) = editor_with_nodes();
        editor.connect(&a, &b);
        editor.select_node(&a);
        editor.remove_selected();
        assert!(editor.node(&a).is_none());
        assert!(editor.edges().is_empty());
        assert!(editor.node(&b).is_some());
    }

    #[test]
    fn scatter_position_stays_in_bounds() {
        for _ in 0..32 {
            let pos = CanvasEditor::scatter_position();
            assert!((0.0..=1000.0).contains(&pos.x));
            assert!((0.0..=1000.0).contains(&pos.y));
        }
    }
}
