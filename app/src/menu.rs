//! Context menus for the canvas pane and for individual nodes.
//!
//! One controller owns the open/closed state: opening either menu
//! implicitly closes the other, and any click outside the open menu
//! (or Escape) closes it. The node menu anchors away from nearby canvas
//! edges so it never renders off-screen.

use egui::{pos2, vec2, Color32, Pos2, Rect};
use tavla_types::{NodeId, Position};

/// Distance from a canvas edge (in screen pixels) within which the node
/// menu flips its anchor to stay on-screen.
const EDGE_MARGIN: f32 = 200.0;

/// Estimated menu extent used for anchor placement.
const MENU_WIDTH: f32 = 180.0;
const MENU_HEIGHT: f32 = 110.0;

/// Which corner of the menu is pinned to the invoking point.
///
/// Both flags may be set near the bottom-right of the canvas; the menu
/// then anchors from its bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorCorner {
    /// Anchor from the right edge (pointer close to the canvas' right)
    pub right: bool,
    /// Anchor from the bottom edge (pointer close to the canvas' bottom)
    pub bottom: bool,
}

impl AnchorCorner {
    /// Choose the anchor from the pointer's proximity to the canvas edges.
    pub fn at(pointer: Pos2, canvas: Rect) -> Self {
        Self {
            right: pointer.x >= canvas.max.x - EDGE_MARGIN,
            bottom: pointer.y >= canvas.max.y - EDGE_MARGIN,
        }
    }

    /// Screen position for the menu's top-left corner.
    fn menu_pos(&self, pointer: Pos2) -> Pos2 {
        pos2(
            if self.right { pointer.x - MENU_WIDTH } else { pointer.x },
            if self.bottom { pointer.y - MENU_HEIGHT } else { pointer.y },
        )
    }
}

/// Which contextual menu is open, and where.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuState {
    Closed,
    /// Pane-level menu at a screen position
    Pane { pos: Pos2 },
    /// Node-scoped menu, anchored to stay on-screen
    Node {
        node_id: NodeId,
        pos: Pos2,
        anchor: AnchorCorner,
    },
}

/// An action picked from a context menu, applied by the app.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    AddTextNode { position: Position },
    ZoomToFit,
    ResetView,
    ClearCanvas,
    DuplicateNode(NodeId),
    DeselectNode(NodeId),
    DeleteNode(NodeId),
}

/// Tracks which contextual menu is open. Exactly one menu can be open
/// at a time.
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    pub fn new() -> Self {
        Self {
            state: MenuState::Closed,
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != MenuState::Closed
    }

    /// Open the pane menu at the given screen position.
    pub fn open_pane(&mut self, pos: Pos2) {
        self.state = MenuState::Pane { pos };
    }

    /// Open the node menu, anchored from the pointer's position relative
    /// to the canvas rect.
    pub fn open_node(&mut self, node_id: NodeId, pointer: Pos2, canvas: Rect) {
        let anchor = AnchorCorner::at(pointer, canvas);
        self.state = MenuState::Node {
            node_id,
            pos: pointer,
            anchor,
        };
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Render the open menu, if any. Returns the picked action; picking
    /// an action, clicking outside the menu, or pressing Escape closes
    /// the menu.
    pub fn show(&mut self, ctx: &egui::Context, drop_target: Position) -> Option<MenuAction> {
        let (pos, items) = match &self.state {
            MenuState::Closed => return None,
            MenuState::Pane { pos } => (
                *pos,
                vec![
                    ("Add text node", MenuAction::AddTextNode { position: drop_target }),
                    ("Zoom to fit", MenuAction::ZoomToFit),
                    ("Reset view", MenuAction::ResetView),
                    ("Clear canvas", MenuAction::ClearCanvas),
                ],
            ),
            MenuState::Node { node_id, pos, anchor } => (
                anchor.menu_pos(*pos),
                vec![
                    ("Duplicate", MenuAction::DuplicateNode(node_id.clone())),
                    ("Deselect", MenuAction::DeselectNode(node_id.clone())),
                    ("Delete", MenuAction::DeleteNode(node_id.clone())),
                ],
            ),
        };

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close();
            return None;
        }

        let mut picked = None;
        let area = egui::Area::new(egui::Id::new("canvas_context_menu"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(MENU_WIDTH);
                    ui.style_mut().spacing.item_spacing.y = 2.0;
                    for (label, action) in items {
                        let destructive = matches!(
                            action,
                            MenuAction::DeleteNode(_) | MenuAction::ClearCanvas
                        );
                        let text = if destructive {
                            egui::RichText::new(label).color(Color32::from_rgb(230, 110, 110))
                        } else {
                            egui::RichText::new(label)
                        };
                        if ui
                            .add(egui::Button::new(text).min_size(vec2(MENU_WIDTH, 22.0)))
                            .clicked()
                        {
                            picked = Some(action);
                        }
                    }
                });
            });

        // Close on any outside left-click. The secondary click that
        // opened the menu this frame must not count as outside.
        let pointer_pos = ctx.input(|i| i.pointer.interact_pos());
        let clicked_outside = ctx.input(|i| i.pointer.primary_clicked())
            && pointer_pos
                .map(|p| !area.response.rect.contains(p))
                .unwrap_or(true);

        if picked.is_some() || clicked_outside {
            self.close();
        }
        picked
    }
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(1000.0, 700.0))
    }

    #[test]
    fn anchor_flips_near_right_edge() {
        let anchor = AnchorCorner::at(pos2(850.0, 100.0), canvas());
        assert!(anchor.right);
        assert!(!anchor.bottom);
    }

    #[test]
    fn anchor_stays_default_away_from_edges() {
        let anchor = AnchorCorner::at(pos2(400.0, 300.0), canvas());
        assert!(!anchor.right);
        assert!(!anchor.bottom);
    }

    #[test]
    fn both_anchors_set_in_bottom_right_corner() {
        let anchor = AnchorCorner::at(pos2(950.0, 650.0), canvas());
        assert!(anchor.right);
        assert!(anchor.bottom);

        // The menu is placed fully above and left of the pointer.
        let pos = anchor.menu_pos(pos2(950.0, 650.0));
        assert!(pos.x < 950.0);
        assert!(pos.y < 650.0);
    }

    #[test]
    fn opening_one_menu_replaces_the_other() {
        let mut menu = MenuController::new();
        assert!(!menu.is_open());

        menu.open_pane(pos2(10.0, 10.0));
        assert!(matches!(menu.state(), MenuState::Pane { .. }));

        menu.open_node("VID-1".to_string(), pos2(20.0, 20.0), canvas());
        assert!(matches!(menu.state(), MenuState::Node { .. }));

        menu.close();
        assert!(!menu.is_open());
    }
}
