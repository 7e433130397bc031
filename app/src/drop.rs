//! Drop and paste handling: turns raw payloads into canvas nodes.
//!
//! Extraction reads the frame's raw input once and normalizes it into a
//! [`DropPayload`]. Handling is synchronous wherever classification can
//! be decided locally (file MIME types, obvious video URLs, plain
//! links and text); only URLs that need a content-type probe go through
//! an async task, which commits its node back through the app channel.

use std::sync::mpsc::Sender;

use egui::Pos2;
use tavla_types::{ContentKind, GraphNode, Position};

use crate::classify;
use crate::graph::CanvasEditor;
use crate::probe::ProbeClient;
use crate::state::AppMessage;

/// MIME types under which browsers and file managers deliver a dragged
/// URL, tried in priority order.
const URI_LIST_MIMES: &[&str] = &["text/uri-list", "text/x-moz-url"];

/// A media file extracted from a drop, with a displayable reference.
#[derive(Debug, Clone)]
pub struct DroppedMedia {
    /// Original file name (for logs)
    pub name: String,
    /// Declared MIME type
    pub mime: String,
    /// Displayable reference: a registered byte buffer on the web, a
    /// local path natively
    pub uri: String,
}

/// Everything one drop/paste gesture carried, normalized.
#[derive(Debug, Clone, Default)]
pub struct DropPayload {
    /// A dragged URL, if any
    pub uri: Option<String>,
    /// Dropped media files, in drop order
    pub files: Vec<DroppedMedia>,
    /// Pasted plain text, if any
    pub text: Option<String>,
    /// Pointer position in screen coordinates at drop time
    pub pointer: Pos2,
}

impl DropPayload {
    pub fn is_empty(&self) -> bool {
        self.uri.is_none() && self.files.is_empty() && self.text.is_none()
    }
}

/// Collect this frame's drop/paste payload from the egui input, if any.
///
/// Dropped files are inspected for URL carriers first (several MIME
/// keys, to cover the ways different browsers hand over a dragged
/// link); remaining files keep their MIME type and get a displayable
/// reference. Pasted text that parses as an http(s) URL is treated as a
/// dropped URL rather than literal text.
pub fn collect_payload(ctx: &egui::Context) -> Option<DropPayload> {
    // Paste goes to a focused text field, not the canvas
    let text_field_focused = ctx.wants_keyboard_input();

    let (dropped_files, pasted, pointer) = ctx.input(|i| {
        let pasted = if text_field_focused {
            None
        } else {
            i.events.iter().find_map(|e| match e {
                egui::Event::Paste(text) if !text.trim().is_empty() => Some(text.clone()),
                _ => None,
            })
        };
        (
            i.raw.dropped_files.clone(),
            pasted,
            i.pointer.latest_pos().unwrap_or(Pos2::ZERO),
        )
    });

    if dropped_files.is_empty() && pasted.is_none() {
        return None;
    }

    let mut payload = DropPayload {
        pointer,
        ..Default::default()
    };

    for file in &dropped_files {
        // URL carrier?
        if payload.uri.is_none() && URI_LIST_MIMES.iter().any(|m| file.mime.starts_with(m)) {
            if let Some(uri) = file
                .bytes
                .as_deref()
                .and_then(|bytes| std::str::from_utf8(bytes).ok())
                .and_then(first_uri_line)
            {
                payload.uri = Some(uri);
                continue;
            }
        }

        // Media file: register its bytes with the image loader (web) or
        // reference its path (native)
        let uri = if let Some(bytes) = file.bytes.clone() {
            let uri = format!("bytes://dropped/{}", file.name);
            ctx.include_bytes(uri.clone(), bytes);
            uri
        } else if let Some(path) = &file.path {
            format!("file://{}", path.display())
        } else {
            tracing::debug!("Dropped file {} has neither bytes nor path, skipping", file.name);
            continue;
        };

        payload.files.push(DroppedMedia {
            name: file.name.clone(),
            mime: file.mime.clone(),
            uri,
        });
    }

    if let Some(text) = pasted {
        let trimmed = text.trim().to_string();
        if is_http_url(&trimmed) && payload.uri.is_none() {
            payload.uri = Some(trimmed);
        } else {
            payload.text = Some(trimmed);
        }
    }

    if payload.is_empty() {
        None
    } else {
        Some(payload)
    }
}

fn is_http_url(s: &str) -> bool {
    (s.starts_with("http://") || s.starts_with("https://")) && !s.contains(char::is_whitespace)
}

/// First non-comment line of a `text/uri-list` body.
fn first_uri_line(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}

/// Commit a node resolved by an async probe, unless the canvas was
/// cleared since the probe was dispatched. Returns whether the node was
/// inserted.
pub fn commit_resolved(canvas: &mut CanvasEditor, node: GraphNode, epoch: u64) -> bool {
    if canvas.epoch() != epoch {
        tracing::debug!(
            "Discarding stale drop resolution {} (epoch {} != {})",
            node.id,
            epoch,
            canvas.epoch()
        );
        return false;
    }
    canvas.insert_node(node);
    true
}

/// Orchestrates one drop/paste gesture end to end.
pub struct DropCoordinator {
    probe: ProbeClient,
    tx: Sender<AppMessage>,
}

impl DropCoordinator {
    pub fn new(probe: ProbeClient, tx: Sender<AppMessage>) -> Self {
        Self { probe, tx }
    }

    /// Handle one payload. Everything classifiable without the network
    /// is committed before this returns, in payload order; URLs needing
    /// a probe resolve later through the app channel.
    pub fn handle(&self, payload: DropPayload, canvas: &mut CanvasEditor, ctx: &egui::Context) {
        let pointer = canvas.screen_to_world(payload.pointer);

        if let Some(uri) = payload.uri {
            if classify::is_video_url(&uri) {
                // Obviously video: no probe, no perceptible delay
                canvas.insert_node(GraphNode::video(uri, pointer.offset(-100.0, -100.0)));
            } else if !classify::is_image_url(&uri) {
                // Neither image nor video by extension: a plain link,
                // placed exactly under the cursor
                canvas.insert_node(GraphNode::link(uri, pointer));
            } else {
                // Needs network confirmation
                self.resolve_url(uri, pointer, canvas.epoch(), ctx.clone());
            }
        }

        for file in payload.files {
            let position = pointer.offset(-100.0, -100.0);
            match classify::classify_mime(&file.mime) {
                Some(ContentKind::Image) => {
                    canvas.insert_node(GraphNode::image(file.uri, position));
                }
                Some(ContentKind::Video) => {
                    canvas.insert_node(GraphNode::video(file.uri, position));
                }
                _ => {
                    tracing::debug!("Ignoring dropped file {} ({})", file.name, file.mime);
                }
            }
        }

        if let Some(text) = payload.text {
            canvas.insert_node(GraphNode::text(text, pointer));
        }
    }

    /// Probe a URL's content type and commit the resolved node through
    /// the app channel. Probe failures fall back to heuristics inside
    /// the task; nothing is surfaced to the user.
    fn resolve_url(&self, uri: String, position: Position, epoch: u64, ctx: egui::Context) {
        let probe = self.probe.clone();
        let tx = self.tx.clone();

        crate::app::spawn_task(async move {
            let kind = classify::classify_url(&probe, &uri).await;
            let node = match kind {
                ContentKind::Video => GraphNode::video(uri, position.offset(-100.0, -100.0)),
                ContentKind::Image => GraphNode::image_selected(uri, position),
                _ => GraphNode::link(uri, position),
            };
            let _ = tx.send(AppMessage::UrlResolved { node, epoch });
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Rect};
    use std::sync::mpsc::{channel, Receiver};
    use tavla_types::{NodeKind, NodePayload};

    fn coordinator() -> (DropCoordinator, Receiver<AppMessage>) {
        let (tx, rx) = channel();
        (DropCoordinator::new(ProbeClient::new(), tx), rx)
    }

    fn canvas() -> CanvasEditor {
        let mut canvas = CanvasEditor::new();
        // Identity transform: canvas origin at (0, 0), zoom 1
        canvas.set_canvas_rect(Rect::from_min_size(pos2(0.0, 0.0), vec2(1200.0, 800.0)));
        canvas
    }

    #[test]
    fn obvious_video_url_commits_synchronously() {
        let (drops, _rx) = coordinator();
        let mut canvas = canvas();
        let payload = DropPayload {
            uri: Some("https://youtube.com/watch?v=abc".to_string()),
            pointer: pos2(400.0, 300.0),
            ..Default::default()
        };

        drops.handle(payload, &mut canvas, &egui::Context::default());

        assert_eq!(canvas.nodes().len(), 1);
        let node = &canvas.nodes()[0];
        assert_eq!(node.kind(), NodeKind::Video);
        assert_eq!(node.position, Position::new(300.0, 200.0));
        assert!(!node.selected);
    }

    #[test]
    fn video_extension_url_needs_no_network() {
        let (drops, _rx) = coordinator();
        let mut canvas = canvas();
        let payload = DropPayload {
            uri: Some("https://example.com/clip.mp4".to_string()),
            pointer: pos2(150.0, 120.0),
            ..Default::default()
        };

        drops.handle(payload, &mut canvas, &egui::Context::default());

        let node = &canvas.nodes()[0];
        assert_eq!(node.kind(), NodeKind::Video);
        assert_eq!(node.position, Position::new(50.0, 20.0));
    }

    #[test]
    fn plain_url_becomes_link_under_cursor() {
        let (drops, _rx) = coordinator();
        let mut canvas = canvas();
        let payload = DropPayload {
            uri: Some("https://example.com/article".to_string()),
            pointer: pos2(40.0, 60.0),
            ..Default::default()
        };

        drops.handle(payload, &mut canvas, &egui::Context::default());

        assert_eq!(canvas.nodes().len(), 1);
        let node = &canvas.nodes()[0];
        assert_eq!(node.kind(), NodeKind::Link);
        assert_eq!(node.position, Position::new(40.0, 60.0));
    }

    #[test]
    fn pasted_text_becomes_text_node_at_pointer() {
        let (drops, _rx) = coordinator();
        let mut canvas = canvas();
        let payload = DropPayload {
            text: Some("hello world".to_string()),
            pointer: pos2(40.0, 60.0),
            ..Default::default()
        };

        drops.handle(payload, &mut canvas, &egui::Context::default());

        assert_eq!(canvas.nodes().len(), 1);
        let node = &canvas.nodes()[0];
        assert_eq!(
            node.payload,
            NodePayload::Text {
                text: "hello world".to_string()
            }
        );
        assert_eq!(node.position, Position::new(40.0, 60.0));
    }

    #[test]
    fn multiple_files_commit_in_order_before_return() {
        let (drops, _rx) = coordinator();
        let mut canvas = canvas();
        let payload = DropPayload {
            files: vec![
                DroppedMedia {
                    name: "a.png".to_string(),
                    mime: "image/png".to_string(),
                    uri: "bytes://dropped/a.png".to_string(),
                },
                DroppedMedia {
                    name: "b.mp4".to_string(),
                    mime: "video/mp4".to_string(),
                    uri: "bytes://dropped/b.mp4".to_string(),
                },
                DroppedMedia {
                    name: "notes.pdf".to_string(),
                    mime: "application/pdf".to_string(),
                    uri: "bytes://dropped/notes.pdf".to_string(),
                },
            ],
            pointer: pos2(500.0, 500.0),
            ..Default::default()
        };

        drops.handle(payload, &mut canvas, &egui::Context::default());

        // The PDF is skipped; the two media files commit in drop order
        // with distinct ids, centered under the cursor.
        assert_eq!(canvas.nodes().len(), 2);
        assert_eq!(canvas.nodes()[0].kind(), NodeKind::Image);
        assert_eq!(canvas.nodes()[1].kind(), NodeKind::Video);
        assert_ne!(canvas.nodes()[0].id, canvas.nodes()[1].id);
        for node in canvas.nodes() {
            assert_eq!(node.position, Position::new(400.0, 400.0));
            assert!(!node.selected);
        }
    }

    #[test]
    fn empty_payload_creates_nothing() {
        let (drops, _rx) = coordinator();
        let mut canvas = canvas();
        drops.handle(DropPayload::default(), &mut canvas, &egui::Context::default());
        assert!(canvas.nodes().is_empty());
    }

    #[test]
    fn stale_epoch_discards_resolved_node() {
        let mut canvas = canvas();
        let epoch = canvas.epoch();
        let node = GraphNode::image_selected("https://example.com/a.png", Position::new(1.0, 2.0));

        canvas.clear();

        assert!(!commit_resolved(&mut canvas, node.clone(), epoch));
        assert!(canvas.nodes().is_empty());

        // A fresh epoch commits normally.
        let fresh_epoch = canvas.epoch();
        assert!(commit_resolved(&mut canvas, node, fresh_epoch));
        assert_eq!(canvas.nodes().len(), 1);
    }

    #[test]
    fn uri_list_extraction_skips_comments() {
        assert_eq!(
            first_uri_line("# comment\nhttps://example.com/a\nhttps://example.com/b"),
            Some("https://example.com/a".to_string())
        );
        assert_eq!(first_uri_line("# only a comment\n"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn ambiguous_url_resolves_through_channel() {
        use std::time::Duration;

        let (drops, rx) = coordinator();
        let mut canvas = canvas();
        let payload = DropPayload {
            // Image extension forces the probe path; the probe fails
            // fast (connection refused) and heuristics take over.
            uri: Some("http://127.0.0.1:9/photo.png".to_string()),
            pointer: pos2(200.0, 200.0),
            ..Default::default()
        };

        drops.handle(payload, &mut canvas, &egui::Context::default());

        // The async path commits nothing before the probe resolves.
        assert!(canvas.nodes().is_empty());

        let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
        let msg = loop {
            if let Ok(msg) = rx.try_recv() {
                break msg;
            }
            assert!(tokio::time::Instant::now() < deadline, "probe result never arrived");
            tokio::time::sleep(Duration::from_millis(10)).await;
        };

        let AppMessage::UrlResolved { node, epoch } = msg;
        assert!(commit_resolved(&mut canvas, node, epoch));

        let node = &canvas.nodes()[0];
        assert_eq!(node.kind(), NodeKind::Image);
        assert!(node.selected);
        assert_eq!(node.position, Position::new(200.0, 200.0));
    }
}
