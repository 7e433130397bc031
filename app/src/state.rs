//! Application state and channel-based IPC for async operations.

use std::sync::mpsc::{channel, Receiver, Sender};
use tavla_types::GraphNode;

/// Messages sent from async operations to the main UI thread.
#[derive(Debug)]
pub enum AppMessage {
    /// A dropped URL finished classification and produced a node.
    ///
    /// `epoch` is the canvas epoch captured when the probe was
    /// dispatched; a stale epoch means the canvas was cleared in the
    /// meantime and the node must be discarded.
    UrlResolved { node: GraphNode, epoch: u64 },
}

/// Application state with channel-based communication.
pub struct AppStateChannels {
    /// Sender for app messages (cloned for each async operation)
    pub tx: Sender<AppMessage>,
    /// Receiver for app messages (owned by main UI thread)
    pub rx: Receiver<AppMessage>,
}

impl AppStateChannels {
    /// Create new application state channels.
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// Get a clone of the sender for use in async operations.
    pub fn sender(&self) -> Sender<AppMessage> {
        self.tx.clone()
    }
}

impl Default for AppStateChannels {
    fn default() -> Self {
        Self::new()
    }
}
