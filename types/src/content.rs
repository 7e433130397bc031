//! Content classification verdicts.

use serde::{Deserialize, Serialize};

/// The kind of content a drop payload denotes.
///
/// Produced by the classifier from a MIME type, a probed content type,
/// or URL heuristics. Classification always resolves to one of these;
/// it never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Image,
    Video,
    /// A plain reference, displayed as a clickable link rather than
    /// embedded media.
    Link,
    Text,
}
