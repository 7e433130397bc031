//! Content classification for dropped and pasted payloads.
//!
//! Files are classified from their declared MIME type, which is
//! authoritative and never touches the network. URLs go through a
//! layered scheme: a content-type probe first, then extension and
//! domain heuristics when the probe fails or is inconclusive.
//! Classification always resolves to a kind; it never errors out.

use tavla_types::ContentKind;

use crate::probe::{ProbeClient, ProbeResult};

/// Substrings that mark a URL as video content: known container
/// extensions, video-hosting domains, and path fragments typical of
/// player pages (which carry no extension at all).
const VIDEO_INDICATORS: &[&str] = &[
    ".mp4",
    ".webm",
    ".ogg",
    ".avi",
    ".mov",
    ".mkv",
    "youtube.com",
    "vimeo.com",
    "/video",
    "watch?",
    "embed",
];

/// Image file extensions recognized without probing.
const IMAGE_EXTENSIONS: &[&str] = &[".jpeg", ".jpg", ".gif", ".png", ".bmp", ".svg", ".webp"];

/// Whether a URL looks like video content.
pub fn is_video_url(url: &str) -> bool {
    let url = url.to_lowercase();
    VIDEO_INDICATORS.iter().any(|indicator| url.contains(indicator))
}

/// Whether a URL ends with a known image extension.
pub fn is_image_url(url: &str) -> bool {
    let url = url.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| url.ends_with(ext))
}

/// Classify a file from its declared MIME type.
///
/// Returns `None` for MIME types the canvas cannot display; callers
/// skip those files.
pub fn classify_mime(mime: &str) -> Option<ContentKind> {
    if mime.starts_with("image/") {
        Some(ContentKind::Image)
    } else if mime.starts_with("video/") {
        Some(ContentKind::Video)
    } else {
        None
    }
}

/// Offline classification of a URL from extension and domain indicators.
pub fn heuristic_kind(url: &str) -> ContentKind {
    if is_video_url(url) {
        ContentKind::Video
    } else if is_image_url(url) {
        ContentKind::Image
    } else {
        ContentKind::Link
    }
}

/// Resolve a URL's kind from a probe outcome.
///
/// A successful probe is authoritative for `image/*` and `video/*`;
/// any other content type falls through to the offline heuristics. On
/// probe failure the URL is assumed to be media: video if it matches a
/// video indicator, image otherwise. The worst case for a genuinely
/// ambiguous URL is a misclassification as image, never an error.
pub fn resolve_probed_kind(url: &str, probed: ProbeResult<String>) -> ContentKind {
    match probed {
        Ok(content_type) => {
            if content_type.starts_with("video") {
                ContentKind::Video
            } else if content_type.starts_with("image") {
                ContentKind::Image
            } else {
                heuristic_kind(url)
            }
        }
        Err(_) => {
            if is_video_url(url) {
                ContentKind::Video
            } else {
                ContentKind::Image
            }
        }
    }
}

/// Classify a URL, probing its content type over the network.
///
/// Probe errors are logged and absorbed; this always returns a kind.
pub async fn classify_url(probe: &ProbeClient, url: &str) -> ContentKind {
    let probed = probe.content_type(url).await;
    if let Err(ref err) = probed {
        tracing::debug!("Probe for {} failed, using heuristics: {}", url, err);
    }
    resolve_probed_kind(url, probed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeError;

    #[test]
    fn mime_classification_is_authoritative() {
        assert_eq!(classify_mime("image/png"), Some(ContentKind::Image));
        assert_eq!(classify_mime("image/svg+xml"), Some(ContentKind::Image));
        assert_eq!(classify_mime("video/mp4"), Some(ContentKind::Video));
        assert_eq!(classify_mime("video/webm"), Some(ContentKind::Video));
        assert_eq!(classify_mime("application/pdf"), None);
        assert_eq!(classify_mime("text/plain"), None);
    }

    #[test]
    fn video_urls_match_extensions_and_domains() {
        assert!(is_video_url("https://example.com/clip.mp4"));
        assert!(is_video_url("https://example.com/CLIP.MKV"));
        assert!(is_video_url("https://youtube.com/watch?v=abc"));
        assert!(is_video_url("https://vimeo.com/12345"));
        assert!(is_video_url("https://example.com/embed/42"));
        assert!(!is_video_url("https://example.com/photo.png"));
        assert!(!is_video_url("https://example.com/article"));
    }

    #[test]
    fn image_urls_match_by_extension_suffix() {
        assert!(is_image_url("https://example.com/photo.png"));
        assert!(is_image_url("https://example.com/photo.JPEG"));
        assert!(!is_image_url("https://example.com/photo.png?size=large"));
        assert!(!is_image_url("https://example.com/clip.mp4"));
    }

    #[test]
    fn heuristics_fall_back_to_link() {
        assert_eq!(heuristic_kind("https://example.com/clip.mp4"), ContentKind::Video);
        assert_eq!(heuristic_kind("https://example.com/photo.gif"), ContentKind::Image);
        assert_eq!(heuristic_kind("https://example.com/article"), ContentKind::Link);
    }

    #[test]
    fn successful_probe_is_authoritative() {
        let url = "https://example.com/asset";
        assert_eq!(
            resolve_probed_kind(url, Ok("image/png".to_string())),
            ContentKind::Image
        );
        assert_eq!(
            resolve_probed_kind(url, Ok("video/mp4; codecs=avc1".to_string())),
            ContentKind::Video
        );
    }

    #[test]
    fn inconclusive_probe_falls_through_to_heuristics() {
        assert_eq!(
            resolve_probed_kind("https://example.com/page", Ok("text/html".to_string())),
            ContentKind::Link
        );
        assert_eq!(
            resolve_probed_kind("https://example.com/clip.mov", Ok("text/html".to_string())),
            ContentKind::Video
        );
    }

    #[test]
    fn failed_probe_assumes_media() {
        let err = Err(ProbeError::Network("offline".to_string()));
        assert_eq!(
            resolve_probed_kind("https://example.com/clip.mp4", err.clone()),
            ContentKind::Video
        );
        // Ambiguous URLs default to image on probe failure.
        assert_eq!(
            resolve_probed_kind("https://example.com/mystery", err),
            ContentKind::Image
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn unreachable_probe_falls_back_without_error() {
        // Port 9 (discard) refuses immediately; no network access needed.
        let probe = ProbeClient::new();
        let kind = classify_url(&probe, "http://127.0.0.1:9/clip.mp4").await;
        assert_eq!(kind, ContentKind::Video);

        let kind = classify_url(&probe, "http://127.0.0.1:9/mystery").await;
        assert_eq!(kind, ContentKind::Image);
    }
}
