//! Metadata-only network probe for dropped URLs.
//!
//! Issues a HEAD request and reports the resolved `Content-Type`
//! without downloading the body. Probe failures are expected (offline,
//! CORS, dead hosts) and are absorbed by the classifier's heuristics.

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Probe errors.
#[derive(Debug, Clone)]
pub enum ProbeError {
    /// Network error (DNS, connection, CORS)
    Network(String),
    /// Non-success HTTP status
    Http(u16),
    /// Response carried no usable Content-Type header
    MissingContentType,
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeError::Network(msg) => write!(f, "Network error: {}", msg),
            ProbeError::Http(code) => write!(f, "HTTP {} error", code),
            ProbeError::MissingContentType => write!(f, "No Content-Type header"),
        }
    }
}

/// Client for content-type probes.
#[derive(Clone)]
pub struct ProbeClient {
    client: reqwest::Client,
}

impl ProbeClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the Content-Type of a URL via a HEAD request.
    ///
    /// No retries and no explicit timeout: a probe resolves when the
    /// request completes or errors, and the caller falls back to
    /// heuristics on any error.
    pub async fn content_type(&self, url: &str) -> ProbeResult<String> {
        tracing::debug!("Probing content type of {}", url);

        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| ProbeError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProbeError::Http(response.status().as_u16()));
        }

        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
            .ok_or(ProbeError::MissingContentType)
    }
}

impl Default for ProbeClient {
    fn default() -> Self {
        Self::new()
    }
}
