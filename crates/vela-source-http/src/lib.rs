//! HTTP content source for the Vela view engine.
//!
//! [`HttpSource`] fetches `<base_url>/<page_id>.json` with a shared ureq
//! agent. ureq is a blocking client, so each fetch runs on the tokio
//! blocking pool; the agent itself is cheap to clone and reuses
//! connections across fetches.

use std::time::Duration;

use async_trait::async_trait;
use ureq::Agent;
use vela_source::{ContentSource, ErrorStatus, SourceError, SourceErrorKind};

/// Default global timeout for a single document fetch.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP-backed content source.
///
/// Non-success statuses are mapped to semantic [`SourceErrorKind`]s
/// rather than surfaced as transport errors, so a 404 from the CDN reads
/// the same as a missing file from the filesystem backend.
#[derive(Clone)]
pub struct HttpSource {
    agent: Agent,
    base_url: String,
}

impl HttpSource {
    /// Create a source fetching documents under the given base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a source with a custom global request timeout.
    #[must_use]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Base URL documents are fetched under.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn document_url(&self, page_id: &str) -> String {
        format!("{}/{}.json", self.base_url, page_id)
    }
}

/// Map a non-success HTTP status to a source error.
fn classify_status(status: u16, page_id: &str) -> SourceError {
    let (kind, retry) = match status {
        404 | 410 => (SourceErrorKind::NotFound, ErrorStatus::Permanent),
        401 | 403 => (SourceErrorKind::PermissionDenied, ErrorStatus::Permanent),
        429 => (SourceErrorKind::RateLimited, ErrorStatus::Persistent),
        500..=599 => (SourceErrorKind::Unavailable, ErrorStatus::Persistent),
        _ => (SourceErrorKind::Other, ErrorStatus::Permanent),
    };
    SourceError::new(kind)
        .with_status(retry)
        .with_page(page_id)
        .with_backend("Http")
}

/// Map a ureq transport failure to a source error.
fn classify_transport(err: ureq::Error, page_id: &str) -> SourceError {
    let (kind, retry) = match &err {
        ureq::Error::Timeout(_) => (SourceErrorKind::Timeout, ErrorStatus::Temporary),
        ureq::Error::Io(_) => (SourceErrorKind::Unavailable, ErrorStatus::Persistent),
        _ => (SourceErrorKind::Other, ErrorStatus::Permanent),
    };
    SourceError::new(kind)
        .with_status(retry)
        .with_page(page_id)
        .with_backend("Http")
        .with_source(err)
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, page_id: &str) -> Result<Vec<u8>, SourceError> {
        let agent = self.agent.clone();
        let url = self.document_url(page_id);
        let id = page_id.to_owned();
        tracing::debug!(page_id, %url, "Fetching page document");

        tokio::task::spawn_blocking(move || {
            let response = agent
                .get(&url)
                .header("Accept", "application/json")
                .call()
                .map_err(|err| classify_transport(err, &id))?;

            let status = response.status().as_u16();
            if !(200..300).contains(&status) {
                return Err(classify_status(status, &id));
            }

            response
                .into_body()
                .read_to_vec()
                .map_err(|err| classify_transport(err, &id))
        })
        .await
        .map_err(|err| {
            SourceError::new(SourceErrorKind::Other)
                .with_page(page_id)
                .with_backend("Http")
                .with_source(err)
        })?
    }

    fn backend(&self) -> &'static str {
        "Http"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_document_url_composition() {
        let source = HttpSource::new("https://cdn.example.com/data/");

        assert_eq!(source.base_url(), "https://cdn.example.com/data");
        assert_eq!(
            source.document_url("case-studies"),
            "https://cdn.example.com/data/case-studies.json"
        );
    }

    #[test]
    fn test_classify_status_not_found() {
        let err = classify_status(404, "missing-page");

        assert_eq!(err.kind(), SourceErrorKind::NotFound);
        assert_eq!(err.status(), ErrorStatus::Permanent);
        assert_eq!(err.page_id(), Some("missing-page"));
    }

    #[test]
    fn test_classify_status_server_errors_are_persistent() {
        for status in [500, 502, 503] {
            let err = classify_status(status, "home");
            assert_eq!(err.kind(), SourceErrorKind::Unavailable, "status {status}");
            assert_eq!(err.status(), ErrorStatus::Persistent, "status {status}");
        }
    }

    #[test]
    fn test_classify_status_rate_limited() {
        let err = classify_status(429, "home");

        assert_eq!(err.kind(), SourceErrorKind::RateLimited);
        assert_eq!(err.status(), ErrorStatus::Persistent);
    }
}
