//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing without network or
//! filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::source::{ContentSource, SourceError, SourceErrorKind};

/// Mock content source for testing.
///
/// Stores documents in memory. Use the builder methods to configure the
/// mock with test data, scripted failures, and artificial fetch delays.
/// Every call to `fetch` is counted, so tests can assert on cache
/// behavior in layers above.
///
/// # Example
///
/// ```ignore
/// use vela_source::{ContentSource, MockSource};
///
/// let source = MockSource::new()
///     .with_document("home", br#"{"type": "home"}"#.to_vec())
///     .with_error("broken", SourceErrorKind::Unavailable);
///
/// let bytes = source.fetch("home").await.unwrap();
/// assert_eq!(source.fetch_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    documents: RwLock<HashMap<String, Vec<u8>>>,
    errors: RwLock<HashMap<String, SourceErrorKind>>,
    delays: RwLock<HashMap<String, Duration>>,
    fetch_calls: AtomicU64,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document under a page identifier.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(self, page_id: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.documents
            .write()
            .unwrap()
            .insert(page_id.into(), bytes.into());
        self
    }

    /// Script a failure for a page identifier.
    ///
    /// Takes precedence over any document stored under the same
    /// identifier.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_error(self, page_id: impl Into<String>, kind: SourceErrorKind) -> Self {
        self.errors.write().unwrap().insert(page_id.into(), kind);
        self
    }

    /// Delay fetches of a page identifier by the given duration.
    ///
    /// Combined with `tokio::test(start_paused = true)` this lets tests
    /// script which of two concurrent fetches resolves first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_delay(self, page_id: impl Into<String>, delay: Duration) -> Self {
        self.delays.write().unwrap().insert(page_id.into(), delay);
        self
    }

    /// Number of `fetch` calls made against this source.
    #[must_use]
    pub fn fetch_count(&self) -> u64 {
        self.fetch_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ContentSource for MockSource {
    async fn fetch(&self, page_id: &str) -> Result<Vec<u8>, SourceError> {
        self.fetch_calls.fetch_add(1, Ordering::Relaxed);

        let delay = self.delays.read().unwrap().get(page_id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(kind) = self.errors.read().unwrap().get(page_id) {
            return Err(SourceError::new(*kind)
                .with_page(page_id)
                .with_backend(self.backend()));
        }

        self.documents
            .read()
            .unwrap()
            .get(page_id)
            .cloned()
            .ok_or_else(|| SourceError::not_found(page_id).with_backend(self.backend()))
    }

    fn backend(&self) -> &'static str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_stored_document() {
        let source = MockSource::new().with_document("home", b"{}".to_vec());

        let bytes = source.fetch("home").await.unwrap();

        assert_eq!(bytes, b"{}");
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_is_not_found() {
        let source = MockSource::new();

        let err = source.fetch("missing").await.unwrap_err();

        assert_eq!(err.kind(), SourceErrorKind::NotFound);
        assert_eq!(err.page_id(), Some("missing"));
        assert_eq!(err.backend(), Some("Mock"));
    }

    #[tokio::test]
    async fn test_scripted_error_wins_over_document() {
        let source = MockSource::new()
            .with_document("flaky", b"{}".to_vec())
            .with_error("flaky", SourceErrorKind::Unavailable);

        let err = source.fetch("flaky").await.unwrap_err();

        assert_eq!(err.kind(), SourceErrorKind::Unavailable);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_suspends_fetch() {
        let source = MockSource::new()
            .with_document("slow", b"{}".to_vec())
            .with_delay("slow", Duration::from_secs(5));

        let started = tokio::time::Instant::now();
        source.fetch("slow").await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(5));
    }
}
