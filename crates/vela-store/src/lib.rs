//! Session document cache for the Vela view engine.
//!
//! [`ContentStore`] sits between the router and a [`ContentSource`]: it
//! fetches page documents by identifier, parses them, and caches parsed
//! documents for the lifetime of the session. The cache is append-only
//! and keyed by page identifier; there is no eviction because the
//! dataset (a site's pages) is small and finite.
//!
//! Failed fetches are never cached, so a later call for the same
//! identifier retries the source. A [`ContentStore::refresh`] call
//! bypasses the hit check and overwrites the cached entry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use vela_model::PageDocument;
use vela_source::{ContentSource, SourceError, SourceErrorKind};

/// Failure to produce a page document, classified for the navigation
/// boundary.
///
/// All variants carry the requested page identifier; the router treats
/// them uniformly (they all end a navigation in the failed state) but
/// reports the distinction in its events.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No document exists for the page identifier.
    #[error("No document for page '{0}'")]
    NotFound(String),
    /// The document could not be parsed.
    #[error("Malformed document for page '{page_id}'")]
    Malformed {
        /// Requested page identifier.
        page_id: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The source failed at the transport level.
    #[error("Content source failure for page '{0}'")]
    Network(String, #[source] SourceError),
    /// The fetch timed out.
    #[error("Timed out fetching page '{0}'")]
    Timeout(String),
}

impl FetchError {
    /// The page identifier the failed fetch was for.
    #[must_use]
    pub fn page_id(&self) -> &str {
        match self {
            Self::NotFound(id) | Self::Network(id, _) | Self::Timeout(id) => id,
            Self::Malformed { page_id, .. } => page_id,
        }
    }

    fn from_source(page_id: &str, err: SourceError) -> Self {
        match err.kind() {
            SourceErrorKind::NotFound => Self::NotFound(page_id.to_owned()),
            SourceErrorKind::Timeout => Self::Timeout(page_id.to_owned()),
            _ => Self::Network(page_id.to_owned(), err),
        }
    }
}

/// Session cache of parsed page documents in front of a [`ContentSource`].
///
/// Documents are immutable once parsed, so the cache hands out
/// `Arc<PageDocument>` clones. All writes happen on the router's single
/// control path; the lock is held only for map access, never across a
/// fetch.
pub struct ContentStore {
    source: Arc<dyn ContentSource>,
    cache: RwLock<HashMap<String, Arc<PageDocument>>>,
}

impl ContentStore {
    /// Create a store over the given source.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the document for a page identifier, fetching on a cache miss.
    ///
    /// A cache hit returns immediately without touching the source.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the source fails or the document does
    /// not parse. Failures are not cached; calling again retries.
    pub async fn get(&self, page_id: &str) -> Result<Arc<PageDocument>, FetchError> {
        if let Some(doc) = self.cached(page_id) {
            tracing::debug!(page_id, "Document cache hit");
            return Ok(doc);
        }
        self.fetch_and_cache(page_id).await
    }

    /// Re-fetch a document, overwriting any cached entry.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the source fails or the document does
    /// not parse. The previously cached entry (if any) is kept on
    /// failure.
    pub async fn refresh(&self, page_id: &str) -> Result<Arc<PageDocument>, FetchError> {
        self.fetch_and_cache(page_id).await
    }

    /// Look up a cached document without fetching.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn cached(&self, page_id: &str) -> Option<Arc<PageDocument>> {
        self.cache.read().unwrap().get(page_id).cloned()
    }

    async fn fetch_and_cache(&self, page_id: &str) -> Result<Arc<PageDocument>, FetchError> {
        let bytes = self
            .source
            .fetch(page_id)
            .await
            .map_err(|err| FetchError::from_source(page_id, err))?;

        let mut doc = PageDocument::from_json(&bytes).map_err(|source| FetchError::Malformed {
            page_id: page_id.to_owned(),
            source,
        })?;

        // Documents may omit their own identifier; the lookup key is
        // authoritative.
        if doc.page_id.is_empty() {
            doc.page_id = page_id.to_owned();
        }

        tracing::debug!(page_id, kind = ?doc.kind, "Document fetched and cached");
        let doc = Arc::new(doc);
        self.cache
            .write()
            .unwrap()
            .insert(page_id.to_owned(), Arc::clone(&doc));
        Ok(doc)
    }
}
