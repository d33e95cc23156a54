//! Content source trait and error types.
//!
//! Provides the core [`ContentSource`] trait for fetching raw documents
//! by page identifier, along with [`SourceError`] for unified error
//! handling across backends.
//!
//! # Page Identifiers
//!
//! Page identifiers are opaque, non-empty strings chosen by the content
//! author (e.g. `"home"`, `"ai-ml"`, `"case-studies"`). A source does not
//! validate identifiers against a known set; any string is a legal lookup
//! key, and a key with no document behind it fails with
//! [`SourceErrorKind::NotFound`]. Backends may reject identifiers their
//! transport cannot express (e.g. path separators in a filesystem
//! backend) with [`SourceErrorKind::InvalidId`].

use async_trait::async_trait;

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceErrorKind {
    /// No document exists for the page identifier.
    NotFound,
    /// Permission denied by the backing store.
    PermissionDenied,
    /// Identifier cannot be expressed by this backend.
    InvalidId,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Too many requests.
    RateLimited,
    /// Fetch timed out.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Retry guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorStatus {
    /// Don't retry (not found, invalid identifier).
    #[default]
    Permanent,
    /// Retry immediately (timeout, connection reset).
    Temporary,
    /// Retry with backoff (rate limited, service unavailable).
    Persistent,
}

/// Source error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct SourceError {
    kind: SourceErrorKind,
    status: ErrorStatus,
    page_id: Option<String>,
    backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    /// Create a new source error.
    #[must_use]
    pub fn new(kind: SourceErrorKind) -> Self {
        Self {
            kind,
            status: ErrorStatus::Permanent,
            page_id: None,
            backend: None,
            source: None,
        }
    }

    /// Attach the page identifier that was requested.
    #[must_use]
    pub fn with_page(mut self, page_id: impl Into<String>) -> Self {
        self.page_id = Some(page_id.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set retry status.
    #[must_use]
    pub fn with_status(mut self, status: ErrorStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error for a page identifier.
    #[must_use]
    pub fn not_found(page_id: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::NotFound).with_page(page_id)
    }

    /// Create a source error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, page_id: Option<String>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => SourceErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => SourceErrorKind::PermissionDenied,
            std::io::ErrorKind::TimedOut => SourceErrorKind::Timeout,
            _ => SourceErrorKind::Other,
        };
        let status = match err.kind() {
            std::io::ErrorKind::TimedOut => ErrorStatus::Temporary,
            _ => ErrorStatus::Permanent,
        };
        let mut error = Self::new(kind).with_status(status).with_source(err);
        if let Some(id) = page_id {
            error = error.with_page(id);
        }
        error
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    /// Retry guidance.
    #[must_use]
    pub fn status(&self) -> ErrorStatus {
        self.status
    }

    /// The page identifier that was requested, if recorded.
    #[must_use]
    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }

    /// Backend identifier, if recorded.
    #[must_use]
    pub fn backend(&self) -> Option<&'static str> {
        self.backend
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (page: home)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            SourceErrorKind::NotFound => "Not found",
            SourceErrorKind::PermissionDenied => "Permission denied",
            SourceErrorKind::InvalidId => "Invalid page identifier",
            SourceErrorKind::Unavailable => "Unavailable",
            SourceErrorKind::RateLimited => "Rate limited",
            SourceErrorKind::Timeout => "Timeout",
            SourceErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(page_id) = &self.page_id {
            write!(f, " (page: {page_id})")?;
        }

        Ok(())
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Content source abstraction for fetching documents by page identifier.
///
/// A source resolves a page identifier to the raw bytes of a structured
/// document. Parsing and caching are the caller's concern; a source is a
/// dumb pipe to the transport and performs no retries of its own.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the raw document bytes for a page identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] with [`SourceErrorKind::NotFound`] when no
    /// document exists for the identifier, and other kinds for transport
    /// failures. Errors carry the page identifier and backend tag where
    /// available.
    async fn fetch(&self, page_id: &str) -> Result<Vec<u8>, SourceError>;

    /// Short backend tag used in logs and error context (e.g. "Fs").
    fn backend(&self) -> &'static str;
}
