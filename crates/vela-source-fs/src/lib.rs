//! Filesystem content source for the Vela view engine.
//!
//! [`FsSource`] maps a page identifier to `<root>/<page_id>.json` and
//! reads it with `tokio::fs`. This is the backend used when the page
//! documents ship alongside the application as static files.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use vela_source::{ContentSource, SourceError, SourceErrorKind};

/// Filesystem-backed content source.
///
/// Page identifiers become file names, never paths: identifiers
/// containing path separators or parent-directory components are
/// rejected before touching the filesystem, so a lookup key cannot
/// escape the document root.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source reading documents under the given root directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Document root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, page_id: &str) -> Result<PathBuf, SourceError> {
        if page_id.is_empty() || page_id.contains(['/', '\\']) || page_id.contains("..") {
            return Err(SourceError::new(SourceErrorKind::InvalidId)
                .with_page(page_id)
                .with_backend(self.backend()));
        }
        Ok(self.root.join(format!("{page_id}.json")))
    }
}

#[async_trait]
impl ContentSource for FsSource {
    async fn fetch(&self, page_id: &str) -> Result<Vec<u8>, SourceError> {
        let path = self.document_path(page_id)?;
        tracing::debug!(page_id, path = %path.display(), "Reading page document");

        tokio::fs::read(&path).await.map_err(|err| {
            SourceError::io(err, Some(page_id.to_owned())).with_backend(self.backend())
        })
    }

    fn backend(&self) -> &'static str {
        "Fs"
    }
}
