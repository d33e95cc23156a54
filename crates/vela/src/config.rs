//! Shell configuration.
//!
//! Parses `vela.toml` with serde. All sections and fields have defaults,
//! so an empty file (or no file at all, via [`ShellConfig::default`])
//! yields a working configuration reading documents from a local `data`
//! directory. Programmatic construction is equally supported; there are
//! no environment variables.
//!
//! ```toml
//! [content]
//! base_url = "https://cdn.example.com/site"
//! timeout_secs = 10
//!
//! [router]
//! default_page = "home"
//! navigation_id = "navigation"
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use vela_source::ContentSource;
use vela_source_fs::FsSource;
use vela_source_http::HttpSource;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}")]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config file {path}")]
    Parse {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
    /// Configuration is structurally valid but inconsistent.
    #[error("{0}")]
    Invalid(String),
}

/// Shell configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Where page documents come from.
    pub content: ContentConfig,
    /// Router behavior.
    pub router: RouterConfig,
}

impl ShellConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid for this schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Directory documents are read from when no backend is configured.
const DEFAULT_ROOT: &str = "data";

/// Content source configuration.
///
/// At most one of `root` (filesystem) or `base_url` (HTTP) selects the
/// backend; with neither set, documents are read from a local
/// [`DEFAULT_ROOT`] directory, matching the layout they ship in.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding `<page_id>.json` documents.
    pub root: Option<PathBuf>,
    /// Base URL serving `<page_id>.json` documents.
    pub base_url: Option<String>,
    /// Request timeout for the HTTP backend, in seconds.
    pub timeout_secs: Option<u64>,
}

impl ContentConfig {
    /// Build the configured content source backend.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when both `root` and `base_url`
    /// are set.
    pub fn build_source(&self) -> Result<Arc<dyn ContentSource>, ConfigError> {
        match (&self.root, &self.base_url) {
            (Some(root), None) => Ok(Arc::new(FsSource::new(root))),
            (None, Some(base_url)) => Ok(match self.timeout_secs {
                Some(secs) => Arc::new(HttpSource::with_timeout(
                    base_url,
                    Duration::from_secs(secs),
                )),
                None => Arc::new(HttpSource::new(base_url)),
            }),
            (Some(_), Some(_)) => Err(ConfigError::Invalid(
                "content sets both root and base_url; pick one backend".to_owned(),
            )),
            (None, None) => Ok(Arc::new(FsSource::new(DEFAULT_ROOT))),
        }
    }
}

/// Router configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RouterConfig {
    /// Page shown when no fragment targets one.
    pub default_page: String,
    /// Identifier of the navigation menu document.
    pub navigation_id: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_page: "home".to_owned(),
            navigation_id: vela_nav::NAVIGATION_DOC_ID.to_owned(),
        }
    }
}
