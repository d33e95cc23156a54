//! Vela: a content-driven view router for JSON-described sites.
//!
//! Vela is the core of a single-page application shell, independent of
//! any DOM or markup technology: page identifiers resolve to JSON page
//! documents, documents dispatch by declared type to pure render
//! strategies producing an abstract view tree, and a router keeps
//! navigation state (current page, history, title, active menu entry)
//! consistent with what is displayed.
//!
//! This crate assembles the engine crates behind one facade:
//!
//! - [`ShellConfig`] picks a content backend (filesystem or HTTP) and
//!   router behavior from `vela.toml` or programmatic construction
//! - [`Shell`] runs the startup flow (menu load with fallback, initial
//!   navigation from a URL fragment) and exposes the running router
//!
//! # Quick Start
//!
//! ```ignore
//! use vela::{Shell, ShellConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ShellConfig::load("vela.toml").unwrap();
//!     let shell = Shell::builder(config)
//!         .start(Some("#case-studies"))
//!         .await
//!         .unwrap();
//!
//!     let view = shell.router().current_view().unwrap();
//!     println!("{}", serde_json::to_string_pretty(&view).unwrap());
//! }
//! ```

mod config;
mod shell;

pub use config::{ConfigError, ContentConfig, RouterConfig, ShellConfig};
pub use shell::{Shell, ShellBuilder};
// Engine surface re-exported for hosts that embed the shell.
pub use vela_model::{NavEntry, NavLink, NavigationMenu, PageDocument, PageKind};
pub use vela_nav::{ActiveEntryTracker, active_entry, default_menu};
pub use vela_router::{
    FailureReason, History, NavigationOutcome, NullHistory, Router, RouterEvent, RouterState,
};
pub use vela_source::{ContentSource, SourceError, SourceErrorKind};
pub use vela_source_fs::FsSource;
pub use vela_source_http::HttpSource;
pub use vela_store::{ContentStore, FetchError};
pub use vela_view::{RenderStrategy, ViewDescription, ViewNode, ViewRegistry};
