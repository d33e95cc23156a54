//! Content source abstraction for the Vela view engine.
//!
//! This crate provides a [`ContentSource`] trait for fetching raw page
//! documents by page identifier, decoupled from the transport that
//! serves them. This enables:
//!
//! - **Unit testing** without a network or filesystem
//! - **Backend flexibility** (static files, HTTP/CDN, embedded assets)
//! - **Clean separation** between navigation logic and I/O
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ContentSource`] trait with a single async `fetch()` method
//! - [`SourceError`] with semantic kinds and retry guidance
//! - [`MockSource`] for testing (behind the `mock` feature flag)
//!
//! Concrete backends live in sibling crates (`vela-source-fs`,
//! `vela-source-http`).

#[cfg(feature = "mock")]
mod mock;
mod source;

#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use source::{ContentSource, ErrorStatus, SourceError, SourceErrorKind};
