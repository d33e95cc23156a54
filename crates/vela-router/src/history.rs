//! Browser history integration seam.
//!
//! The router pushes page identifiers into the host's history and asks
//! it to go back; the host calls
//! [`Router::handle_pop`](crate::Router::handle_pop) when the
//! environment reports a back/forward navigation carrying a previously
//! pushed identifier. Environments without history (tests, embedded
//! previews) use [`NullHistory`].

#[cfg(any(test, feature = "mock"))]
use std::sync::Mutex;
#[cfg(any(test, feature = "mock"))]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Host history integration.
pub trait History: Send + Sync {
    /// Associate a new history entry with a page identifier.
    fn push(&self, page_id: &str);

    /// Ask the host to navigate one entry back.
    ///
    /// The host reports the resulting entry through
    /// [`Router::handle_pop`](crate::Router::handle_pop); this call
    /// itself changes no router state.
    fn back(&self);
}

/// No-op [`History`] for hosts without history integration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHistory;

impl History for NullHistory {
    fn push(&self, _page_id: &str) {}

    fn back(&self) {}
}

/// Recording [`History`] for tests.
///
/// Captures every pushed page identifier and counts back requests.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default)]
pub struct RecordingHistory {
    pushes: Mutex<Vec<String>>,
    backs: AtomicUsize,
}

#[cfg(any(test, feature = "mock"))]
impl RecordingHistory {
    /// Create an empty recording history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Page identifiers pushed so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn pushes(&self) -> Vec<String> {
        self.pushes.lock().unwrap().clone()
    }

    /// Number of back requests so far.
    #[must_use]
    pub fn back_count(&self) -> usize {
        self.backs.load(Ordering::Relaxed)
    }
}

#[cfg(any(test, feature = "mock"))]
impl History for RecordingHistory {
    fn push(&self, page_id: &str) {
        self.pushes.lock().unwrap().push(page_id.to_owned());
    }

    fn back(&self) {
        self.backs.fetch_add(1, Ordering::Relaxed);
    }
}
