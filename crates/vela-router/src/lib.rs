//! Navigation state machine for the Vela view engine.
//!
//! The [`Router`] owns current-page state and orchestrates a navigation
//! from intent to displayed view: fetch through the content store,
//! render through the view registry, then update history, title, and
//! subscribers. Failures stop at the navigation boundary: they become
//! a fixed error view and a [`RouterEvent::NavigationFailed`]
//! notification, never a propagated error.
//!
//! # Concurrency
//!
//! All navigation runs on a single logical control path with cooperative
//! suspension; the only coordination needed is the "last navigation
//! wins" rule: when a second navigation starts while the first is still
//! loading, the first's result is discarded on arrival, before any side
//! effect. See [`Router::navigate`].

mod event;
mod history;
mod router;

pub use event::{FailureReason, RouterEvent};
#[cfg(any(test, feature = "mock"))]
pub use history::RecordingHistory;
pub use history::{History, NullHistory};
pub use router::{NavigationOutcome, Router, RouterState};
