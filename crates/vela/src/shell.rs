//! Shell assembly and startup flow.
//!
//! [`Shell`] wires the engine together and runs the boot sequence:
//! build the content source, load the navigation menu (falling back to
//! the hardcoded default when unavailable), then navigate to the page
//! named by the URL fragment. After startup the host drives the
//! shell through its router and reads navigation state back through
//! [`Shell::active_link`].

use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use vela_model::{NavLink, NavigationMenu};
use vela_nav::{ActiveEntryTracker, load_menu};
use vela_router::{History, NavigationOutcome, NullHistory, Router, RouterEvent};
use vela_source::ContentSource;
use vela_store::ContentStore;
use vela_view::ViewRegistry;

use crate::config::{ConfigError, ShellConfig};

/// A running view-router shell.
pub struct Shell {
    router: Arc<Router>,
    menu: NavigationMenu,
    tracker: Mutex<TrackerState>,
}

/// Active-entry tracking state: the event subscription plus the
/// derivation it feeds. Events are drained lazily on read, which keeps
/// the shell on a single logical thread of control.
struct TrackerState {
    events: broadcast::Receiver<RouterEvent>,
    tracker: ActiveEntryTracker,
}

impl Shell {
    /// Start building a shell from configuration.
    #[must_use]
    pub fn builder(config: ShellConfig) -> ShellBuilder {
        ShellBuilder {
            config,
            source: None,
            history: Arc::new(NullHistory),
        }
    }

    /// The router driving this shell.
    #[must_use]
    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    /// The navigation menu loaded at startup (or the fallback).
    #[must_use]
    pub fn menu(&self) -> &NavigationMenu {
        &self.menu
    }

    /// Navigate to a page identifier.
    pub async fn navigate(&self, page_id: &str) -> NavigationOutcome {
        self.router.navigate(page_id).await
    }

    /// Handle a host history back/forward event.
    pub async fn handle_pop(&self, page_id: &str) -> NavigationOutcome {
        self.router.handle_pop(page_id).await
    }

    /// The menu link matching the currently displayed page, if any.
    ///
    /// Catches up on router events emitted since the last call before
    /// answering.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn active_link(&self) -> Option<NavLink> {
        let mut state = self.tracker.lock().unwrap();
        loop {
            match state.events.try_recv() {
                Ok(event) => state.tracker.apply(&event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Active-entry tracker lagged behind router events");
                }
                Err(_) => break,
            }
        }
        state.tracker.active().cloned()
    }
}

/// Builder for [`Shell`].
///
/// The configuration chooses the content backend unless one is injected
/// explicitly; history integration defaults to [`NullHistory`] for
/// hosts without one.
pub struct ShellBuilder {
    config: ShellConfig,
    source: Option<Arc<dyn ContentSource>>,
    history: Arc<dyn History>,
}

impl ShellBuilder {
    /// Inject a content source, overriding the configured backend.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn ContentSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Inject the host's history integration.
    #[must_use]
    pub fn with_history(mut self, history: Arc<dyn History>) -> Self {
        self.history = history;
        self
    }

    /// Build the shell and perform the startup flow: load the menu,
    /// subscribe active-entry tracking, navigate to the initial page
    /// named by the URL fragment.
    ///
    /// A failed initial navigation still returns a running shell: the
    /// router is in its failed state and shows the error view, exactly
    /// as for any later navigation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configured content backend is
    /// inconsistent.
    pub async fn start(self, fragment: Option<&str>) -> Result<Shell, ConfigError> {
        let source = match self.source {
            Some(source) => source,
            None => self.config.content.build_source()?,
        };

        let store = Arc::new(ContentStore::new(Arc::clone(&source)));
        let registry = Arc::new(ViewRegistry::with_defaults());
        let router = Arc::new(
            Router::new(store, registry, self.history)
                .with_default_page(self.config.router.default_page.clone()),
        );

        let menu = load_menu(source.as_ref(), &self.config.router.navigation_id).await;
        let tracker = TrackerState {
            // Subscribe before the initial navigation so the tracker
            // sees it.
            events: router.subscribe(),
            tracker: ActiveEntryTracker::new(menu.clone()),
        };

        router.start(fragment).await;

        Ok(Shell {
            router,
            menu,
            tracker: Mutex::new(tracker),
        })
    }
}
