//! The navigation state machine.

use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use vela_store::ContentStore;
use vela_view::{ViewDescription, ViewRegistry, error_view};

use crate::event::{FailureReason, RouterEvent};
use crate::history::History;

/// Default page identifier when no fragment targets one.
const DEFAULT_PAGE: &str = "home";

/// Broadcast capacity for router events.
const EVENT_CAPACITY: usize = 32;

/// Router navigation state.
///
/// `Loading` transitions to `Displayed` or `Failed` when the fetch
/// resolves; the terminal states transition back to `Loading` only
/// through a new navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterState {
    /// No navigation has happened yet.
    Idle,
    /// A fetch for the page is outstanding.
    Loading(String),
    /// The page is rendered and current.
    Displayed(String),
    /// The last navigation failed and the error view is shown.
    Failed(String),
}

/// Result of a single navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The page was fetched, rendered, and is now displayed.
    Displayed,
    /// The navigation failed; the error view is displayed.
    Failed(FailureReason),
    /// A later navigation started before this one resolved; its result
    /// was discarded without side effects.
    Superseded,
    /// The page was already displayed; nothing was fetched or emitted.
    AlreadyDisplayed,
}

struct RouterInner {
    state: RouterState,
    /// Identifier of the last successfully displayed page. Not updated
    /// on failure, so what "current" means stays consistent with real
    /// content and a failed identifier can be retried.
    current_page_id: Option<String>,
    /// Rendered form of whatever is on screen (page or error view).
    view: Option<Arc<ViewDescription>>,
    /// Monotonic navigation counter backing the last-wins rule.
    seq: u64,
}

/// Owns navigation state and orchestrates fetch → render → notify.
///
/// Constructed with injected collaborators so it can be exercised
/// without a host environment: a [`ContentStore`] for documents, a
/// [`ViewRegistry`] for rendering, and a [`History`] for the host's
/// back/forward integration.
pub struct Router {
    store: Arc<ContentStore>,
    registry: Arc<ViewRegistry>,
    history: Arc<dyn History>,
    events: broadcast::Sender<RouterEvent>,
    default_page: String,
    inner: Mutex<RouterInner>,
}

impl Router {
    /// Create a router over the given collaborators.
    #[must_use]
    pub fn new(
        store: Arc<ContentStore>,
        registry: Arc<ViewRegistry>,
        history: Arc<dyn History>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            store,
            registry,
            history,
            events,
            default_page: DEFAULT_PAGE.to_owned(),
            inner: Mutex::new(RouterInner {
                state: RouterState::Idle,
                current_page_id: None,
                view: None,
                seq: 0,
            }),
        }
    }

    /// Override the default page used when no fragment targets one.
    #[must_use]
    pub fn with_default_page(mut self, page_id: impl Into<String>) -> Self {
        self.default_page = page_id.into();
        self
    }

    /// Subscribe to router events.
    ///
    /// Only events emitted after this call are delivered.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RouterEvent> {
        self.events.subscribe()
    }

    /// Current navigation state.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn state(&self) -> RouterState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Identifier of the last successfully displayed page.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn current_page_id(&self) -> Option<String> {
        self.inner.lock().unwrap().current_page_id.clone()
    }

    /// Rendered form of whatever is currently on screen.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn current_view(&self) -> Option<Arc<ViewDescription>> {
        self.inner.lock().unwrap().view.clone()
    }

    /// Perform the initial navigation from an optional URL fragment.
    ///
    /// `Some("#about")` and `Some("about")` target `about`; `None` or a
    /// blank fragment target the configured default page.
    pub async fn start(&self, fragment: Option<&str>) -> NavigationOutcome {
        let target = initial_target(fragment, &self.default_page).to_owned();
        self.navigate(&target).await
    }

    /// Navigate to a page identifier.
    ///
    /// Re-navigating to the page already displayed is a no-op: no
    /// fetch, no events, no history entry. Otherwise the router enters
    /// `Loading`, fetches and renders, and ends `Displayed` (pushing a
    /// history entry and emitting [`RouterEvent::PageChanged`]) or
    /// `Failed` (pushing nothing, leaving the current page id alone,
    /// and emitting [`RouterEvent::NavigationFailed`]).
    ///
    /// If another navigation starts while this one is loading, the
    /// later one wins: this call's result is discarded on arrival and
    /// it returns [`NavigationOutcome::Superseded`].
    pub async fn navigate(&self, page_id: &str) -> NavigationOutcome {
        self.begin(page_id, true).await
    }

    /// Handle a host history back/forward event carrying a previously
    /// pushed page identifier.
    ///
    /// Runs the same loading sequence as [`Router::navigate`] but never
    /// pushes a history entry; the host's history is already correct.
    pub async fn handle_pop(&self, page_id: &str) -> NavigationOutcome {
        self.begin(page_id, false).await
    }

    /// Ask the host to navigate one history entry back.
    pub fn back(&self) {
        self.history.back();
    }

    async fn begin(&self, page_id: &str, push_history: bool) -> NavigationOutcome {
        let seq = {
            let mut inner = self.inner.lock().unwrap();
            if matches!(&inner.state, RouterState::Displayed(current) if current == page_id) {
                tracing::debug!(page_id, "Already displayed, navigation ignored");
                return NavigationOutcome::AlreadyDisplayed;
            }
            inner.seq += 1;
            inner.state = RouterState::Loading(page_id.to_owned());
            inner.seq
        };

        self.emit(RouterEvent::Loading {
            page_id: page_id.to_owned(),
        });

        match self.store.get(page_id).await {
            Ok(doc) => {
                let view = self.registry.render(&doc);
                let title = view.title.clone();
                {
                    let mut inner = self.inner.lock().unwrap();
                    if inner.seq != seq {
                        tracing::debug!(page_id, "Stale navigation result discarded");
                        return NavigationOutcome::Superseded;
                    }
                    inner.state = RouterState::Displayed(page_id.to_owned());
                    inner.current_page_id = Some(page_id.to_owned());
                    inner.view = Some(Arc::new(view));
                }
                if push_history {
                    self.history.push(page_id);
                }
                self.emit(RouterEvent::PageChanged {
                    page_id: page_id.to_owned(),
                    title,
                });
                NavigationOutcome::Displayed
            }
            Err(err) => {
                let reason = FailureReason::from(&err);
                {
                    let mut inner = self.inner.lock().unwrap();
                    if inner.seq != seq {
                        tracing::debug!(page_id, "Stale navigation failure discarded");
                        return NavigationOutcome::Superseded;
                    }
                    inner.state = RouterState::Failed(page_id.to_owned());
                    inner.view = Some(Arc::new(error_view(page_id)));
                }
                tracing::warn!(page_id, error = %err, "Navigation failed");
                self.emit(RouterEvent::NavigationFailed {
                    page_id: page_id.to_owned(),
                    reason,
                });
                NavigationOutcome::Failed(reason)
            }
        }
    }

    fn emit(&self, event: RouterEvent) {
        // Nobody listening is fine.
        let _ = self.events.send(event);
    }
}

/// Resolve the initial navigation target from a URL fragment.
fn initial_target<'a>(fragment: Option<&'a str>, default_page: &'a str) -> &'a str {
    match fragment.map(|f| f.trim_start_matches('#')) {
        Some(target) if !target.is_empty() => target,
        _ => default_page,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tokio::sync::broadcast::error::TryRecvError;
    use vela_source::{MockSource, SourceErrorKind};

    use super::*;
    use crate::history::RecordingHistory;

    struct Fixture {
        router: Arc<Router>,
        source: Arc<MockSource>,
        history: Arc<RecordingHistory>,
    }

    fn fixture(source: MockSource) -> Fixture {
        let source = Arc::new(source);
        let history = Arc::new(RecordingHistory::new());
        let source_dyn: Arc<dyn vela_source::ContentSource> = Arc::clone(&source);
        let history_dyn: Arc<dyn History> = Arc::clone(&history);
        let store = Arc::new(ContentStore::new(source_dyn));
        let router = Arc::new(Router::new(
            store,
            Arc::new(ViewRegistry::with_defaults()),
            history_dyn,
        ));
        Fixture {
            router,
            source,
            history,
        }
    }

    fn home_doc() -> &'static [u8] {
        br#"{"type": "home", "title": "Home", "sections": [{"kind": "hero"}]}"#
    }

    #[tokio::test]
    async fn test_successful_navigation() {
        let fx = fixture(MockSource::new().with_document("home", home_doc()));
        let mut events = fx.router.subscribe();

        let outcome = fx.router.navigate("home").await;

        assert_eq!(outcome, NavigationOutcome::Displayed);
        assert_eq!(fx.router.state(), RouterState::Displayed("home".to_owned()));
        assert_eq!(fx.router.current_page_id(), Some("home".to_owned()));
        assert_eq!(fx.history.pushes(), ["home"]);
        assert_eq!(
            events.try_recv().unwrap(),
            RouterEvent::Loading {
                page_id: "home".to_owned()
            }
        );
        assert_eq!(
            events.try_recv().unwrap(),
            RouterEvent::PageChanged {
                page_id: "home".to_owned(),
                title: "Home".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn test_failed_navigation_preserves_current_and_history() {
        let fx = fixture(MockSource::new().with_document("home", home_doc()));
        fx.router.navigate("home").await;
        let mut events = fx.router.subscribe();

        let outcome = fx.router.navigate("missing-page").await;

        assert_eq!(
            outcome,
            NavigationOutcome::Failed(FailureReason::NotFound)
        );
        assert_eq!(
            fx.router.state(),
            RouterState::Failed("missing-page".to_owned())
        );
        // Current page id still names what was last displayed.
        assert_eq!(fx.router.current_page_id(), Some("home".to_owned()));
        // Only the earlier successful navigation pushed history.
        assert_eq!(fx.history.pushes(), ["home"]);
        assert_eq!(
            events.try_recv().unwrap(),
            RouterEvent::Loading {
                page_id: "missing-page".to_owned()
            }
        );
        assert_eq!(
            events.try_recv().unwrap(),
            RouterEvent::NavigationFailed {
                page_id: "missing-page".to_owned(),
                reason: FailureReason::NotFound
            }
        );
    }

    #[tokio::test]
    async fn test_failure_displays_error_view() {
        let fx = fixture(MockSource::new());

        fx.router.navigate("missing-page").await;

        let view = fx.router.current_view().unwrap();
        assert_eq!(view.title, "Page Not Found");
        assert!(
            view.find_first("error.message")
                .unwrap()
                .text
                .as_deref()
                .unwrap()
                .contains("missing-page")
        );
    }

    #[tokio::test]
    async fn test_renavigation_to_displayed_page_is_noop() {
        let fx = fixture(MockSource::new().with_document("home", home_doc()));
        fx.router.navigate("home").await;
        let mut events = fx.router.subscribe();

        let outcome = fx.router.navigate("home").await;

        assert_eq!(outcome, NavigationOutcome::AlreadyDisplayed);
        assert_eq!(fx.source.fetch_count(), 1);
        assert_eq!(fx.history.pushes(), ["home"]);
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn test_failed_page_can_be_retried() {
        let fx = fixture(MockSource::new().with_error("flaky", SourceErrorKind::Unavailable));

        let first = fx.router.navigate("flaky").await;
        let second = fx.router.navigate("flaky").await;

        assert_eq!(first, NavigationOutcome::Failed(FailureReason::Network));
        assert_eq!(second, NavigationOutcome::Failed(FailureReason::Network));
        // The no-op guard only protects the displayed state; both
        // retries reached the source.
        assert_eq!(fx.source.fetch_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_navigation_wins() {
        let fx = fixture(
            MockSource::new()
                .with_document("slow", br#"{"type": "about", "title": "Slow"}"#.as_slice())
                .with_delay("slow", Duration::from_secs(5))
                .with_document("fast", br#"{"type": "home", "title": "Fast"}"#.as_slice()),
        );

        let slow_router = Arc::clone(&fx.router);
        let slow = tokio::spawn(async move { slow_router.navigate("slow").await });
        // Let the slow navigation reach its fetch before racing it.
        tokio::time::sleep(Duration::from_millis(1)).await;

        let fast = fx.router.navigate("fast").await;
        let slow = slow.await.unwrap();

        assert_eq!(fast, NavigationOutcome::Displayed);
        assert_eq!(slow, NavigationOutcome::Superseded);
        assert_eq!(fx.router.state(), RouterState::Displayed("fast".to_owned()));
        assert_eq!(fx.router.current_page_id(), Some("fast".to_owned()));
        // The superseded navigation pushed nothing.
        assert_eq!(fx.history.pushes(), ["fast"]);
        assert_eq!(fx.router.current_view().unwrap().title, "Fast");
    }

    #[tokio::test]
    async fn test_pop_does_not_push_history() {
        let fx = fixture(
            MockSource::new()
                .with_document("home", home_doc())
                .with_document("about", br#"{"type": "about", "title": "About"}"#.as_slice()),
        );
        fx.router.navigate("home").await;
        fx.router.navigate("about").await;

        let outcome = fx.router.handle_pop("home").await;

        assert_eq!(outcome, NavigationOutcome::Displayed);
        assert_eq!(fx.router.state(), RouterState::Displayed("home".to_owned()));
        assert_eq!(fx.history.pushes(), ["home", "about"]);
    }

    #[tokio::test]
    async fn test_back_delegates_to_history() {
        let fx = fixture(MockSource::new());

        fx.router.back();

        assert_eq!(fx.history.back_count(), 1);
    }

    #[tokio::test]
    async fn test_start_parses_fragment() {
        let fx = fixture(
            MockSource::new()
                .with_document("about", br#"{"type": "about", "title": "About"}"#.as_slice()),
        );

        fx.router.start(Some("#about")).await;

        assert_eq!(
            fx.router.state(),
            RouterState::Displayed("about".to_owned())
        );
    }

    #[tokio::test]
    async fn test_start_without_fragment_uses_default() {
        let fx = fixture(MockSource::new().with_document("home", home_doc()));

        fx.router.start(None).await;

        assert_eq!(fx.router.state(), RouterState::Displayed("home".to_owned()));
    }

    #[test]
    fn test_initial_target_forms() {
        assert_eq!(initial_target(None, "home"), "home");
        assert_eq!(initial_target(Some(""), "home"), "home");
        assert_eq!(initial_target(Some("#"), "home"), "home");
        assert_eq!(initial_target(Some("#about"), "home"), "about");
        assert_eq!(initial_target(Some("about"), "home"), "about");
    }
}
