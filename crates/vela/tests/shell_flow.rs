//! End-to-end shell scenarios: startup, menu fallback, navigation
//! outcomes, and active-link tracking over mock and filesystem sources.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use vela::{
    ContentSource, NavEntry, RouterState, Shell, ShellConfig, default_menu,
};
use vela_router::RecordingHistory;
use vela_source::MockSource;

fn home_doc() -> &'static [u8] {
    br#"{
        "type": "home",
        "title": "Zoon.ai - AI-First Software Engineering",
        "sections": [
            {"kind": "hero"},
            {"kind": "stats", "items": [{"value": "200+", "label": "Projects"}]}
        ]
    }"#
}

fn menu_doc() -> &'static [u8] {
    br#"{
        "entries": [
            {"type": "link", "text": "Home", "icon": "fas fa-home", "page": "home"},
            {"type": "link", "text": "About", "icon": "fas fa-users", "page": "about"}
        ],
        "footer": {"tagline": "Engineering Intelligent Solutions"}
    }"#
}

struct Host {
    shell: Shell,
    source: Arc<MockSource>,
    history: Arc<RecordingHistory>,
}

async fn start_with(source: MockSource, fragment: Option<&str>) -> Host {
    let source = Arc::new(source);
    let history = Arc::new(RecordingHistory::new());
    let source_dyn: Arc<dyn ContentSource> = Arc::clone(&source);
    let history_dyn: Arc<dyn vela::History> = Arc::clone(&history);
    let shell = Shell::builder(ShellConfig::default())
        .with_source(source_dyn)
        .with_history(history_dyn)
        .start(fragment)
        .await
        .unwrap();
    Host {
        shell,
        source,
        history,
    }
}

#[tokio::test]
async fn test_startup_loads_menu_and_navigates_to_fragment() {
    let host = start_with(
        MockSource::new()
            .with_document("navigation", menu_doc())
            .with_document("about", br#"{"type": "about", "title": "About"}"#.as_slice()),
        Some("#about"),
    )
    .await;

    assert_eq!(host.shell.menu().entries.len(), 2);
    assert_eq!(
        host.shell.router().state(),
        RouterState::Displayed("about".to_owned())
    );
    assert_eq!(host.history.pushes(), ["about"]);
    assert_eq!(host.shell.active_link().unwrap().page_id, "about");
}

#[tokio::test]
async fn test_startup_without_fragment_uses_default_page() {
    let host = start_with(
        MockSource::new()
            .with_document("navigation", menu_doc())
            .with_document("home", home_doc()),
        None,
    )
    .await;

    assert_eq!(
        host.shell.router().state(),
        RouterState::Displayed("home".to_owned())
    );
    assert_eq!(
        host.shell.router().current_view().unwrap().title,
        "Zoon.ai - AI-First Software Engineering"
    );
}

#[tokio::test]
async fn test_menu_fetch_failure_uses_exact_fallback() {
    let host = start_with(MockSource::new().with_document("home", home_doc()), None).await;

    assert_eq!(host.shell.menu(), &default_menu());
    // The fallback still drives active-link tracking.
    match &host.shell.menu().entries[0] {
        NavEntry::Link(link) => assert_eq!(link.page_id, "home"),
        other => panic!("expected home link, got {other:?}"),
    }
    assert_eq!(host.shell.active_link().unwrap().page_id, "home");
}

#[tokio::test]
async fn test_home_stats_render_verbatim() {
    let host = start_with(MockSource::new().with_document("home", home_doc()), None).await;

    let view = host.shell.router().current_view().unwrap();
    let stat = view.find_first("stat").unwrap();

    assert_eq!(stat.children[0].text.as_deref(), Some("200+"));
    assert_eq!(stat.children[1].text.as_deref(), Some("Projects"));
}

#[tokio::test]
async fn test_missing_page_navigation_leaves_state_consistent() {
    let host = start_with(MockSource::new().with_document("home", home_doc()), None).await;

    host.shell.navigate("missing-page").await;

    assert_eq!(
        host.shell.router().state(),
        RouterState::Failed("missing-page".to_owned())
    );
    assert_eq!(
        host.shell.router().current_page_id(),
        Some("home".to_owned())
    );
    // Only the initial navigation pushed history.
    assert_eq!(host.history.pushes(), ["home"]);
    assert_eq!(
        host.shell.router().current_view().unwrap().title,
        "Page Not Found"
    );
}

#[tokio::test]
async fn test_failed_initial_navigation_still_returns_running_shell() {
    let host = start_with(
        MockSource::new().with_document("navigation", menu_doc()),
        Some("#missing"),
    )
    .await;

    assert_eq!(
        host.shell.router().state(),
        RouterState::Failed("missing".to_owned())
    );
    assert_eq!(host.shell.router().current_page_id(), None);
    assert!(host.history.pushes().is_empty());
    assert!(host.shell.active_link().is_none());
}

#[tokio::test]
async fn test_active_link_tracks_navigations_not_failures() {
    let host = start_with(
        MockSource::new()
            .with_document("navigation", menu_doc())
            .with_document("home", home_doc())
            .with_document("about", br#"{"type": "about", "title": "About"}"#.as_slice()),
        None,
    )
    .await;
    assert_eq!(host.shell.active_link().unwrap().page_id, "home");

    host.shell.navigate("about").await;
    assert_eq!(host.shell.active_link().unwrap().page_id, "about");

    host.shell.navigate("missing-page").await;
    // A failed navigation leaves the previous entry active.
    assert_eq!(host.shell.active_link().unwrap().page_id, "about");
}

#[tokio::test]
async fn test_pop_returns_to_previous_page_without_pushing() {
    let host = start_with(
        MockSource::new()
            .with_document("home", home_doc())
            .with_document("about", br#"{"type": "about", "title": "About"}"#.as_slice()),
        None,
    )
    .await;
    host.shell.navigate("about").await;

    host.shell.handle_pop("home").await;

    assert_eq!(
        host.shell.router().state(),
        RouterState::Displayed("home".to_owned())
    );
    assert_eq!(host.history.pushes(), ["home", "about"]);
    // Menu fetch + home + about; the pop was served from the cache.
    assert_eq!(host.source.fetch_count(), 3);
}

#[tokio::test]
async fn test_fs_backend_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("home.json"), home_doc()).unwrap();
    std::fs::write(dir.path().join("navigation.json"), menu_doc()).unwrap();

    let mut config = ShellConfig::default();
    config.content.root = Some(dir.path().to_path_buf());

    let shell = Shell::builder(config).start(None).await.unwrap();

    assert_eq!(
        shell.router().state(),
        RouterState::Displayed("home".to_owned())
    );
    assert_eq!(shell.menu().entries.len(), 2);
}
