//! Keystroke-to-navigation flows through the search router.

use std::time::Duration;

use sandbar_routing::{History, Location};
use sandbar_ui::SearchRouter;

#[tokio::test(start_paused = true)]
async fn rapid_typing_collapses_to_one_navigation() {
    let history = History::new(Location::parse("/dashboard?query=react"));
    let router = SearchRouter::new(history.clone(), Some("team-1".to_string()));

    // Seeded query is what the box would show at mount.
    assert_eq!(history.current().query_param("query").as_deref(), Some("react"));

    for value in ["r", "re", "rea"] {
        router.on_input(value);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    tokio::time::sleep(Duration::from_millis(200)).await;

    // "r" is too short, "re" was superseded within the quiet period.
    assert_eq!(history.len(), 2);
    let current = history.current();
    assert_eq!(current.pathname, "/dashboard/search");
    assert_eq!(current.query_param("query").as_deref(), Some("rea"));
    assert_eq!(current.query_param("workspace").as_deref(), Some("team-1"));
}

#[tokio::test(start_paused = true)]
async fn clearing_the_box_jumps_to_all_sandboxes_without_delay() {
    let history = History::new(Location::parse("/dashboard"));
    let router = SearchRouter::new(history.clone(), Some("team-1".to_string()));

    router.on_input("rea");
    router.on_input("");

    // The listing push is synchronous; the earlier search is still pending
    // and lands after its quiet period, as the original header behaves.
    assert_eq!(history.len(), 2);
    assert_eq!(history.current().pathname, "/dashboard/all/");

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(history.len(), 3);
    assert_eq!(history.current().pathname, "/dashboard/search");
}

#[tokio::test(start_paused = true)]
async fn quiet_gaps_produce_one_navigation_each() {
    let history = History::new(Location::parse("/dashboard"));
    let router = SearchRouter::new(history.clone(), None);

    router.on_input("re");
    tokio::time::sleep(Duration::from_millis(150)).await;
    router.on_input("rea");
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(history.len(), 3);
    assert_eq!(history.current().query_param("query").as_deref(), Some("rea"));
}

#[tokio::test(start_paused = true)]
async fn debounced_search_follows_the_mode_at_keystroke_time() {
    let history = History::new(Location::parse("/dashboard/explore"));
    let router = SearchRouter::new(history.clone(), None);

    router.on_input("wasm");
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(history.current().pathname, "/dashboard/explore/search");

    // The completed community search keeps the mode community-side, so the
    // next query stays on explore search as well.
    router.on_input("wasm runtime");
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(history.current().pathname, "/dashboard/explore/search");
    assert_eq!(
        history.current().query_param("query").as_deref(),
        Some("wasm runtime")
    );
}
