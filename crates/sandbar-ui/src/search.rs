//! Debounced search routing for the dashboard header.
//!
//! The text box owns its value; every keystroke flows through
//! [`SearchRouter::on_input`], which decides between doing nothing, a
//! debounced search navigation, and an immediate jump back to the full
//! sandbox listing.

use std::time::Duration;

use dioxus::prelude::*;

use sandbar_routing::{History, Location, urls};

use crate::config::DashboardConfig;
use crate::debounce::Debouncer;

/// Which result set a query targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    Workspace,
    Community,
}

impl SearchMode {
    /// Community iff the path carries an explore segment. Derived from the
    /// path on every call, never cached.
    pub fn of(pathname: &str) -> Self {
        if pathname.contains("/explore") {
            SearchMode::Community
        } else {
            SearchMode::Workspace
        }
    }

    pub fn other(self) -> Self {
        match self {
            SearchMode::Workspace => SearchMode::Community,
            SearchMode::Community => SearchMode::Workspace,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SearchMode::Workspace => "Workspace",
            SearchMode::Community => "Community",
        }
    }

    /// Popover hint for where typing currently searches.
    pub fn hint(self) -> &'static str {
        match self {
            SearchMode::Workspace => "in workspace",
            SearchMode::Community => "in community",
        }
    }
}

/// Drives navigation for the header search box.
#[derive(Clone)]
pub struct SearchRouter {
    history: History,
    team: Option<String>,
    debouncer: Debouncer,
}

impl SearchRouter {
    /// Quiet period before a typed query becomes a navigation.
    pub const QUIET_PERIOD: Duration = Duration::from_millis(100);

    pub fn new(history: History, team: Option<String>) -> Self {
        Self {
            history,
            team,
            debouncer: Debouncer::new(Self::QUIET_PERIOD),
        }
    }

    /// Search mode for the current location.
    pub fn mode(&self) -> SearchMode {
        SearchMode::of(&self.history.current().pathname)
    }

    /// Route a keystroke. Two or more characters schedule a debounced
    /// search; an emptied box lists all sandboxes immediately; a single
    /// character does nothing.
    pub fn on_input(&self, value: &str) {
        if value.is_empty() {
            self.history
                .push(urls::all_sandboxes("/", self.team.as_deref()));
        } else if value.chars().count() >= 2 {
            // The mode is captured now; a navigation landing mid-debounce
            // does not redirect an already-typed query.
            let target = self.search_target(self.mode(), value);
            let history = self.history.clone();
            self.debouncer.call(move || history.push(target));
        }
    }

    /// Selecting the combobox suggestion searches the other context with
    /// the current value, immediately.
    pub fn on_suggestion_select(&self, value: &str) {
        let target = self.search_target(self.mode().other(), value);
        self.history.push(target);
    }

    /// Drop any not-yet-fired search navigation.
    pub fn cancel_pending(&self) {
        self.debouncer.cancel();
    }

    fn search_target(&self, mode: SearchMode, query: &str) -> Location {
        match mode {
            SearchMode::Workspace => urls::search(query, self.team.as_deref()),
            SearchMode::Community => urls::explore_search(query, self.team.as_deref()),
        }
    }
}

/// Search box with the flag-gated community/workspace combobox popover.
///
/// The initial value is seeded once from the mount location's `query`
/// parameter; afterwards the box tracks keystrokes only.
#[component]
pub fn SearchInput() -> Element {
    let history = use_context::<History>();
    let config = use_context::<DashboardConfig>();

    let router = use_hook({
        let history = history.clone();
        let team = config.active_team.clone();
        move || SearchRouter::new(history, team)
    });

    let mut value = use_signal({
        let history = history.clone();
        move || history.current().query_param("query").unwrap_or_default()
    });
    let mut focused = use_signal(|| false);

    // Mirror pushes into a signal so the mode hint tracks navigation.
    let mut location = use_signal({
        let history = history.clone();
        move || history.current()
    });
    let _watcher = use_resource({
        let history = history.clone();
        move || {
            let history = history.clone();
            async move {
                let mut rx = history.subscribe();
                while rx.changed().await.is_ok() {
                    let next = rx.borrow_and_update().clone();
                    location.set(next);
                }
            }
        }
    });

    // A dead search box must not navigate later.
    use_drop({
        let router = router.clone();
        move || router.cancel_pending()
    });

    let mode = SearchMode::of(&location().pathname);

    rsx! {
        div { class: "search-group",
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search all sandboxes",
                value: "{value}",
                oninput: {
                    let router = router.clone();
                    move |evt: FormEvent| {
                        let text = evt.value();
                        value.set(text.clone());
                        router.on_input(&text);
                    }
                },
                onkeydown: move |evt: KeyboardEvent| {
                    // Enter drops focus; typing already routed the search.
                    if evt.key() == Key::Enter {
                        let _ = document::eval(
                            "document.activeElement && document.activeElement.blur()",
                        );
                    }
                },
                onfocus: move |_| focused.set(true),
                onblur: move |_| focused.set(false),
            }
            if config.community_search && focused() {
                SearchSuggestions {
                    value: value(),
                    mode,
                    on_select: {
                        let router = router.clone();
                        move |_| router.on_suggestion_select(&value())
                    },
                }
            }
        }
    }
}

/// Single-option popover offering the same query in the other mode.
#[component]
fn SearchSuggestions(value: String, mode: SearchMode, on_select: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "search-popover",
            // Keeps the input focused while the option is clicked.
            onmousedown: move |evt| evt.prevent_default(),
            div {
                class: "search-suggestion",
                onclick: move |_| on_select.call(()),
                span { class: "search-suggestion-query", "{value}" }
                span { class: "search-suggestion-target", "{mode.other().display_name()} \u{23ce}" }
            }
            div { class: "search-popover-hint", "{mode.hint()} \u{23ce}" }
        }
    }
}
