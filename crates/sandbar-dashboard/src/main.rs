//! Entry point for the Sandbar dashboard desktop app.

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use sandbar_routing::{History, Location, urls};
use sandbar_theme::{StyleOutlet, ThemePreset, ThemeProvider, ThemeSpec, use_theme};
use sandbar_ui::{DashboardConfig, Header, SearchMode, WorkspaceAuthorization};

/// Base stylesheet embedded at compile time.
const DASHBOARD_CSS: &str = include_str!("../assets/dashboard.css");

/// Global storage for the parsed arguments.
static ARGS: OnceLock<Args> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Clone, Debug)]
#[command(name = "sandbar-dashboard")]
#[command(about = "Code-sandbox dashboard for Sandbar")]
struct Args {
    /// Location to open the dashboard at
    #[arg(long, default_value = "/dashboard/all/")]
    start_url: String,

    /// Active team/workspace identifier
    #[arg(short, long)]
    team: Option<String>,

    /// Treat the active workspace as read-only
    #[arg(long)]
    read_only: bool,

    /// Ship the unfinished community search UI
    #[arg(long)]
    community_search: bool,

    /// Theme preset for the embedded sandbox panel
    #[arg(long)]
    theme: Option<ThemePreset>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting Sandbar dashboard");

    let args = Args::parse();
    ARGS.set(args).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Sandbar Dashboard")
                        .with_inner_size(LogicalSize::new(1280, 800)),
                )
                .with_custom_head(format!(
                    "<style>{}\n{}</style>",
                    DASHBOARD_CSS,
                    sandbar_ui::UI_CSS
                )),
        )
        .launch(RootApp);
}

/// Root application component.
#[component]
fn RootApp() -> Element {
    let args = ARGS.get().cloned().unwrap_or_else(|| Args::parse_from(["sandbar-dashboard"]));

    let history = use_context_provider({
        let start_url = args.start_url.clone();
        move || History::new(Location::parse(&start_url))
    });
    use_context_provider(|| DashboardConfig {
        active_team: args.team.clone(),
        workspace_authorization: if args.read_only {
            WorkspaceAuthorization::Read
        } else {
            WorkspaceAuthorization::Write
        },
        community_search: args.community_search,
    });

    let mut sidebar_visible = use_signal(|| true);

    // Mirror pushes into a signal so the routed view follows navigation.
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

    let theme_spec = args.theme.map(ThemeSpec::Preset);

    rsx! {
        StyleOutlet {}
        div { class: "dashboard-root",
            Header {
                on_sidebar_toggle: move |_| {
                    let visible = sidebar_visible();
                    sidebar_visible.set(!visible);
                },
                on_create_sandbox: move |_| tracing::info!("create sandbox requested"),
            }
            div { class: "dashboard-body",
                if sidebar_visible() {
                    Sidebar {}
                }
                main { class: "dashboard-content",
                    RouteView { location: location() }
                    ThemeProvider { theme: theme_spec.clone(), SandboxPanel {} }
                }
            }
        }
    }
}

/// Sidebar with the two dashboard entry points.
#[component]
fn Sidebar() -> Element {
    let history = use_context::<History>();
    let config = use_context::<DashboardConfig>();
    let team = config.active_team;

    rsx! {
        aside { class: "dashboard-sidebar",
            button {
                class: "sidebar-link",
                onclick: {
                    let history = history.clone();
                    let team = team.clone();
                    move |_| history.push(urls::all_sandboxes("/", team.as_deref()))
                },
                "All sandboxes"
            }
            button {
                class: "sidebar-link",
                onclick: {
                    let history = history.clone();
                    let team = team.clone();
                    move |_| history.push(urls::explore(team.as_deref()))
                },
                "Explore"
            }
        }
    }
}

/// Placeholder for the routed result views; names which view the current
/// location maps to.
#[component]
fn RouteView(location: Location) -> Element {
    let label = route_label(&location);

    rsx! {
        section { class: "route-view",
            div { class: "route-view-label", "{label}" }
            div { class: "route-view-href", "{location.href()}" }
        }
    }
}

fn route_label(location: &Location) -> String {
    let query = location.query_param("query");
    match SearchMode::of(&location.pathname) {
        SearchMode::Community => match query {
            Some(query) => format!("Community search results for \"{query}\""),
            None => "Community sandboxes".to_string(),
        },
        SearchMode::Workspace => {
            if location.pathname.starts_with("/dashboard/search") {
                format!(
                    "Workspace search results for \"{}\"",
                    query.unwrap_or_default()
                )
            } else if location.pathname.starts_with("/dashboard/all") {
                "All sandboxes".to_string()
            } else {
                "Dashboard".to_string()
            }
        }
    }
}

/// Embedded sandbox preview panel, themed through the provider.
#[component]
fn SandboxPanel() -> Element {
    let resolved = use_theme();

    rsx! {
        div { class: "sandbox-panel",
            div { class: "sandbox-panel-title", "Sandbox preview (theme: {resolved.id})" }
            pre { class: "sandbox-code",
                code { "fn main() {{\n    println!(\"hello from sandbar\");\n}}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_label_for_listing_and_searches() {
        assert_eq!(
            route_label(&Location::parse("/dashboard/all/")),
            "All sandboxes"
        );
        assert_eq!(
            route_label(&Location::parse("/dashboard/search?query=rea")),
            "Workspace search results for \"rea\""
        );
        assert_eq!(
            route_label(&Location::parse("/dashboard/explore/search?query=rea")),
            "Community search results for \"rea\""
        );
        assert_eq!(
            route_label(&Location::parse("/dashboard/explore")),
            "Community sandboxes"
        );
    }
}
