//! Dashboard header bar.

use dioxus::prelude::*;

use crate::config::DashboardConfig;
use crate::search::SearchInput;

/// Header with sidebar toggle, search group, and the create action.
///
/// Create is disabled while the active workspace is read-only.
#[component]
pub fn Header(
    on_sidebar_toggle: EventHandler<()>,
    on_create_sandbox: EventHandler<()>,
) -> Element {
    let config = use_context::<DashboardConfig>();

    rsx! {
        header { class: "dashboard-header",
            button {
                class: "header-hamburger",
                title: "Menu",
                onclick: move |_| on_sidebar_toggle.call(()),
                "\u{2630}"
            }
            SearchInput {}
            div { class: "header-actions",
                button {
                    class: "header-btn primary",
                    disabled: config.workspace_authorization.is_read_only(),
                    onclick: move |_| on_create_sandbox.call(()),
                    "Create Sandbox"
                }
            }
        }
    }
}
