//! Shared UI components for the Sandbar dashboard.
//!
//! Provides the header bar, the debounced search box with its combobox
//! popover, and the explicit configuration those components consume.

pub mod config;
pub mod debounce;
pub mod header;
pub mod search;

pub use config::{DashboardConfig, WorkspaceAuthorization};
pub use debounce::Debouncer;
pub use header::Header;
pub use search::{SearchInput, SearchMode, SearchRouter};

/// Dashboard chrome CSS embedded at compile time.
pub const UI_CSS: &str = include_str!("../assets/ui.css");
