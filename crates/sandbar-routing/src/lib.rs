//! Navigation plumbing for the Sandbar dashboard.
//!
//! Provides the location/history abstraction the UI navigates through and
//! the URL builders for the dashboard's search and listing views.

pub mod history;
pub mod location;
pub mod urls;

pub use history::History;
pub use location::Location;
