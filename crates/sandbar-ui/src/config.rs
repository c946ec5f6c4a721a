//! Explicit dashboard configuration.
//!
//! Everything the header needs from the outside world arrives here at
//! construction time; components never read ambient storage for flags.

/// What the current member may do in the active workspace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkspaceAuthorization {
    Admin,
    #[default]
    Write,
    Read,
}

impl WorkspaceAuthorization {
    pub fn is_read_only(self) -> bool {
        matches!(self, WorkspaceAuthorization::Read)
    }
}

/// Configuration for the dashboard shell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardConfig {
    /// Identifier of the active team/workspace, carried into search URLs.
    pub active_team: Option<String>,
    pub workspace_authorization: WorkspaceAuthorization,
    /// Ships the unfinished community-search suggestion UI when set.
    pub community_search: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_read_is_read_only() {
        assert!(WorkspaceAuthorization::Read.is_read_only());
        assert!(!WorkspaceAuthorization::Write.is_read_only());
        assert!(!WorkspaceAuthorization::Admin.is_read_only());
    }
}
