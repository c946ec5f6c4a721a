//! Dashboard URL builders.
//!
//! All dashboard views live under `/dashboard`; the explore variants carry
//! an `/explore` segment so the search mode derived from the path stays
//! community-side after navigating.

use url::form_urlencoded::Serializer;

use crate::Location;

/// Workspace search results for a query.
pub fn search(query: &str, team: Option<&str>) -> Location {
    dashboard_location("/dashboard/search", Some(query), team)
}

/// Community (explore) search results for a query.
pub fn explore_search(query: &str, team: Option<&str>) -> Location {
    dashboard_location("/dashboard/explore/search", Some(query), team)
}

/// The community landing page.
pub fn explore(team: Option<&str>) -> Location {
    dashboard_location("/dashboard/explore", None, team)
}

/// Listing of all sandboxes under a folder path ("/" for the root).
pub fn all_sandboxes(path: &str, team: Option<&str>) -> Location {
    dashboard_location(&format!("/dashboard/all{path}"), None, team)
}

fn dashboard_location(pathname: &str, query: Option<&str>, team: Option<&str>) -> Location {
    let mut params = Serializer::new(String::new());
    if let Some(query) = query {
        params.append_pair("query", query);
    }
    if let Some(team) = team {
        params.append_pair("workspace", team);
    }
    Location {
        pathname: pathname.to_string(),
        search: params.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_shape() {
        let location = search("rea", Some("team-1"));
        assert_eq!(location.pathname, "/dashboard/search");
        assert_eq!(location.query_param("query").as_deref(), Some("rea"));
        assert_eq!(location.query_param("workspace").as_deref(), Some("team-1"));
    }

    #[test]
    fn test_search_without_team() {
        let location = search("rea", None);
        assert_eq!(location.search, "query=rea");
    }

    #[test]
    fn test_explore_search_keeps_explore_segment() {
        let location = explore_search("rea", None);
        assert!(location.pathname.contains("/explore"));
    }

    #[test]
    fn test_all_sandboxes_root() {
        let location = all_sandboxes("/", Some("team-1"));
        assert_eq!(location.pathname, "/dashboard/all/");
        assert_eq!(location.query_param("query"), None);
        assert_eq!(location.query_param("workspace").as_deref(), Some("team-1"));
    }

    #[test]
    fn test_query_is_encoded() {
        let location = search("hello world & more", None);
        assert_eq!(location.search, "query=hello+world+%26+more");
        assert_eq!(
            location.query_param("query").as_deref(),
            Some("hello world & more")
        );
    }
}
