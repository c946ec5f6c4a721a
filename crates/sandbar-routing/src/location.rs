//! Browser-style locations.

/// A parsed location: path plus raw query string.
///
/// `search` holds the query string without the leading `?`, empty when the
/// location carries no query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub search: String,
}

impl Location {
    /// Split an href into pathname and query string.
    pub fn parse(href: &str) -> Self {
        match href.split_once('?') {
            Some((pathname, search)) => Self {
                pathname: pathname.to_string(),
                search: search.to_string(),
            },
            None => Self {
                pathname: href.to_string(),
                search: String::new(),
            },
        }
    }

    /// First value of a query parameter, percent-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        url::form_urlencoded::parse(self.search.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Reassemble the full href.
    pub fn href(&self) -> String {
        if self.search.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.search)
        }
    }
}
