//! Observable navigation history.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::Location;

/// Single-writer navigation history with watch-channel subscribers.
///
/// Every `push` appends a new entry, makes it current, and notifies
/// subscribers. Handles are cheap to clone and share one entry stack, so a
/// deferred task can push from outside the UI scheduler.
#[derive(Clone)]
pub struct History {
    entries: Arc<Mutex<Vec<Location>>>,
    tx: Arc<watch::Sender<Location>>,
}

impl History {
    pub fn new(initial: Location) -> Self {
        let (tx, _rx) = watch::channel(initial.clone());
        Self {
            entries: Arc::new(Mutex::new(vec![initial])),
            tx: Arc::new(tx),
        }
    }

    /// The current location (most recent entry).
    pub fn current(&self) -> Location {
        self.entries
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    /// Push a new entry and notify subscribers. No full reload semantics;
    /// the previous entry stays on the stack.
    pub fn push(&self, location: Location) {
        tracing::debug!("navigate: {}", location.href());
        self.entries.lock().unwrap().push(location.clone());
        self.tx.send_replace(location);
    }

    /// Subscribe to location changes. The receiver starts at the current
    /// location.
    pub fn subscribe(&self) -> watch::Receiver<Location> {
        self.tx.subscribe()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

// Handle equality, not structural equality: two handles are equal when they
// share the same entry stack.
impl PartialEq for History {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl std::fmt::Debug for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("current", &self.current())
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_current() {
        let history = History::new(Location::parse("/dashboard?query=react"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().query_param("query").as_deref(), Some("react"));
    }

    #[test]
    fn test_push_appends_and_updates_current() {
        let history = History::new(Location::parse("/dashboard"));
        history.push(Location::parse("/dashboard/search?query=rust"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().pathname, "/dashboard/search");
    }

    #[test]
    fn test_clones_share_entries() {
        let history = History::new(Location::parse("/dashboard"));
        let other = history.clone();
        other.push(Location::parse("/dashboard/explore"));
        assert_eq!(history.len(), 2);
        assert_eq!(history, other);
    }

    #[tokio::test]
    async fn test_subscribe_sees_pushes() {
        let history = History::new(Location::parse("/dashboard"));
        let mut rx = history.subscribe();
        history.push(Location::parse("/dashboard/search?query=rust"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().pathname, "/dashboard/search");
    }
}
