//! Cancellable deferred actions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Defers an action until a quiet period has elapsed.
///
/// At most one action is ever pending: each call aborts the previously
/// scheduled task and schedules a new one, so only the last value supplied
/// within a quiet window fires. Superseded actions are discarded silently.
#[derive(Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedule `action` to run after the quiet period, superseding any
    /// previously scheduled action.
    pub fn call(&self, action: impl FnOnce() + Send + 'static) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let delay = self.delay;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Fires only when no newer call arrived during the sleep.
            if latest.load(Ordering::SeqCst) == generation {
                action();
            }
        });

        if let Some(previous) = self.pending.lock().unwrap().replace(task) {
            previous.abort();
        }
    }

    /// Drop any pending action without running it.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = self.pending.lock().unwrap().take() {
            task.abort();
        }
    }
}
