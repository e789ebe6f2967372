//! In-process history source.
//!
//! # Responsibilities
//! - Hold an entry list and a cursor, like a browser session history
//! - Notify registered listeners synchronously on every navigation
//! - Support back/forward traversal over recorded entries
//!
//! # Design Decisions
//! - Push drops any forward entries before appending (browser semantics)
//! - Replace overwrites the current entry in place
//! - Listeners are invoked outside the lock

use std::sync::{Arc, Mutex};

use super::source::{HistorySource, Listener, Location, Subscription};

struct Inner {
    entries: Vec<Location>,
    index: usize,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// An in-memory [`HistorySource`].
///
/// The live source for non-browser hosts, and the deterministic stand-in
/// for browser history in tests.
#[derive(Clone)]
pub struct MemoryHistory {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryHistory {
    /// Start at the root pathname.
    pub fn new() -> Self {
        Self::with_initial("/")
    }

    /// Start at the given url.
    pub fn with_initial(url: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: vec![Location::from_url(url)],
                index: 0,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// Snapshot of all recorded entries.
    pub fn entries(&self) -> Vec<Location> {
        self.inner.lock().unwrap().entries.clone()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().unwrap().listeners.len()
    }

    /// Move the cursor by `delta` entries and notify listeners.
    ///
    /// Out-of-range deltas are clamped to the entry list bounds.
    pub fn go(&self, delta: isize) {
        let location = {
            let mut inner = self.inner.lock().unwrap();
            let target = inner.index as isize + delta;
            let target = target.clamp(0, inner.entries.len() as isize - 1) as usize;
            if target == inner.index {
                return;
            }
            inner.index = target;
            inner.entries[target].clone()
        };
        self.notify(location);
    }

    pub fn back(&self) {
        self.go(-1);
    }

    pub fn forward(&self) {
        self.go(1);
    }

    fn notify(&self, location: Location) {
        let listeners: Vec<Listener> = {
            let inner = self.inner.lock().unwrap();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(location.clone());
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistorySource for MemoryHistory {
    fn location(&self) -> Location {
        let inner = self.inner.lock().unwrap();
        inner.entries[inner.index].clone()
    }

    fn push(&self, url: &str) {
        let location = Location::from_url(url);
        {
            let mut inner = self.inner.lock().unwrap();
            let cut = inner.index + 1;
            inner.entries.truncate(cut);
            inner.entries.push(location.clone());
            inner.index += 1;
        }
        tracing::debug!(url = %url, "History push");
        self.notify(location);
    }

    fn replace(&self, url: &str) {
        let location = Location::from_url(url);
        {
            let mut inner = self.inner.lock().unwrap();
            let index = inner.index;
            inner.entries[index] = location.clone();
        }
        tracing::debug!(url = %url, "History replace");
        self.notify(location);
    }

    fn listen(&self, listener: Listener) -> Subscription {
        let id = {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, listener));
            id
        };
        let inner = self.inner.clone();
        Subscription::new(move || {
            inner.lock().unwrap().listeners.retain(|(lid, _)| *lid != id);
        })
    }
}
