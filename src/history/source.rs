//! External history source seam.
//!
//! # Responsibilities
//! - Define the wire shape of a navigation location
//! - Define the contract a live history source must satisfy
//! - Provide the subscription drop guard

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A navigation location: path plus optional query string.
///
/// `search` either is empty or carries the leading `?`, mirroring what
/// browser history implementations report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    #[serde(default)]
    pub search: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Split a url like `/news/123?a=1` into pathname and search.
    pub fn from_url(url: &str) -> Self {
        match url.split_once('?') {
            Some((pathname, search)) => Self {
                pathname: pathname.to_string(),
                search: format!("?{}", search),
            },
            None => Self {
                pathname: url.to_string(),
                search: String::new(),
            },
        }
    }

    /// Reassemble the navigable url string.
    pub fn url(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            pathname: "/".to_string(),
            search: String::new(),
        }
    }
}

/// Callback invoked by a history source on every navigation.
pub type Listener = Arc<dyn Fn(Location) + Send + Sync>;

/// A live external navigation-history source.
///
/// The routing engine treats the source as authoritative: it never stores
/// entries itself, it only observes locations and issues push/replace
/// commands back.
pub trait HistorySource: Send + Sync {
    /// The current location.
    fn location(&self) -> Location;

    /// Append a new history entry and notify listeners.
    fn push(&self, url: &str);

    /// Overwrite the current history entry and notify listeners.
    fn replace(&self, url: &str);

    /// Register a listener for subsequent navigations.
    ///
    /// Dropping the returned subscription unregisters the listener.
    fn listen(&self, listener: Listener) -> Subscription;
}

/// Releases a history listener registration when dropped.
///
/// The release runs exactly once, even if the guard is dropped during
/// unwinding.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("released", &self.unsubscribe.is_none())
            .finish()
    }
}
