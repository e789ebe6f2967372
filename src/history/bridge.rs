//! Bridge between an external history source and the router.
//!
//! # Responsibilities
//! - Perform the default-route redirect check once, against the initial
//!   location, before anything else observes it
//! - Deliver the initial location as the first notification
//! - Forward every subsequent navigation into one ordered channel
//! - Forward push/replace commands back to the external source
//!
//! # Design Decisions
//! - Notifications are channel messages, not pulled futures: the listener
//!   registration forwards each navigation as a discrete request and the
//!   single consumer preserves strict ordering
//! - Startup order is redirect → initial delivery → subscribe, so the
//!   redirect never produces a duplicate notification
//! - Snapshot mode has no subscription and rejects outbound commands

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::tree::RouteMap;

use super::source::{HistorySource, Location, Subscription};

/// Errors raised by the history bridge.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Push/replace issued against a static snapshot.
    #[error("history source not available in snapshot mode")]
    Unavailable,
}

/// Adapts a history source into an ordered stream of location changes.
pub struct HistoryBridge {
    source: Option<Arc<dyn HistorySource>>,
    rx: mpsc::UnboundedReceiver<Location>,
    _subscription: Option<Subscription>,
}

impl HistoryBridge {
    /// Attach to a live history source.
    ///
    /// Runs the default-route redirect check against the source's current
    /// location, queues the (possibly redirected) initial location, then
    /// subscribes for subsequent navigations.
    pub fn live(source: Arc<dyn HistorySource>, routes: &RouteMap) -> Self {
        let initial = source.location();
        if initial.pathname == "/" {
            if let Some(default) = routes.default_root() {
                let target = format!("{}{}", default.full_pattern(), initial.search);
                tracing::info!(
                    route = %default.name(),
                    target = %target,
                    "Redirecting root pathname to default route"
                );
                source.replace(&target);
            }
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(source.location());
        let listener_tx = tx.clone();
        let subscription = source.listen(Arc::new(move |location| {
            // The router may already be gone during teardown; late
            // notifications are dropped.
            let _ = listener_tx.send(location);
        }));

        Self {
            source: Some(source),
            rx,
            _subscription: Some(subscription),
        }
    }

    /// Serve a single static location (server-request mode).
    ///
    /// Exactly one notification is delivered; there is no subscription
    /// and no push/replace capability.
    pub fn snapshot(location: Location) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(location);
        Self {
            source: None,
            rx,
            _subscription: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.source.is_some()
    }

    /// Forward a push command to the external source.
    pub fn push(&self, url: &str) -> Result<(), HistoryError> {
        match &self.source {
            Some(source) => {
                source.push(url);
                Ok(())
            }
            None => Err(HistoryError::Unavailable),
        }
    }

    /// Forward a replace command to the external source.
    pub fn replace(&self, url: &str) -> Result<(), HistoryError> {
        match &self.source {
            Some(source) => {
                source.replace(url);
                Ok(())
            }
            None => Err(HistoryError::Unavailable),
        }
    }

    /// Take the next pending notification without waiting.
    pub fn try_next(&mut self) -> Option<Location> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next notification.
    ///
    /// Returns `None` once the channel is exhausted with no live source
    /// left to produce more (snapshot mode after its single delivery).
    pub async fn next(&mut self) -> Option<Location> {
        self.rx.recv().await
    }
}
