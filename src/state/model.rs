//! The externally visible router state.
//!
//! # States (per route id)
//! - active: on the current matched chain
//! - changed: became active on this transition (or on the very first one)
//! - left: was active before this transition, is not anymore
//! - appeared-once: true exactly on the first activation, false afterwards
//!
//! # Design Decisions
//! - Flags live in id-keyed collections owned by the state value, never on
//!   the shared route nodes
//! - active/changed/left are sets (absent = false); appeared-once is an
//!   explicit bool map because "never activated" differs from "activated
//!   before"
//! - The state remembers the location it was reduced from, so href
//!   generation for query-only references stays pure over the state

use std::collections::{HashMap, HashSet};

use crate::history::Location;
use crate::tree::{RouteId, RouteMap};

use super::query::QueryMap;

/// Snapshot of the router after one location resolution.
///
/// Replaced wholesale on every location change; observers never see a
/// partially updated value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterState {
    pub(crate) location: Location,
    pub(crate) params: HashMap<String, String>,
    pub(crate) query: QueryMap,
    pub(crate) active: HashSet<RouteId>,
    pub(crate) changed: HashSet<RouteId>,
    pub(crate) left: HashSet<RouteId>,
    pub(crate) appeared_once: HashMap<RouteId, bool>,
}

impl RouterState {
    /// The location this state was reduced from.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Parameter bindings, merged across resolutions.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The parsed query map of the current location.
    pub fn query(&self) -> &QueryMap {
        &self.query
    }

    /// True when the route is on the current matched chain.
    pub fn is_active(&self, id: RouteId) -> bool {
        self.active.contains(&id)
    }

    /// True when the route became active on this transition.
    pub fn is_changed(&self, id: RouteId) -> bool {
        self.changed.contains(&id)
    }

    /// True when the route was active before this transition and is not
    /// anymore.
    pub fn is_left(&self, id: RouteId) -> bool {
        self.left.contains(&id)
    }

    /// True only on the state produced by the route's first activation.
    pub fn appeared_once(&self, id: RouteId) -> bool {
        self.appeared_once.get(&id).copied().unwrap_or(false)
    }

    /// True when none of the scoped routes is active.
    ///
    /// With no scope the root routes are checked (root-level not-found);
    /// with a scope, that route's children are (nested not-found below an
    /// otherwise matched ancestor).
    pub fn is_not_found(&self, routes: &RouteMap, scope: Option<RouteId>) -> bool {
        let candidates = match scope {
            Some(id) => routes.children(id),
            None => routes.roots(),
        };
        !candidates.iter().any(|id| self.active.contains(id))
    }
}
