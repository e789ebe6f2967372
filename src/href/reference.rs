//! Navigation references.

use std::collections::HashMap;

use crate::state::QueryMap;
use crate::tree::RouteId;

/// A reference to navigate to: a target route with parameter bindings,
/// or a query-only update of the current path.
///
/// Built fluently and consumed by href generation and the push/replace
/// messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRef {
    target: Option<RouteId>,
    params: HashMap<String, String>,
    query: Option<QueryMap>,
    merge_query: bool,
}

impl RouteRef {
    /// Reference a route by id.
    pub fn to(target: RouteId) -> Self {
        Self {
            target: Some(target),
            params: HashMap::new(),
            query: None,
            merge_query: true,
        }
    }

    /// Reference a query update of the current path (no path change).
    pub fn query_update<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            target: None,
            params: HashMap::new(),
            query: None,
            merge_query: true,
        }
        .query(pairs)
    }

    /// Bind one pattern parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Attach query keys to apply on top of (or instead of) the current
    /// query.
    pub fn query<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let query = self.query.get_or_insert_with(QueryMap::new);
        for (key, value) in pairs {
            query.insert(key.into(), value.into());
        }
        self
    }

    /// Control whether the existing query is kept (default) or discarded.
    pub fn merge_query(mut self, merge: bool) -> Self {
        self.merge_query = merge;
        self
    }

    pub fn target(&self) -> Option<RouteId> {
        self.target
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn query_keys(&self) -> Option<&QueryMap> {
        self.query.as_ref()
    }

    pub fn merges_query(&self) -> bool {
        self.merge_query
    }
}
