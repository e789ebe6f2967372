//! Route resolution for a pathname.

use std::collections::HashMap;

use crate::tree::pattern::split_path;
use crate::tree::{RouteId, RouteMap};

/// A successful path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Route ids from the matched root down to the deepest matched
    /// descendant.
    pub chain: Vec<RouteId>,
    /// Union of the parameter bindings collected along the chain.
    pub params: HashMap<String, String>,
}

/// Resolve a pathname against the route map.
///
/// Roots are attempted in declaration order; the first root that produces
/// a match wins. Within it, children are tried the same way against the
/// remaining segments, preferring the deepest successful match. Returns
/// `None` when no root matches at all.
pub fn find_first_path(map: &RouteMap, pathname: &str) -> Option<MatchResult> {
    let segments = split_path(pathname);

    for root in map.roots() {
        if let Some(result) = match_node(map, *root, &segments) {
            tracing::debug!(
                pathname = %pathname,
                route = %map.node(*result.chain.last().expect("chain is never empty")).name(),
                depth = result.chain.len(),
                "Path resolved"
            );
            return Some(result);
        }
    }

    tracing::debug!(pathname = %pathname, "No route matched");
    None
}

/// Match one node against the front of `segments`, then recurse.
///
/// A node without children must consume the entire remainder; a node with
/// children matches even when segments are left over and no child takes
/// them, which is the nested not-found case (parent active, nothing
/// below it).
fn match_node(map: &RouteMap, id: RouteId, segments: &[&str]) -> Option<MatchResult> {
    let node = map.node(id);
    let bindings = node.pattern().match_prefix(segments)?;
    let remaining = &segments[node.pattern().len()..];

    for child in node.children() {
        if let Some(child_match) = match_node(map, *child, remaining) {
            let mut chain = vec![id];
            chain.extend(child_match.chain);
            let mut params: HashMap<String, String> = bindings.into_iter().collect();
            params.extend(child_match.params);
            return Some(MatchResult { chain, params });
        }
    }

    if !remaining.is_empty() && node.children().is_empty() {
        return None;
    }

    Some(MatchResult {
        chain: vec![id],
        params: bindings.into_iter().collect(),
    })
}
