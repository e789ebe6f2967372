//! Declarative route definitions.
//!
//! # Responsibilities
//! - Provide the `route()` constructor applications declare trees with
//! - Carry pattern, nested children and per-route configuration
//!
//! # Design Decisions
//! - Definitions are plain values, immutable once handed to the builder
//! - Children are named; names become the dot-joined lookup path

use serde::{Deserialize, Serialize};

/// Per-route configuration flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Root-level routes flagged default receive redirection when the
    /// root pathname is visited directly.
    pub default: bool,
}

/// A declared route: a pattern, optional nested children, and config.
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    pub(crate) pattern: String,
    pub(crate) children: Vec<(String, RouteDefinition)>,
    pub(crate) config: RouteConfig,
}

/// Declare a route with the given pattern.
///
/// Patterns contain literal segments and `:name` parameter segments,
/// e.g. `/news/:category`. Child patterns are relative to the parent.
pub fn route(pattern: impl Into<String>) -> RouteDefinition {
    RouteDefinition {
        pattern: pattern.into(),
        children: Vec::new(),
        config: RouteConfig::default(),
    }
}

impl RouteDefinition {
    /// Attach named child routes, in declaration (match-priority) order.
    pub fn children(mut self, children: Vec<(&str, RouteDefinition)>) -> Self {
        self.children = children
            .into_iter()
            .map(|(name, def)| (name.to_string(), def))
            .collect();
        self
    }

    /// Flag this route as the default for root-pathname redirection.
    pub fn default_route(mut self, default: bool) -> Self {
        self.config.default = default;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_builder() {
        let def = route("/news")
            .children(vec![("All", route("/")), ("Category", route("/:category"))])
            .default_route(true);

        assert_eq!(def.pattern(), "/news");
        assert_eq!(def.children.len(), 2);
        assert_eq!(def.children[0].0, "All");
        assert!(def.config().default);
    }

    #[test]
    fn test_config_defaults() {
        let config = RouteConfig::default();
        assert!(!config.default);
    }
}
