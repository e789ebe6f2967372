//! Route tree compilation.
//!
//! # Responsibilities
//! - Assign a stable id to every definition (depth-first, declaration order)
//! - Inherit ancestor patterns into full per-node patterns
//! - Enforce parameter-name uniqueness across the whole tree
//! - Freeze the result as an immutable `RouteMap`
//!
//! # Design Decisions
//! - Ids are indices into a flat node vector (cheap copy, map keys)
//! - Uniqueness is global, not per-sibling: two routes anywhere sharing a
//!   parameter name is a build-time fatal error
//! - Per-route state never lives on the nodes themselves; nodes are shared
//!   read-only across every subsequent match

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::definition::{RouteConfig, RouteDefinition};
use super::pattern::Pattern;

/// Stable route identity assigned at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Errors raised while compiling a route tree.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The same parameter name is declared by two routes in the tree.
    #[error("duplicate route parameter :{name}: declared by `{first}` and `{second}`")]
    DuplicateParam {
        name: String,
        first: String,
        second: String,
    },
}

/// A compiled route node.
#[derive(Debug)]
pub struct RouteNode {
    id: RouteId,
    /// Dot-joined declaration path, e.g. `News.Category`.
    name: String,
    /// The node's own pattern, relative to its parent.
    pattern: Pattern,
    /// Ancestor-prefixed pattern used for href generation and redirects.
    full_pattern: Pattern,
    /// Parameter names declared by this node's own pattern.
    param_names: HashSet<String>,
    parent: Option<RouteId>,
    children: Vec<RouteId>,
    config: RouteConfig,
}

impl RouteNode {
    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn full_pattern(&self) -> &Pattern {
        &self.full_pattern
    }

    pub fn param_names(&self) -> &HashSet<String> {
        &self.param_names
    }

    pub fn parent(&self) -> Option<RouteId> {
        self.parent
    }

    pub fn children(&self) -> &[RouteId] {
        &self.children
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }
}

/// The compiled, immutable route tree.
///
/// Built once at router startup and shared read-only by the matcher and
/// the href builder for the router's lifetime.
#[derive(Debug, Default)]
pub struct RouteMap {
    nodes: Vec<RouteNode>,
    roots: Vec<RouteId>,
    by_name: HashMap<String, RouteId>,
}

impl RouteMap {
    /// Compile named root definitions into a route map.
    ///
    /// Fails with [`BuildError::DuplicateParam`] if any parameter name
    /// repeats anywhere in the tree.
    pub fn build(roots: Vec<(&str, RouteDefinition)>) -> Result<Self, BuildError> {
        let mut map = RouteMap::default();
        let mut seen_params: HashMap<String, String> = HashMap::new();

        for (name, def) in &roots {
            let id = map.compile(name, def, None, &mut seen_params)?;
            map.roots.push(id);
        }

        tracing::debug!(routes = map.nodes.len(), "Route tree compiled");
        Ok(map)
    }

    fn compile(
        &mut self,
        name: &str,
        def: &RouteDefinition,
        parent: Option<RouteId>,
        seen_params: &mut HashMap<String, String>,
    ) -> Result<RouteId, BuildError> {
        let pattern = Pattern::parse(&def.pattern);
        let full_pattern = match parent {
            Some(pid) => self.nodes[pid.0].full_pattern.join(&pattern),
            None => pattern.clone(),
        };
        let full_name = match parent {
            Some(pid) => format!("{}.{}", self.nodes[pid.0].name, name),
            None => name.to_string(),
        };

        let mut param_names = HashSet::new();
        for param in pattern.param_names() {
            if let Some(first) = seen_params.get(param) {
                return Err(BuildError::DuplicateParam {
                    name: param.to_string(),
                    first: first.clone(),
                    second: full_pattern.to_string(),
                });
            }
            seen_params.insert(param.to_string(), full_pattern.to_string());
            param_names.insert(param.to_string());
        }

        let id = RouteId(self.nodes.len());
        self.nodes.push(RouteNode {
            id,
            name: full_name.clone(),
            pattern,
            full_pattern,
            param_names,
            parent,
            children: Vec::new(),
            config: def.config.clone(),
        });
        self.by_name.insert(full_name, id);

        for (child_name, child_def) in &def.children {
            let child_id = self.compile(child_name, child_def, Some(id), seen_params)?;
            self.nodes[id.0].children.push(child_id);
        }

        Ok(id)
    }

    pub fn node(&self, id: RouteId) -> &RouteNode {
        &self.nodes[id.0]
    }

    /// Look up a route id by its dot-joined declaration path.
    pub fn id(&self, name: &str) -> Option<RouteId> {
        self.by_name.get(name).copied()
    }

    /// Root routes, in declaration (match-priority) order.
    pub fn roots(&self) -> &[RouteId] {
        &self.roots
    }

    /// Child ids of the given route, in declaration order.
    pub fn children(&self, id: RouteId) -> &[RouteId] {
        &self.nodes[id.0].children
    }

    /// The root-level route flagged `default`, if any.
    pub fn default_root(&self) -> Option<&RouteNode> {
        self.roots
            .iter()
            .map(|id| self.node(*id))
            .find(|node| node.config.default)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
