//! Route tree subsystem.
//!
//! # Data Flow
//! ```text
//! Route declarations (at startup):
//!     route(pattern) + nested children + config
//!     → builder.rs (depth-first id assignment, pattern inheritance)
//!     → uniqueness check (parameter names, whole tree)
//!     → Freeze as immutable RouteMap
//! ```
//!
//! # Design Decisions
//! - Routes compiled once at startup, immutable for the router's lifetime
//! - Node identity is a small integer assigned in declaration order
//! - Declaration order preserved (match priority)
//! - Duplicate parameter names anywhere in the tree fail the build

pub mod builder;
pub mod definition;
pub mod pattern;

pub use builder::{BuildError, RouteId, RouteMap, RouteNode};
pub use definition::{route, RouteConfig, RouteDefinition};
