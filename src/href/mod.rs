//! Href generation subsystem.
//!
//! # Data Flow
//! ```text
//! RouteRef (target id + param bindings + query update)
//!     → builder.rs (substitute :name tokens in the full pattern,
//!       or reuse the state's current path for query-only refs)
//!     → merge or replace the existing query map
//!     → Return: navigable url string
//! ```
//!
//! # Design Decisions
//! - Missing parameter bindings fail synchronously at the call site
//! - Query keys merge into the existing map unless merging is disabled
//! - Serialization order is the query map's insertion order

pub mod builder;
pub mod reference;

pub use builder::{create_href, HrefError};
pub use reference::RouteRef;
