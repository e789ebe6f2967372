//! Router state subsystem.
//!
//! # Data Flow
//! ```text
//! LocationChanged(location)
//!     → matching (pathname → chain + params)
//!     → reducer.rs (fold chain into previous state)
//!     → fresh RouterState (active / changed / left / appeared-once)
//!     → published wholesale; previous state discarded
//! ```
//!
//! # Design Decisions
//! - State is replaced as a whole on every location change, never patched
//! - Per-route flags are explicit id-keyed collections, not fields on
//!   shared route nodes
//! - The query map preserves insertion order so serialization is
//!   deterministic
//! - The reducer is a pure function; "first resolution ever" is an input,
//!   not ambient state

pub mod model;
pub mod query;
pub mod reducer;

pub use model::RouterState;
pub use query::{parse_query, serialize_query, QueryMap};
pub use reducer::reduce;
