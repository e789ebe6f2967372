//! Path matching subsystem.
//!
//! # Data Flow
//! ```text
//! pathname ("/news/123")
//!     → split into segments
//!     → try each root pattern in declaration order
//!     → on a match, recurse into children with the remaining segments
//!     → Return: chain of route ids (root → deepest) + extracted params,
//!       or NoMatch
//! ```
//!
//! # Design Decisions
//! - Depth-first, declaration order; first match wins at every level
//! - A parent matches even when no child consumes the remainder
//!   (nested not-found: parent active, nothing below it)
//! - Deterministic: same pathname always resolves to the same chain

pub mod matcher;

pub use matcher::{find_first_path, MatchResult};
