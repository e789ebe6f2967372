//! Navigation history subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (live mode):
//!     default-route redirect check against the initial location
//!     → initial location queued as the first notification
//!     → subscribe to the external source
//!     → every later navigation (pushes, replaces, back/forward)
//!       queued behind it, in arrival order
//!
//! Startup (snapshot mode):
//!     exactly one notification for the static location; no subscription
//!
//! Outbound:
//!     push/replace urls forwarded verbatim to the external source
//! ```
//!
//! # Design Decisions
//! - One ordered channel, one consumer; no locking around state
//! - The subscription is a drop guard, released exactly once at teardown
//! - Snapshot mode fails push/replace explicitly instead of silently
//!   dropping them

pub mod bridge;
pub mod memory;
pub mod source;

pub use bridge::{HistoryBridge, HistoryError};
pub use memory::MemoryHistory;
pub use source::{HistorySource, Listener, Location, Subscription};
