//! Router facade.
//!
//! # Data Flow
//! ```text
//! Push(ref) / Replace(ref)
//!     → href generation
//!     → history bridge (external push/replace)
//!     → ... asynchronously ...
//!     → LocationChanged(location) notification
//!     → matcher + reducer
//!     → fresh RouterState published
//! ```
//!
//! # Design Decisions
//! - One consumer drains the notification channel; transitions apply in
//!   arrival order, never concurrently
//! - Issuing a navigation does not update state synchronously; callers
//!   drain pending notifications or await the next transition
//! - "Has a resolution ever completed" is constructor-local state, not
//!   ambient

pub mod engine;
pub mod messages;

pub use engine::{Router, RouterError};
pub use messages::Msg;
