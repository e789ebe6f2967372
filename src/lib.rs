//! Declarative nested routing engine.
//!
//! A route tree is compiled once into an immutable map; an external
//! navigation-history source drives location changes through a single
//! ordered channel; every change is folded into a fresh router state that
//! records which routes are active, which just changed, which were left,
//! and which appeared for the first time.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                ROUTING ENGINE                 │
//!                      │                                               │
//!   route declarations │  ┌─────────┐        ┌──────────┐             │
//!   ───────────────────┼─▶│  tree   │───────▶│ RouteMap │ (immutable) │
//!                      │  │ builder │        └────┬─────┘             │
//!                      │  └─────────┘             │                   │
//!                      │                          ▼                   │
//!   external history   │  ┌─────────┐        ┌──────────┐             │
//!   ───────────────────┼─▶│ history │───────▶│ matching │             │
//!     (push/replace/   │  │ bridge  │  loc   └────┬─────┘             │
//!      back/forward)   │  └────▲────┘             │ chain + params    │
//!                      │       │                  ▼                   │
//!                      │       │ href        ┌──────────┐             │
//!                      │  ┌────┴────┐        │  state   │             │
//!                      │  │  href   │◀───────│ reducer  │──▶ RouterState
//!                      │  │ builder │  state └──────────┘             │
//!                      │  └─────────┘                                 │
//!                      └───────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use waypoint::{route, MemoryHistory, RouteRef, Router};
//!
//! let mut router = Router::new(
//!     vec![
//!         ("Articles", route("/articles").default_route(true)),
//!         (
//!             "News",
//!             route("/news").children(vec![
//!                 ("All", route("/")),
//!                 ("Category", route("/:category")),
//!             ]),
//!         ),
//!     ],
//!     Arc::new(MemoryHistory::new()),
//! )
//! .unwrap();
//!
//! // "/" redirected to the default route.
//! let articles = router.route_id("Articles").unwrap();
//! assert!(router.state().is_active(articles));
//!
//! let category = router.route_id("News.Category").unwrap();
//! router
//!     .push(RouteRef::to(category).param("category", "321"))
//!     .unwrap();
//! router.process_pending();
//! assert_eq!(router.state().param("category"), Some("321"));
//! ```

// Core subsystems
pub mod matching;
pub mod tree;

// Navigation
pub mod history;
pub mod href;

// State & dispatch
pub mod router;
pub mod state;

pub use history::{
    HistoryBridge, HistoryError, HistorySource, Location, MemoryHistory, Subscription,
};
pub use href::{create_href, HrefError, RouteRef};
pub use matching::{find_first_path, MatchResult};
pub use router::{Msg, Router, RouterError};
pub use state::{parse_query, reduce, serialize_query, QueryMap, RouterState};
pub use tree::{route, BuildError, RouteConfig, RouteDefinition, RouteId, RouteMap, RouteNode};
