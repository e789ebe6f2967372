//! Router engine: message dispatch and state ownership.

use std::sync::Arc;

use thiserror::Error;

use crate::history::{HistoryBridge, HistoryError, HistorySource, Location};
use crate::href::{create_href, HrefError, RouteRef};
use crate::matching::find_first_path;
use crate::state::{reduce, RouterState};
use crate::tree::{BuildError, RouteDefinition, RouteId, RouteMap};

use super::messages::Msg;

/// Errors surfaced by the router facade.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Route tree compilation failed.
    #[error("route build failed: {0}")]
    Build(#[from] BuildError),

    /// Href generation failed for a navigation reference.
    #[error("navigation failed: {0}")]
    Href(#[from] HrefError),

    /// The history source cannot execute the command.
    #[error("history command failed: {0}")]
    History(#[from] HistoryError),
}

/// The routing engine.
///
/// Owns the compiled route map, the history bridge and the current
/// state. All transitions are processed strictly in notification order;
/// the state value is replaced wholesale on each one.
pub struct Router {
    routes: Arc<RouteMap>,
    bridge: HistoryBridge,
    state: RouterState,
    handled_once: bool,
}

impl Router {
    /// Compile the route tree and attach to a live history source.
    ///
    /// The initial location (after the default-route redirect check) is
    /// resolved before this returns, so the state is immediately
    /// queryable.
    pub fn new(
        definitions: Vec<(&str, RouteDefinition)>,
        source: Arc<dyn HistorySource>,
    ) -> Result<Self, RouterError> {
        let routes = Arc::new(RouteMap::build(definitions)?);
        Ok(Self::with_routes(routes, source))
    }

    /// Attach a pre-built route map to a live history source.
    pub fn with_routes(routes: Arc<RouteMap>, source: Arc<dyn HistorySource>) -> Self {
        let bridge = HistoryBridge::live(source, &routes);
        let mut router = Self {
            routes,
            bridge,
            state: RouterState::default(),
            handled_once: false,
        };
        router.process_pending();
        router
    }

    /// Compile the route tree against a single static location
    /// (server-request mode).
    ///
    /// The snapshot is resolved immediately; push/replace commands fail
    /// with [`HistoryError::Unavailable`].
    pub fn from_snapshot(
        definitions: Vec<(&str, RouteDefinition)>,
        location: Location,
    ) -> Result<Self, RouterError> {
        let routes = Arc::new(RouteMap::build(definitions)?);
        let bridge = HistoryBridge::snapshot(location);
        let mut router = Self {
            routes,
            bridge,
            state: RouterState::default(),
            handled_once: false,
        };
        router.process_pending();
        Ok(router)
    }

    /// Process one message.
    ///
    /// Push/replace forward to the external history; the resulting state
    /// transition arrives asynchronously through the notification
    /// channel. Callers needing the new state drain pending
    /// notifications or await [`Router::next_transition`].
    pub fn update(&mut self, msg: Msg) -> Result<(), RouterError> {
        match msg {
            Msg::Push(route) => {
                let url = create_href(&self.routes, &self.state, &route)?;
                self.bridge.push(&url)?;
                Ok(())
            }
            Msg::Replace(route) => {
                let url = create_href(&self.routes, &self.state, &route)?;
                self.bridge.replace(&url)?;
                Ok(())
            }
            Msg::LocationChanged(location) => {
                self.apply_location(location);
                Ok(())
            }
        }
    }

    /// Append a history entry for the referenced route.
    pub fn push(&mut self, route: RouteRef) -> Result<(), RouterError> {
        self.update(Msg::Push(route))
    }

    /// Overwrite the current history entry with the referenced route.
    pub fn replace(&mut self, route: RouteRef) -> Result<(), RouterError> {
        self.update(Msg::Replace(route))
    }

    /// Apply all pending location notifications, in arrival order.
    ///
    /// Returns the number of transitions applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Some(location) = self.bridge.try_next() {
            self.apply_location(location);
            applied += 1;
        }
        applied
    }

    /// Wait for the next location notification and apply it.
    ///
    /// Returns `false` when no further notification can arrive (snapshot
    /// mode after its single delivery).
    pub async fn next_transition(&mut self) -> bool {
        match self.bridge.next().await {
            Some(location) => {
                self.apply_location(location);
                true
            }
            None => false,
        }
    }

    fn apply_location(&mut self, location: Location) {
        let matched = find_first_path(&self.routes, &location.pathname);
        self.state = reduce(&self.state, matched.as_ref(), &location, self.handled_once);
        self.handled_once = true;
    }

    /// The current state.
    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// The compiled route map.
    pub fn routes(&self) -> &RouteMap {
        &self.routes
    }

    /// Look up a route id by its dot-joined declaration path.
    pub fn route_id(&self, name: &str) -> Option<RouteId> {
        self.routes.id(name)
    }

    /// Generate the href for a reference against the current state.
    pub fn link(&self, route: &RouteRef) -> Result<String, RouterError> {
        Ok(create_href(&self.routes, &self.state, route)?)
    }

    /// Whether a live history source is attached.
    pub fn is_live(&self) -> bool {
        self.bridge.is_live()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::tree::route;

    fn main_routes() -> Vec<(&'static str, RouteDefinition)> {
        vec![
            ("Articles", route("/articles").default_route(true)),
            (
                "News",
                route("/news").children(vec![
                    ("All", route("/")),
                    ("Category", route("/:category")),
                ]),
            ),
        ]
    }

    fn router_at(url: &str) -> (Router, MemoryHistory) {
        let history = MemoryHistory::with_initial(url);
        let router = Router::new(main_routes(), Arc::new(history.clone())).unwrap();
        (router, history)
    }

    #[test]
    fn test_duplicate_params_fail_construction() {
        let history = MemoryHistory::new();
        let result = Router::new(
            vec![
                ("Articles", route("/articles/:id")),
                ("News", route("/news/:id")),
            ],
            Arc::new(history),
        );
        assert!(matches!(result, Err(RouterError::Build(_))));
    }

    #[test]
    fn test_push_defers_state_until_drained() {
        let (mut router, _history) = router_at("/articles");
        let news = router.route_id("News").unwrap();

        let category = RouteRef::to(router.route_id("News.Category").unwrap())
            .param("category", "321");
        router.push(category).unwrap();

        // The notification is queued, not applied.
        assert!(!router.state().is_active(news));
        assert_eq!(router.process_pending(), 1);
        assert!(router.state().is_active(news));
    }

    #[test]
    fn test_external_navigation_is_observed() {
        let (mut router, history) = router_at("/articles");

        history.push("/news/123");
        history.back();
        assert_eq!(router.process_pending(), 2);

        let articles = router.route_id("Articles").unwrap();
        assert!(router.state().is_active(articles));
    }

    #[test]
    fn test_appeared_once_over_back_navigation() {
        let (mut router, history) = router_at("/articles");
        let news = router.route_id("News").unwrap();

        history.push("/news/123");
        router.process_pending();
        assert!(router.state().appeared_once(news));

        history.back();
        router.process_pending();
        history.forward();
        router.process_pending();
        assert!(!router.state().appeared_once(news));
    }

    #[test]
    fn test_location_changed_message_applies_synchronously() {
        let (mut router, _history) = router_at("/articles");
        let news = router.route_id("News").unwrap();

        router
            .update(Msg::LocationChanged(Location::new("/news/123", "?a=1")))
            .unwrap();

        assert!(router.state().is_active(news));
        assert_eq!(router.state().param("category"), Some("123"));
        assert_eq!(router.state().query().get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_snapshot_mode_resolves_once_and_rejects_navigation() {
        let mut router =
            Router::from_snapshot(main_routes(), Location::new("/news/123", "")).unwrap();

        assert!(!router.is_live());
        let news = router.route_id("News").unwrap();
        assert!(router.state().is_active(news));
        assert_eq!(router.state().param("category"), Some("123"));

        let result = router.push(RouteRef::to(router.route_id("Articles").unwrap()));
        assert!(matches!(
            result,
            Err(RouterError::History(HistoryError::Unavailable))
        ));
    }

    #[test]
    fn test_link_against_current_state() {
        let (router, _history) = router_at("/articles?a=1");
        let href = router
            .link(&RouteRef::query_update([("b", "2")]))
            .unwrap();
        assert_eq!(href, "/articles?a=1&b=2");
    }

    #[tokio::test]
    async fn test_await_next_transition() {
        let (mut router, history) = router_at("/articles");
        let news = router.route_id("News").unwrap();

        history.push("/news/123");
        assert!(router.next_transition().await);
        assert!(router.state().is_active(news));
    }

    #[tokio::test]
    async fn test_snapshot_channel_ends() {
        let mut router =
            Router::from_snapshot(main_routes(), Location::new("/articles", "")).unwrap();
        assert!(!router.next_transition().await);
    }
}
