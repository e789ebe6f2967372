//! Location diff reducer.
//!
//! # State Transitions
//! ```text
//! active:        exactly the ids on the new chain
//! changed:       inactive → active, or everything on the chain during
//!                the very first resolution
//! left:          previously active, not on the new chain
//! appeared-once: absent → true on first chain membership,
//!                true → false on the next one, false stays false
//! ```
//!
//! # Design Decisions
//! - Pure function: previous state, match result, location and the
//!   first-resolution flag are all inputs
//! - Params merge over the previous bindings and survive a no-match
//!   resolution; the query map is rebuilt from the location every time

use crate::history::Location;
use crate::matching::MatchResult;

use super::model::RouterState;
use super::query::parse_query;

/// Fold a resolved location into the previous state.
///
/// `handled_once` is false only for the very first resolution a router
/// processes; that run marks the whole chain as changed so initial mount
/// is observable like any other transition.
pub fn reduce(
    prev: &RouterState,
    matched: Option<&MatchResult>,
    location: &Location,
    handled_once: bool,
) -> RouterState {
    let mut next = RouterState {
        location: location.clone(),
        params: prev.params.clone(),
        query: parse_query(&location.search),
        active: Default::default(),
        changed: Default::default(),
        left: Default::default(),
        appeared_once: prev.appeared_once.clone(),
    };

    if let Some(matched) = matched {
        for id in &matched.chain {
            next.active.insert(*id);
            if !prev.active.contains(id) || !handled_once {
                next.changed.insert(*id);
            }
            match next.appeared_once.get(id) {
                None => {
                    next.appeared_once.insert(*id, true);
                }
                Some(true) => {
                    next.appeared_once.insert(*id, false);
                }
                Some(false) => {}
            }
        }
        next.params
            .extend(matched.params.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    for id in &prev.active {
        if !next.active.contains(id) {
            next.left.insert(*id);
        }
    }

    tracing::debug!(
        pathname = %location.pathname,
        active = next.active.len(),
        changed = next.changed.len(),
        left = next.left.len(),
        "Router state transition"
    );

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::find_first_path;
    use crate::tree::{route, RouteDefinition, RouteMap};

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

    fn resolve(map: &RouteMap, prev: &RouterState, url: &str, handled_once: bool) -> RouterState {
        let location = Location::from_url(url);
        let matched = find_first_path(map, &location.pathname);
        reduce(prev, matched.as_ref(), &location, handled_once)
    }

    #[test]
    fn test_first_resolution_marks_whole_chain_changed() {
        let map = RouteMap::build(main_routes()).unwrap();
        let state = resolve(&map, &RouterState::default(), "/news/123", false);

        let news = map.id("News").unwrap();
        let category = map.id("News.Category").unwrap();
        assert!(state.is_active(news) && state.is_changed(news));
        assert!(state.is_active(category) && state.is_changed(category));
        assert!(!state.is_active(map.id("Articles").unwrap()));
        assert_eq!(state.param("category"), Some("123"));
    }

    #[test]
    fn test_left_routes_are_previous_active_minus_new() {
        let map = RouteMap::build(main_routes()).unwrap();
        let articles = map.id("Articles").unwrap();
        let news = map.id("News").unwrap();

        let first = resolve(&map, &RouterState::default(), "/articles", false);
        assert!(first.is_active(articles));

        let second = resolve(&map, &first, "/news/123", true);
        assert!(second.is_left(articles));
        assert!(!second.is_active(articles));
        assert!(second.is_active(news));
        assert!(!second.is_left(news));
    }

    #[test]
    fn test_staying_active_is_not_a_change() {
        let map = RouteMap::build(main_routes()).unwrap();
        let news = map.id("News").unwrap();
        let category = map.id("News.Category").unwrap();

        let first = resolve(&map, &RouterState::default(), "/news/123", false);
        let second = resolve(&map, &first, "/news/321", true);

        assert!(second.is_active(news));
        assert!(!second.is_changed(news));
        // The category route never went inactive either.
        assert!(second.is_active(category));
        assert!(!second.is_changed(category));
        assert_eq!(second.param("category"), Some("321"));
    }

    #[test]
    fn test_appeared_once_alternation() {
        let map = RouteMap::build(main_routes()).unwrap();
        let news = map.id("News").unwrap();

        let first = resolve(&map, &RouterState::default(), "/news", false);
        assert!(first.appeared_once(news));

        // Second membership flips to false, permanently.
        let second = resolve(&map, &first, "/news/123", true);
        assert!(!second.appeared_once(news));

        // Leaving keeps the entry; coming back does not resurrect true.
        let third = resolve(&map, &second, "/articles", true);
        let fourth = resolve(&map, &third, "/news", true);
        assert!(!fourth.appeared_once(news));
    }

    #[test]
    fn test_no_match_clears_active_and_keeps_params() {
        let map = RouteMap::build(main_routes()).unwrap();
        let news = map.id("News").unwrap();

        let first = resolve(&map, &RouterState::default(), "/news/123", false);
        let second = resolve(&map, &first, "/some_page?x=1", true);

        assert!(second.is_not_found(&map, None));
        assert!(!second.is_active(news));
        assert!(second.is_left(news));
        assert!(second.changed.is_empty());
        // Params survive; the query is rebuilt from the location.
        assert_eq!(second.param("category"), Some("123"));
        assert_eq!(second.query().get("x").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_query_parsed_from_location() {
        let map = RouteMap::build(main_routes()).unwrap();
        let state = resolve(&map, &RouterState::default(), "/articles?a=1&b=2", false);
        assert_eq!(state.query().get("a").map(String::as_str), Some("1"));
        assert_eq!(state.query().get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_params_merge_over_previous() {
        let map = RouteMap::build(vec![
            ("Category", route("/c/:category")),
            ("Item", route("/i/:item")),
        ])
        .unwrap();

        let first = resolve(&map, &RouterState::default(), "/c/books", false);
        let second = resolve(&map, &first, "/i/42", true);

        // The stale binding survives until overwritten.
        assert_eq!(second.param("category"), Some("books"));
        assert_eq!(second.param("item"), Some("42"));
    }
}
