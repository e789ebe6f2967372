//! Href generation.

use thiserror::Error;

use crate::state::query::serialize_query;
use crate::state::{QueryMap, RouterState};
use crate::tree::pattern::Segment;
use crate::tree::RouteMap;

use super::reference::RouteRef;

/// Errors raised while generating an href.
#[derive(Debug, Error)]
pub enum HrefError {
    /// A `:name` token in the target pattern has no binding.
    #[error("missing value for parameter :{name} of `{pattern}`")]
    MissingParam { name: String, pattern: String },
}

/// Generate the navigable url for a route reference.
///
/// A routable target has its full pattern's `:name` tokens substituted
/// from the reference's bindings; a query-only reference reuses the
/// current state's path. The query string starts from the state's query
/// map unless merging is disabled, applies the reference's keys on top,
/// and is appended only when non-empty.
pub fn create_href(
    routes: &RouteMap,
    state: &RouterState,
    route: &RouteRef,
) -> Result<String, HrefError> {
    let pathname = match route.target() {
        Some(id) => {
            let node = routes.node(id);
            let mut pathname = String::new();
            for segment in node.full_pattern().segments() {
                match segment {
                    Segment::Literal(literal) => {
                        pathname.push('/');
                        pathname.push_str(literal);
                    }
                    Segment::Param(name) => {
                        let value = route.params().get(name).ok_or_else(|| {
                            HrefError::MissingParam {
                                name: name.clone(),
                                pattern: node.full_pattern().to_string(),
                            }
                        })?;
                        pathname.push('/');
                        pathname.push_str(value);
                    }
                }
            }
            if pathname.is_empty() {
                pathname.push('/');
            }
            pathname
        }
        None => state.location().pathname.clone(),
    };

    let mut query = if route.merges_query() {
        state.query().clone()
    } else {
        QueryMap::new()
    };
    if let Some(keys) = route.query_keys() {
        for (key, value) in keys {
            query.insert(key.clone(), value.clone());
        }
    }

    let serialized = serialize_query(&query);
    if serialized.is_empty() {
        Ok(pathname)
    } else {
        Ok(format!("{}?{}", pathname, serialized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Location;
    use crate::matching::find_first_path;
    use crate::state::reduce;
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

    fn state_at(routes: &RouteMap, url: &str) -> RouterState {
        let location = Location::from_url(url);
        let matched = find_first_path(routes, &location.pathname);
        reduce(&RouterState::default(), matched.as_ref(), &location, false)
    }

    #[test]
    fn test_substitutes_params_into_full_pattern() {
        let routes = RouteMap::build(main_routes()).unwrap();
        let state = state_at(&routes, "/articles");

        let href = create_href(
            &routes,
            &state,
            &RouteRef::to(routes.id("News.Category").unwrap()).param("category", "321"),
        )
        .unwrap();
        assert_eq!(href, "/news/321");
    }

    #[test]
    fn test_missing_param_fails() {
        let routes = RouteMap::build(main_routes()).unwrap();
        let state = state_at(&routes, "/articles");

        let result = create_href(
            &routes,
            &state,
            &RouteRef::to(routes.id("News.Category").unwrap()),
        );
        match result {
            Err(HrefError::MissingParam { name, pattern }) => {
                assert_eq!(name, "category");
                assert_eq!(pattern, "/news/:category");
            }
            other => panic!("expected missing param error, got {:?}", other),
        }
    }

    #[test]
    fn test_route_with_query() {
        let routes = RouteMap::build(main_routes()).unwrap();
        let state = state_at(&routes, "/articles");

        let href = create_href(
            &routes,
            &state,
            &RouteRef::to(routes.id("News.Category").unwrap())
                .param("category", "321")
                .query([("a", "123")]),
        )
        .unwrap();
        assert_eq!(href, "/news/321?a=123");
    }

    #[test]
    fn test_index_child_href_is_parent_path() {
        let routes = RouteMap::build(main_routes()).unwrap();
        let state = state_at(&routes, "/articles");

        let href = create_href(&routes, &state, &RouteRef::to(routes.id("News.All").unwrap()));
        assert_eq!(href.unwrap(), "/news");
    }

    #[test]
    fn test_query_update_reuses_current_path_and_merges() {
        let routes = RouteMap::build(main_routes()).unwrap();
        let state = state_at(&routes, "/articles?a=1");

        let href =
            create_href(&routes, &state, &RouteRef::query_update([("b", "2")])).unwrap();
        assert_eq!(href, "/articles?a=1&b=2");
    }

    #[test]
    fn test_query_replace_discards_existing_keys() {
        let routes = RouteMap::build(main_routes()).unwrap();
        let state = state_at(&routes, "/articles?a=1");

        let href = create_href(
            &routes,
            &state,
            &RouteRef::query_update([("b", "2")]).merge_query(false),
        )
        .unwrap();
        assert_eq!(href, "/articles?b=2");
    }

    #[test]
    fn test_overlapping_key_is_overwritten_in_place() {
        let routes = RouteMap::build(main_routes()).unwrap();
        let state = state_at(&routes, "/articles?a=1&b=2");

        let href =
            create_href(&routes, &state, &RouteRef::query_update([("a", "9")])).unwrap();
        assert_eq!(href, "/articles?a=9&b=2");
    }

    #[test]
    fn test_empty_query_appends_nothing() {
        let routes = RouteMap::build(main_routes()).unwrap();
        let state = state_at(&routes, "/articles");

        let href = create_href(
            &routes,
            &state,
            &RouteRef::to(routes.id("Articles").unwrap()),
        )
        .unwrap();
        assert_eq!(href, "/articles");
    }
}
