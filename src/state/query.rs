//! Query-string parsing and serialization.
//!
//! # Design Decisions
//! - Flat key → scalar value pairs; repeated keys keep the last value
//! - Insertion order is preserved and drives serialization order
//! - Percent-encoding delegated to form_urlencoded both ways

use indexmap::IndexMap;
use url::form_urlencoded;

/// A flat, insertion-ordered query map.
pub type QueryMap = IndexMap<String, String>;

/// Parse the query portion of a location into a map.
///
/// Accepts the raw search string with or without the leading `?`.
pub fn parse_query(search: &str) -> QueryMap {
    let raw = search.strip_prefix('?').unwrap_or(search);
    let mut query = QueryMap::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        query.insert(key.into_owned(), value.into_owned());
    }
    query
}

/// Serialize a query map back into `key=value&...` form, without the
/// leading `?`. Returns an empty string for an empty map.
pub fn serialize_query(query: &QueryMap) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
