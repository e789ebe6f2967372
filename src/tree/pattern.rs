//! Route pattern parsing and segment comparison.
//!
//! # Responsibilities
//! - Parse pattern strings into literal and parameter segments
//! - Match a pattern against a prefix of a split pathname
//! - Expose declared parameter names
//!
//! # Design Decisions
//! - Structural segment comparison only, no regex
//! - `:name` matches exactly one non-empty path segment
//! - A pattern with no segments ("/") matches only an exhausted pathname

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must match the path segment exactly.
    Literal(String),
    /// Matches any single non-empty path segment and binds it.
    Param(String),
}

/// A parsed route pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse a pattern string like `/news/:category`.
    ///
    /// Empty segments (leading, trailing or doubled slashes) are ignored,
    /// so `/` parses to a pattern with no segments.
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Build a pattern by appending `child` segments to this one.
    pub fn join(&self, child: &Pattern) -> Pattern {
        let mut segments = self.segments.clone();
        segments.extend(child.segments.iter().cloned());
        Pattern { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Names of the `:name` segments, in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match this pattern against the front of `path` segments.
    ///
    /// Returns the parameter bindings collected along the way, or `None`
    /// if any segment fails to match. Matching consumes exactly
    /// `self.len()` segments; the caller continues with the rest.
    pub fn match_prefix(&self, path: &[&str]) -> Option<Vec<(String, String)>> {
        if path.len() < self.segments.len() {
            return None;
        }
        let mut bindings = Vec::new();
        for (segment, actual) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(expected) => {
                    if expected != actual {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    bindings.push((name.clone(), (*actual).to_string()));
                }
            }
        }
        Some(bindings)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => write!(f, "/{}", s)?,
                Segment::Param(name) => write!(f, "/:{}", name)?,
            }
        }
        Ok(())
    }
}

/// Split a pathname into non-empty segments.
pub fn split_path(pathname: &str) -> Vec<&str> {
    pathname.split('/').filter(|s| !s.is_empty()).collect()
}
