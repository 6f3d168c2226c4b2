//! Path templates.
//!
//! # Responsibilities
//! - Parse a template such as `/artefact/{id}` into segments, once, at registration
//! - Match a normalized request path (already split) against the segments
//! - Capture parameter values into [`MatchArgs`]
//!
//! # Design Decisions
//! - Literal comparison is byte-exact (case-sensitive)
//! - `{}` is a literal, not an unnamed parameter
//! - Segment count is fixed at parse time; a count mismatch never matches
//! - Malformed templates are not errors, they simply never match

use std::fmt;

use crate::routing::args::MatchArgs;
use crate::routing::path;

/// One `/`-separated piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment exactly.
    Literal(String),
    /// Captures the request segment under this name.
    Parameter(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        {
            Some(name) if !name.is_empty() => Segment::Parameter(name.to_string()),
            _ => Segment::Literal(raw.to_string()),
        }
    }
}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse a template. A single leading `/` is ignored.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = path::segments(&source).map(Segment::parse).collect();
        Self { source, segments }
    }

    /// The template exactly as it was registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn param_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Parameter(_)))
            .count()
    }

    /// Match already-split request segments.
    ///
    /// Returns the captured arguments on success. A template without
    /// parameters yields an empty, but present, [`MatchArgs`].
    pub fn matches(&self, request: &[&str]) -> Option<MatchArgs> {
        if request.len() != self.segments.len() {
            return None;
        }

        let mut args = MatchArgs::with_capacity(self.param_count());
        for (segment, value) in self.segments.iter().zip(request) {
            match segment {
                Segment::Parameter(name) => args.insert(name.clone(), (*value).to_string()),
                Segment::Literal(literal) if literal == value => {}
                Segment::Literal(_) => return None,
            }
        }
        Some(args)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
