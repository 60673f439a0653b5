//! Canonical path expressions addressing locations inside a JSON document.
//!
//! Every diff record is keyed by a path built from `root` through successive
//! indexing steps: `root['items'][2]['name']`. The same canonical form is used
//! for excluded paths in [`CompareConfig`](crate::diff::CompareConfig).

use std::fmt;

/// One indexing step from a parent value into a child.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum PathSegment {
    /// Object member access by key, rendered `['key']`.
    Key(String),
    /// Array element access by position, rendered `[i]`.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => {
                write!(f, "['{}']", key.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// Address of a location inside a JSON document.
///
/// Two paths are equal iff they reach the same location through identical
/// indexing steps, which for the canonical rendering means identical strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DocPath {
    segments: Vec<PathSegment>,
}

impl DocPath {
    /// The document root, rendered `root`.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Child path for an object member.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        self.child(PathSegment::Key(key.to_string()))
    }

    /// Child path for an array element.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
