//! Core type definitions for the co-star graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// A person in the graph, identified by display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(name: impl Into<String>) -> Self {
        Vertex(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for Vertex {
    fn from(s: String) -> Self {
        Vertex(s)
    }
}

impl From<&str> for Vertex {
    fn from(s: &str) -> Self {
        Vertex(s.to_string())
    }
}

/// Titles of the works two people share.
///
/// Ordered so labels print and serialize the same way every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeLabel(BTreeSet<String>);

impl EdgeLabel {
    pub fn new() -> Self {
        EdgeLabel(BTreeSet::new())
    }

    /// Label holding a single title
    pub fn single(title: impl Into<String>) -> Self {
        let mut label = Self::new();
        label.insert(title);
        label
    }

    pub fn insert(&mut self, title: impl Into<String>) -> bool {
        self.0.insert(title.into())
    }

    /// Add every title of `other` to this label
    pub fn merge(&mut self, other: EdgeLabel) {
        self.0.extend(other.0);
    }

    pub fn contains(&self, title: &str) -> bool {
        self.0.contains(title)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, title) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", title)?;
        }
        write!(f, "]")
    }
}

impl<S: Into<String>> FromIterator<S> for EdgeLabel {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        EdgeLabel(iter.into_iter().map(Into::into).collect())
    }
}
