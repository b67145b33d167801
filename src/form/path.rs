//! Dotted field paths and the nested tree they address
//!
//! Form values and validation messages are both stored as a [`Tree`], a
//! nested ordered mapping whose leaves are addressed by a [`FieldPath`]
//! such as `contact_info.email`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing a path or writing through one
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("field path is empty")]
    Empty,
    #[error("field path `{0}` contains an empty segment")]
    EmptySegment(String),
    #[error("cannot write `{path}`: `{segment}` already holds a different shape")]
    ShapeConflict { path: String, segment: String },
}

/// A validated, dot-separated path to a leaf in a [`Tree`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path, rejecting empty paths and empty segments
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Err(PathError::Empty);
        }
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(PathError::EmptySegment(raw.to_string()));
        }
        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when `self` names a branch that `other` lives under
    pub fn is_strict_prefix_of(&self, other: &FieldPath) -> bool {
        self.segments.len() < other.segments.len()
            && other.segments.starts_with(&self.segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.raw
    }
}

/// One entry of a [`Tree`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node<T> {
    Leaf(T),
    Branch(Tree<T>),
}

/// Nested mapping from path segments to leaves, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tree<T> {
    entries: IndexMap<String, Node<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaf at `path`, or `None` if any segment is missing or the path
    /// does not end on a leaf
    pub fn get(&self, path: &FieldPath) -> Option<&T> {
        match self.get_node(path)? {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// Node (leaf or branch) at `path`
    pub fn get_node(&self, path: &FieldPath) -> Option<&Node<T>> {
        let (last, parents) = path.segments().split_last()?;
        let mut current = self;
        for segment in parents {
            match current.entries.get(segment)? {
                Node::Branch(tree) => current = tree,
                Node::Leaf(_) => return None,
            }
        }
        current.entries.get(last)
    }

    /// Assign `value` at `path`, creating intermediate branches as needed.
    ///
    /// Writing through an existing leaf, or replacing a branch with a leaf,
    /// fails with [`PathError::ShapeConflict`] and leaves the tree untouched.
    pub fn set(&mut self, path: &FieldPath, value: T) -> Result<(), PathError> {
        self.check_shape(path)?;

        let Some((last, parents)) = path.segments().split_last() else {
            return Err(PathError::Empty);
        };
        let mut current = self;
        for segment in parents {
            let node = current
                .entries
                .entry(segment.clone())
                .or_insert_with(|| Node::Branch(Tree::new()));
            current = match node {
                Node::Branch(tree) => tree,
                // check_shape rejected leaves on the way down
                Node::Leaf(_) => return Err(shape_conflict(path, segment)),
            };
        }
        current.entries.insert(last.clone(), Node::Leaf(value));
        Ok(())
    }

    fn check_shape(&self, path: &FieldPath) -> Result<(), PathError> {
        let Some((last, parents)) = path.segments().split_last() else {
            return Err(PathError::Empty);
        };
        let mut current = self;
        for segment in parents {
            match current.entries.get(segment) {
                None => return Ok(()),
                Some(Node::Branch(tree)) => current = tree,
                Some(Node::Leaf(_)) => return Err(shape_conflict(path, segment)),
            }
        }
        match current.entries.get(last) {
            Some(Node::Branch(_)) => Err(shape_conflict(path, last)),
            _ => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of leaves anywhere in the tree
    pub fn leaf_count(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                Node::Leaf(_) => 1,
                Node::Branch(tree) => tree.leaf_count(),
            })
            .sum()
    }

    /// All leaves as `(dotted path, value)`, depth-first in insertion order
    pub fn leaves(&self) -> Vec<(String, &T)> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a T)>) {
        for (key, node) in &self.entries {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match node {
                Node::Leaf(value) => out.push((path, value)),
                Node::Branch(tree) => tree.collect_leaves(&path, out),
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn shape_conflict(path: &FieldPath, segment: &str) -> PathError {
    PathError::ShapeConflict {
        path: path.to_string(),
        segment: segment.to_string(),
    }
}
