//! Node types of the value graph.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Handle of a node inside a [`Graph`](crate::Graph).
///
/// Two handles are the same node iff they compare equal; this is the
/// identity used for cycle handling and aliasing checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the value graph.
///
/// Primitive and date nodes never change after allocation. Only `Array` and
/// `Object` nodes are mutated, through the container methods on `Graph`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Absent value (missing key, array hole).
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Temporal scalar: a single instant.
    Date(DateTime<Utc>),
    Array(Vec<NodeId>),
    /// Keyed mapping. Iteration follows insertion order.
    Object(IndexMap<String, NodeId>),
}

/// Dynamic category of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    Date,
    Array,
    Object,
}

impl Node {
    pub fn kind(&self) -> Kind {
        match self {
            Node::Undefined => Kind::Undefined,
            Node::Null => Kind::Null,
            Node::Bool(_) => Kind::Bool,
            Node::Number(_) => Kind::Number,
            Node::String(_) => Kind::String,
            Node::Date(_) => Kind::Date,
            Node::Array(_) => Kind::Array,
            Node::Object(_) => Kind::Object,
        }
    }

    /// `null` or undefined.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Node::Undefined | Node::Null)
    }

    /// Arrays and objects: the nodes that hold children.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Array(_) | Node::Object(_))
    }

    /// JavaScript-style truthiness.
    ///
    /// `false`, `0`, `NaN`, `""`, `null` and undefined are falsy; every
    /// container and every date is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Node::Undefined | Node::Null => false,
            Node::Bool(b) => *b,
            Node::Number(n) => *n != 0.0 && !n.is_nan(),
            Node::String(s) => !s.is_empty(),
            Node::Date(_) | Node::Array(_) | Node::Object(_) => true,
        }
    }
}

/// Parse a canonical array index: `"0"`, `"17"`, but not `"01"`, `"-1"` or `""`.
pub fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    segment.parse().ok()
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Number(n)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Number(n as f64)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<DateTime<Utc>> for Node {
    fn from(dt: DateTime<Utc>) -> Self {
        Node::Date(dt)
    }
}
