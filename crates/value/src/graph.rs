//! The node arena.
//!
//! Every node lives in a `Vec<Node>` and is addressed by its [`NodeId`].
//! Container nodes hold `NodeId`s, never nodes, so sharing a child or
//! pointing back at an ancestor is just storing an id twice.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::node::parse_index;
use crate::{GraphError, Kind, Node, NodeId};

/// Most undefined elements [`Graph::set_index`] inserts to reach an index.
pub const MAX_ARRAY_HOLE: usize = 1 << 16;

/// Arena owning the nodes of one or more value graphs.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check that `id` was allocated by this arena.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Allocate a node and return its handle.
    pub fn insert(&mut self, node: impl Into<Node>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node.into());
        id
    }

    pub fn undefined(&mut self) -> NodeId {
        self.insert(Node::Undefined)
    }

    pub fn null(&mut self) -> NodeId {
        self.insert(Node::Null)
    }

    pub fn bool(&mut self, b: bool) -> NodeId {
        self.insert(Node::Bool(b))
    }

    pub fn number(&mut self, n: f64) -> NodeId {
        self.insert(Node::Number(n))
    }

    pub fn string(&mut self, s: impl Into<String>) -> NodeId {
        self.insert(Node::String(s.into()))
    }

    pub fn date(&mut self, dt: DateTime<Utc>) -> NodeId {
        self.insert(Node::Date(dt))
    }

    /// Allocate an empty array.
    pub fn array(&mut self) -> NodeId {
        self.insert(Node::Array(Vec::new()))
    }

    /// Allocate an empty object.
    pub fn object(&mut self) -> NodeId {
        self.insert(Node::Object(IndexMap::new()))
    }

    pub fn array_from(&mut self, items: impl IntoIterator<Item = NodeId>) -> NodeId {
        self.insert(Node::Array(items.into_iter().collect()))
    }

    pub fn object_from<K: Into<String>>(
        &mut self,
        entries: impl IntoIterator<Item = (K, NodeId)>,
    ) -> NodeId {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.insert(Node::Object(map))
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to another arena and is out of bounds here.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn kind(&self, id: NodeId) -> Kind {
        self.node(id).kind()
    }

    pub fn is_nullish(&self, id: NodeId) -> bool {
        self.node(id).is_nullish()
    }

    pub fn is_container(&self, id: NodeId) -> bool {
        self.node(id).is_container()
    }

    pub fn is_truthy(&self, id: NodeId) -> bool {
        self.node(id).is_truthy()
    }

    pub fn as_array(&self, id: NodeId) -> Option<&[NodeId]> {
        match self.node(id) {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self, id: NodeId) -> Option<&IndexMap<String, NodeId>> {
        match self.node(id) {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable access to an array's element list.
    pub fn array_mut(&mut self, id: NodeId) -> Option<&mut Vec<NodeId>> {
        match &mut self.nodes[id.index()] {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable access to an object's entries.
    pub fn object_mut(&mut self, id: NodeId) -> Option<&mut IndexMap<String, NodeId>> {
        match &mut self.nodes[id.index()] {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Append `child` to an array.
    pub fn push(&mut self, array: NodeId, child: NodeId) -> Result<(), GraphError> {
        match &mut self.nodes[array.index()] {
            Node::Array(items) => {
                items.push(child);
                Ok(())
            }
            _ => Err(GraphError::NotAnArray),
        }
    }

    /// Store `child` at `index`, padding with undefined past the end.
    ///
    /// # Errors
    ///
    /// `GraphError::IndexOutOfRange` when the padding would exceed
    /// [`MAX_ARRAY_HOLE`] elements or cannot be allocated.
    pub fn set_index(
        &mut self,
        array: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), GraphError> {
        let len = match self.node(array) {
            Node::Array(items) => items.len(),
            _ => return Err(GraphError::NotAnArray),
        };
        if index - len.min(index) > MAX_ARRAY_HOLE {
            return Err(GraphError::IndexOutOfRange { index, len });
        }
        let hole = if index > len {
            Some(self.undefined())
        } else {
            None
        };
        if let Node::Array(items) = &mut self.nodes[array.index()] {
            if let Some(hole) = hole {
                items
                    .try_reserve(index + 1 - len)
                    .map_err(|_| GraphError::IndexOutOfRange { index, len })?;
                items.resize(index, hole);
            }
            if index < items.len() {
                items[index] = child;
            } else {
                items.push(child);
            }
        }
        Ok(())
    }

    /// Insert or overwrite `key` in an object, returning the previous child.
    ///
    /// An overwritten key keeps its position.
    pub fn set_key(
        &mut self,
        object: NodeId,
        key: impl Into<String>,
        child: NodeId,
    ) -> Result<Option<NodeId>, GraphError> {
        match &mut self.nodes[object.index()] {
            Node::Object(map) => Ok(map.insert(key.into(), child)),
            _ => Err(GraphError::NotAnObject),
        }
    }

    /// Remove `key` from an object, preserving the order of the rest.
    pub fn remove_key(&mut self, object: NodeId, key: &str) -> Result<Option<NodeId>, GraphError> {
        match &mut self.nodes[object.index()] {
            Node::Object(map) => Ok(map.shift_remove(key)),
            _ => Err(GraphError::NotAnObject),
        }
    }

    /// Look up a child by object key or canonical array index.
    ///
    /// Dates and primitives have no children.
    pub fn child(&self, container: NodeId, segment: &str) -> Option<NodeId> {
        match self.node(container) {
            Node::Object(map) => map.get(segment).copied(),
            Node::Array(items) => parse_index(segment).and_then(|i| items.get(i).copied()),
            _ => None,
        }
    }

    /// Own enumerable entries: object keys in order, array elements by index.
    pub fn entries(&self, id: NodeId) -> Vec<(String, NodeId)> {
        match self.node(id) {
            Node::Object(map) => map.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            Node::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), *v))
                .collect(),
            _ => Vec::new(),
        }
    }
}
