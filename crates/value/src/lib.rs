//! objkit-value - the value graph shared by every objkit crate.
//!
//! A value graph is a set of [`Node`]s owned by a [`Graph`] arena. Containers
//! refer to their children by [`NodeId`], so a child may be shared between
//! several parents, and a descendant may point back at an ancestor.
//!
//! # Example
//!
//! ```
//! use objkit_value::{Graph, Kind};
//! use serde_json::json;
//!
//! let mut graph = Graph::new();
//! let root = graph.insert_json(&json!({"a": {"b": [1, 2]}}));
//!
//! // Back-reference: root.self -> root
//! graph.set_key(root, "self", root).unwrap();
//! assert_eq!(graph.kind(root), Kind::Object);
//! assert!(graph.to_json(root).is_err());
//! ```

mod convert;
mod error;
mod graph;
mod node;

pub use error::GraphError;
pub use graph::{Graph, MAX_ARRAY_HOLE};
pub use node::{parse_index, Kind, Node, NodeId};
