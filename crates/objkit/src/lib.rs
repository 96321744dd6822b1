//! objkit - structural operations over value graphs.
//!
//! Values live in a [`Graph`] arena and are addressed by [`NodeId`], so
//! shared children and back-references are ordinary values. On top of that
//! model this crate gathers:
//!
//! - [`clone`]: deep copy preserving cycles and sharing
//! - [`merge`]: right-biased deep merge of objects
//! - [`get`] / [`set`]: dot-path reads and copy-on-write writes
//! - [`deep_equal`]: structural equality
//!
//! plus the small helpers from `objkit-util`, and the [`cli`] module backing
//! the `objkit` binary.
//!
//! # Example
//!
//! ```
//! use objkit::{clone, deep_equal, get, merge, set, Graph};
//! use serde_json::json;
//!
//! let mut graph = Graph::new();
//! let config = graph.insert_json(&json!({"server": {"port": 80}}));
//! let local = graph.insert_json(&json!({"server": {"host": "localhost"}}));
//!
//! let merged = merge(&mut graph, config, local);
//! let port = graph.number(8080.0);
//! let updated = set(&mut graph, merged, "server.port", port);
//! assert_eq!(get(&graph, updated, "server.port", None), Some(port));
//!
//! let copy = clone(&mut graph, updated);
//! assert!(deep_equal(&graph, copy, updated));
//! ```

pub mod cli;

pub use objkit_dot_path::{format_dot_path, get, parse_dot_path, set, DotPathError};
pub use objkit_util::{
    average, camel_case, capitalize, chunk, clamp, clone, compact, compact_node, deep_equal,
    deep_equal_with, difference, flatten, group_by, has_own_property, intersection, is_date,
    is_date_node, is_email, is_empty_node, is_empty_value, is_uuid, kebab_case, merge, omit,
    pick, random, reverse, sum, truncate, try_deep_equal, try_deep_equal_with, uniq, DateInput,
    EqualOptions, Random, TemporalEquality, Truthy, UtilError,
};
pub use objkit_value::{Graph, GraphError, Kind, Node, NodeId, MAX_ARRAY_HOLE};
