//! Dot-delimited path utilities for objkit value graphs.
//!
//! A dot path names a location by its keys joined with `.`: `"a.b.c"`.
//! Array elements are addressed by decimal index, `"items.1"`.
//!
//! # Example
//!
//! ```
//! use objkit_dot_path::{get, parse_dot_path, set};
//! use objkit_value::Graph;
//! use serde_json::json;
//!
//! assert_eq!(parse_dot_path("a.b.c"), vec!["a", "b", "c"]);
//!
//! let mut graph = Graph::new();
//! let doc = graph.insert_json(&json!({}));
//! let value = graph.number(1.0);
//! let updated = set(&mut graph, doc, "a.b.c", value);
//!
//! assert_eq!(graph.to_json(updated).unwrap(), json!({"a": {"b": {"c": 1}}}));
//! assert_eq!(get(&graph, updated, "a.b.c", None), Some(value));
//! assert_eq!(get(&graph, updated, "a.x", None), None);
//! ```

use thiserror::Error;

mod get;
mod set;
pub mod types;
mod util;

pub use get::get;
pub use set::set;
pub use types::{Path, PathStep};
pub use util::{format_dot_path, is_child, is_root, is_valid_index, parent, parse_dot_path};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DotPathError {
    #[error("NO_PARENT")]
    NoParent,
}
