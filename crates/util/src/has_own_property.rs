use objkit_value::{parse_index, Graph, Node, NodeId};

/// Check if a node has an own entry with the given key.
///
/// Objects own their keys; arrays own every in-bounds canonical index.
/// Primitives and dates own nothing.
///
/// # Examples
///
/// ```
/// use objkit_value::Graph;
/// use objkit_util::has_own_property::has_own_property;
/// use serde_json::json;
///
/// let mut graph = Graph::new();
/// let obj = graph.insert_json(&json!({"foo": 1, "list": [1, 2]}));
/// let list = graph.child(obj, "list").unwrap();
///
/// assert!(has_own_property(&graph, obj, "foo"));
/// assert!(!has_own_property(&graph, obj, "baz"));
/// assert!(has_own_property(&graph, list, "1"));
/// assert!(!has_own_property(&graph, list, "2"));
/// ```
pub fn has_own_property(graph: &Graph, id: NodeId, key: &str) -> bool {
    match graph.node(id) {
        Node::Object(map) => map.contains_key(key),
        Node::Array(items) => parse_index(key).is_some_and(|i| i < items.len()),
        _ => false,
    }
}
