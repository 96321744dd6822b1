use objkit_value::{Graph, Node, NodeId};
use serde_json::Value;

/// Check if a node is empty.
///
/// `null` and undefined are empty, strings and arrays are empty when they
/// have no elements, objects when they have no own keys. A date has no own
/// keys, so it counts as empty. Numbers and booleans are never empty.
///
/// # Examples
///
/// ```
/// use objkit_value::Graph;
/// use objkit_util::is_empty::is_empty_node;
/// use serde_json::json;
///
/// let mut graph = Graph::new();
/// let empty = graph.insert_json(&json!({}));
/// let zero = graph.insert_json(&json!(0));
/// let nested = graph.insert_json(&json!({"a": {}}));
///
/// assert!(is_empty_node(&graph, empty));
/// assert!(!is_empty_node(&graph, zero));
/// assert!(!is_empty_node(&graph, nested));
/// ```
pub fn is_empty_node(graph: &Graph, id: NodeId) -> bool {
    match graph.node(id) {
        Node::Undefined | Node::Null => true,
        Node::String(s) => s.is_empty(),
        Node::Array(items) => items.is_empty(),
        Node::Object(map) => map.is_empty(),
        Node::Date(_) => true,
        Node::Bool(_) | Node::Number(_) => false,
    }
}

/// Check if a `serde_json::Value` is empty, with the same rules as
/// [`is_empty_node`].
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
