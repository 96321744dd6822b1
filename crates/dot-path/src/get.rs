use objkit_value::{Graph, Kind, Node, NodeId};

/// Read the value at a dot path.
///
/// The empty path returns `root` itself. Otherwise each key is looked up in
/// turn; stepping into `null`, undefined or a primitive gives up and returns
/// `default`. A missing key, or a final value that is undefined, also yields
/// `default`. Dates can be stepped into but have no keys.
///
/// `default` is `None` when the caller has no fallback.
///
/// # Example
///
/// ```
/// use objkit_dot_path::get;
/// use objkit_value::Graph;
/// use serde_json::json;
///
/// let mut graph = Graph::new();
/// let doc = graph.insert_json(&json!({"a": {"b": {"c": 1}}, "items": [10, 20]}));
/// let fallback = graph.string("default");
///
/// let c = get(&graph, doc, "a.b.c", None).unwrap();
/// assert_eq!(graph.to_json(c).unwrap(), json!(1));
/// assert_eq!(get(&graph, doc, "a.b.e", Some(fallback)), Some(fallback));
///
/// let second = get(&graph, doc, "items.1", None).unwrap();
/// assert_eq!(graph.to_json(second).unwrap(), json!(20));
/// ```
pub fn get(graph: &Graph, root: NodeId, path: &str, default: Option<NodeId>) -> Option<NodeId> {
    if path.is_empty() {
        return Some(root);
    }

    let mut current = Some(root);
    for step in path.split('.') {
        let Some(id) = current else {
            return default;
        };
        current = match graph.node(id) {
            Node::Object(_) | Node::Array(_) => graph.child(id, step),
            Node::Date(_) => None,
            _ => return default,
        };
    }

    match current {
        Some(id) if graph.kind(id) != Kind::Undefined => Some(id),
        _ => default,
    }
}
