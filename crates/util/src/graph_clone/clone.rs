use std::collections::HashMap;

use indexmap::IndexMap;
use objkit_value::{Graph, Node, NodeId};
use tracing::trace;

/// Creates a deep clone of the value graph under `root`.
///
/// Every array, object and date reachable from `root` gets a new node.
/// Primitives are immutable and are returned as-is. A node reached twice
/// (a back-reference or a shared child) is cloned once, so the clone has the
/// same shape as the source, cycles included.
///
/// Dates follow the same rule: a date reached twice maps to one new date
/// node rather than one copy per occurrence. Date nodes are never mutated,
/// so the shared copy cannot be observed through the clone.
///
/// # Examples
///
/// ```
/// use objkit_value::Graph;
/// use objkit_util::graph_clone::clone;
/// use serde_json::json;
///
/// let mut graph = Graph::new();
/// let original = graph.insert_json(&json!({"foo": [1, 2, 3]}));
/// graph.set_key(original, "self", original).unwrap();
///
/// let cloned = clone(&mut graph, original);
/// assert_ne!(cloned, original);
/// assert_eq!(graph.child(cloned, "self"), Some(cloned));
/// ```
pub fn clone(graph: &mut Graph, root: NodeId) -> NodeId {
    let mut visited = HashMap::new();
    clone_node(graph, root, &mut visited)
}

fn clone_node(graph: &mut Graph, id: NodeId, visited: &mut HashMap<NodeId, NodeId>) -> NodeId {
    if let Some(&copy) = visited.get(&id) {
        trace!(source = %id, copy = %copy, "reusing in-progress clone");
        return copy;
    }
    match graph.node(id) {
        Node::Date(dt) => {
            let dt = *dt;
            let copy = graph.date(dt);
            visited.insert(id, copy);
            copy
        }
        Node::Array(items) => {
            let items = items.clone();
            let copy = graph.array();
            visited.insert(id, copy);
            let cloned: Vec<NodeId> = items
                .into_iter()
                .map(|item| clone_node(graph, item, visited))
                .collect();
            if let Some(slot) = graph.array_mut(copy) {
                *slot = cloned;
            }
            copy
        }
        Node::Object(map) => {
            let entries: Vec<(String, NodeId)> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
            let copy = graph.object();
            visited.insert(id, copy);
            let cloned: IndexMap<String, NodeId> = entries
                .into_iter()
                .map(|(key, child)| (key, clone_node(graph, child, visited)))
                .collect();
            if let Some(slot) = graph.object_mut(copy) {
                *slot = cloned;
            }
            copy
        }
        Node::Undefined | Node::Null | Node::Bool(_) | Node::Number(_) | Node::String(_) => id,
    }
}
