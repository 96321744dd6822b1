//! Key selection: `omit` and `pick`.

use objkit_value::{Graph, NodeId};

use crate::has_own_property::has_own_property;

/// New object with every own entry of `object` except `keys`.
///
/// Values are shared with `object`, not copied.
pub fn omit<S: AsRef<str>>(graph: &mut Graph, object: NodeId, keys: &[S]) -> NodeId {
    let entries: Vec<(String, NodeId)> = graph
        .entries(object)
        .into_iter()
        .filter(|(key, _)| !keys.iter().any(|k| k.as_ref() == key))
        .collect();
    graph.object_from(entries)
}

/// New object with only the listed keys that `object` owns, in `keys` order.
///
/// # Examples
///
/// ```
/// use objkit_value::Graph;
/// use objkit_util::pick::pick;
/// use serde_json::json;
///
/// let mut graph = Graph::new();
/// let obj = graph.insert_json(&json!({"a": 1, "b": 2, "c": 3}));
/// let picked = pick(&mut graph, obj, &["c", "x", "a"]);
/// assert_eq!(graph.to_json(picked).unwrap(), json!({"c": 3, "a": 1}));
/// ```
pub fn pick<S: AsRef<str>>(graph: &mut Graph, object: NodeId, keys: &[S]) -> NodeId {
    let entries: Vec<(String, NodeId)> = keys
        .iter()
        .map(AsRef::as_ref)
        .filter(|key| has_own_property(graph, object, key))
        .filter_map(|key| graph.child(object, key).map(|child| (key.to_string(), child)))
        .collect();
    graph.object_from(entries)
}
