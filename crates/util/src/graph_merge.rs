//! Deep merge of two value graphs.

use indexmap::IndexMap;
use objkit_value::{Graph, Kind, Node, NodeId};

/// Merge `overlay` into a copy of `base`, right-biased.
///
/// The result is a new object that starts with `base`'s own entries (array
/// elements keyed by index; primitives and dates contribute nothing). Each
/// entry of `overlay` then either recurses, when its value is an object, or
/// replaces the entry wholesale: arrays and dates are never merged
/// element-wise.
///
/// Only the top-level `base` is spread by index when it is an array. Below
/// the top, an object overlay meets an array in `base` as if the array were
/// absent, so it merges into a fresh empty object and the array's elements
/// are dropped.
///
/// Neither input is mutated. Children that are not recursed into are shared
/// with the inputs, not copied.
///
/// # Examples
///
/// ```
/// use objkit_value::Graph;
/// use objkit_util::graph_merge::merge;
/// use serde_json::json;
///
/// let mut graph = Graph::new();
/// let base = graph.insert_json(&json!({"a": {"b": 1, "c": 2}}));
/// let overlay = graph.insert_json(&json!({"a": {"c": 3, "d": 4}}));
///
/// let merged = merge(&mut graph, base, overlay);
/// assert_eq!(graph.to_json(merged).unwrap(), json!({"a": {"b": 1, "c": 3, "d": 4}}));
/// ```
pub fn merge(graph: &mut Graph, base: NodeId, overlay: NodeId) -> NodeId {
    let mut result: IndexMap<String, NodeId> = graph.entries(base).into_iter().collect();

    for (key, value) in graph.entries(overlay) {
        let merged = if graph.kind(value) == Kind::Object {
            let target = match result.get(&key) {
                Some(&existing) if graph.kind(existing) == Kind::Object => existing,
                _ => graph.object(),
            };
            merge(graph, target, value)
        } else {
            value
        };
        result.insert(key, merged);
    }

    graph.insert(Node::Object(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn merge_json(base: serde_json::Value, overlay: serde_json::Value) -> serde_json::Value {
        let mut graph = Graph::new();
        let base = graph.insert_json(&base);
        let overlay = graph.insert_json(&overlay);
        let merged = merge(&mut graph, base, overlay);
        graph.to_json(merged).unwrap()
    }

    #[test]
    fn test_merge_simple_objects() {
        assert_eq!(
            merge_json(json!({"a": 1, "b": 2}), json!({"b": 3, "c": 4})),
            json!({"a": 1, "b": 3, "c": 4})
        );
    }

    #[test]
    fn test_merge_nested_objects() {
        assert_eq!(
            merge_json(json!({"a": {"b": 1, "c": 2}}), json!({"a": {"c": 3, "d": 4}})),
            json!({"a": {"b": 1, "c": 3, "d": 4}})
        );
    }

    #[test]
    fn test_merge_replaces_arrays() {
        assert_eq!(
            merge_json(json!({"items": [1, 2, 3]}), json!({"items": [4, 5]})),
            json!({"items": [4, 5]})
        );
    }

    #[test]
    fn test_merge_object_over_primitive() {
        assert_eq!(
            merge_json(json!({"a": 1}), json!({"a": {"b": 2}})),
            json!({"a": {"b": 2}})
        );
        assert_eq!(
            merge_json(json!({"a": [1, 2]}), json!({"a": {"b": 2}})),
            json!({"a": {"b": 2}})
        );
    }

    #[test]
    fn test_merge_primitive_over_object() {
        assert_eq!(
            merge_json(json!({"a": {"b": 2}}), json!({"a": null})),
            json!({"a": null})
        );
    }

    #[test]
    fn test_merge_key_order() {
        let merged = merge_json(json!({"x": 1, "y": 2}), json!({"z": 3, "x": 4}));
        let keys: Vec<_> = merged.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_merge_array_base_is_keyed_by_index() {
        assert_eq!(
            merge_json(json!(["a", "b"]), json!({"1": "c"})),
            json!({"0": "a", "1": "c"})
        );
    }

    #[test]
    fn test_merge_nested_array_base_is_dropped() {
        assert_eq!(
            merge_json(json!({"a": ["x", "y"]}), json!({"a": {"1": "z"}})),
            json!({"a": {"1": "z"}})
        );
        assert_eq!(
            merge_json(json!(["x", "y"]), json!({"1": "z"})),
            json!({"0": "x", "1": "z"})
        );
    }

    #[test]
    fn test_merge_primitive_inputs() {
        assert_eq!(merge_json(json!(5), json!({"a": 1})), json!({"a": 1}));
        assert_eq!(merge_json(json!({"a": 1}), json!("str")), json!({"a": 1}));
    }

    #[test]
    fn test_merge_replaces_dates() {
        let mut graph = Graph::new();
        let d1 = graph.date(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        let later = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        let d2 = graph.date(later);
        let base = graph.object_from([("date", d1)]);
        let overlay = graph.object_from([("date", d2)]);

        let merged = merge(&mut graph, base, overlay);
        assert_eq!(graph.child(merged, "date"), Some(d2));
        assert_eq!(graph.node(d2), &Node::Date(later));
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let mut graph = Graph::new();
        let base = graph.insert_json(&json!({"a": 1, "b": {"c": 2}}));
        let overlay = graph.insert_json(&json!({"b": {"d": 3}, "e": 4}));

        let merged = merge(&mut graph, base, overlay);
        assert_eq!(graph.to_json(base).unwrap(), json!({"a": 1, "b": {"c": 2}}));
        assert_eq!(graph.to_json(overlay).unwrap(), json!({"b": {"d": 3}, "e": 4}));
        assert_eq!(
            graph.to_json(merged).unwrap(),
            json!({"a": 1, "b": {"c": 2, "d": 3}, "e": 4})
        );
        assert_ne!(graph.child(merged, "b"), graph.child(base, "b"));
    }

    #[test]
    fn test_merge_shares_untouched_branches() {
        let mut graph = Graph::new();
        let base = graph.insert_json(&json!({"keep": {"x": 1}, "list": [1]}));
        let overlay = graph.insert_json(&json!({"other": true}));

        let merged = merge(&mut graph, base, overlay);
        assert_eq!(graph.child(merged, "keep"), graph.child(base, "keep"));
        assert_eq!(graph.child(merged, "list"), graph.child(base, "list"));
        assert_eq!(graph.child(merged, "other"), graph.child(overlay, "other"));
    }
}
