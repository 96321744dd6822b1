use std::collections::HashSet;

use objkit_value::{Graph, GraphError, Node, NodeId};
use tracing::warn;

/// How dates take part in equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemporalEquality {
    /// A date is an object with no own keys: any two dates are equal, and a
    /// date equals an empty object.
    #[default]
    Opaque,
    /// Dates are equal iff they hold the same instant, and never equal a
    /// non-date.
    Instant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualOptions {
    pub temporal: TemporalEquality,
    /// Container nesting at which comparison gives up. `None` compares
    /// acyclic input of any depth.
    pub max_depth: Option<usize>,
}

/// Performs a deep equality check between two nodes.
///
/// - The same node is equal to itself.
/// - Primitives compare by value (`NaN` never equals anything).
/// - Arrays compare element-by-element.
/// - Objects compare key-by-key, ignoring key order.
///
/// Comparing two distinct cyclic graphs would recurse forever. The pair of
/// containers being compared is tracked along the current path, and when a
/// pair comes round again the comparison is aborted, logged and reported as
/// `false`. Use [`try_deep_equal`] to observe it as an error instead.
///
/// # Examples
///
/// ```
/// use objkit_value::Graph;
/// use objkit_util::graph_equal::deep_equal;
/// use serde_json::json;
///
/// let mut graph = Graph::new();
/// let a = graph.insert_json(&json!({"foo": [1, 2, 3]}));
/// let b = graph.insert_json(&json!({"foo": [1, 2, 3]}));
/// let c = graph.insert_json(&json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equal(&graph, a, b));
/// assert!(!deep_equal(&graph, a, c));
/// ```
pub fn deep_equal(graph: &Graph, a: NodeId, b: NodeId) -> bool {
    deep_equal_with(graph, a, b, &EqualOptions::default())
}

pub fn deep_equal_with(graph: &Graph, a: NodeId, b: NodeId, options: &EqualOptions) -> bool {
    match try_deep_equal_with(graph, a, b, options) {
        Ok(equal) => equal,
        Err(err) => {
            warn!(%a, %b, error = %err, "deep equality aborted");
            false
        }
    }
}

/// Like [`deep_equal`], but reports an aborted comparison as an error.
///
/// # Errors
///
/// `GraphError::Cycle` when the same pair of containers is reached again
/// below itself, and `GraphError::DepthLimitExceeded` when
/// [`EqualOptions::max_depth`] is set and nesting goes past it.
pub fn try_deep_equal(graph: &Graph, a: NodeId, b: NodeId) -> Result<bool, GraphError> {
    try_deep_equal_with(graph, a, b, &EqualOptions::default())
}

pub fn try_deep_equal_with(
    graph: &Graph,
    a: NodeId,
    b: NodeId,
    options: &EqualOptions,
) -> Result<bool, GraphError> {
    let mut path = HashSet::new();
    equal_at(graph, a, b, options, &mut path)
}

fn equal_at(
    graph: &Graph,
    a: NodeId,
    b: NodeId,
    options: &EqualOptions,
    path: &mut HashSet<(NodeId, NodeId)>,
) -> Result<bool, GraphError> {
    if a == b {
        return Ok(true);
    }
    let (node_a, node_b) = (graph.node(a), graph.node(b));
    match (node_a, node_b) {
        (Node::Undefined, Node::Undefined) | (Node::Null, Node::Null) => Ok(true),
        (Node::Bool(x), Node::Bool(y)) => Ok(x == y),
        (Node::Number(x), Node::Number(y)) => Ok(x == y),
        (Node::String(x), Node::String(y)) => Ok(x == y),

        // Arrays
        (Node::Array(arr_a), Node::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return Ok(false);
            }
            enter(a, b, options, path)?;
            let mut equal = Ok(true);
            for (x, y) in arr_a.iter().zip(arr_b) {
                equal = equal_at(graph, *x, *y, options, path);
                if equal != Ok(true) {
                    break;
                }
            }
            path.remove(&(a, b));
            equal
        }

        (Node::Date(x), Node::Date(y)) if options.temporal == TemporalEquality::Instant => {
            Ok(x == y)
        }
        (Node::Date(_), _) | (_, Node::Date(_))
            if options.temporal == TemporalEquality::Instant =>
        {
            Ok(false)
        }

        // Objects, and dates seen as key-less objects
        (Node::Object(_) | Node::Date(_), Node::Object(_) | Node::Date(_)) => {
            let keys_a = graph.entries(a);
            let keys_b = graph.as_object(b);
            let len_b = keys_b.map_or(0, |map| map.len());
            if keys_a.len() != len_b {
                return Ok(false);
            }
            enter(a, b, options, path)?;
            let mut equal = Ok(true);
            for (key, val_a) in keys_a {
                equal = match keys_b.and_then(|map| map.get(&key)) {
                    Some(val_b) => equal_at(graph, val_a, *val_b, options, path),
                    None => Ok(false),
                };
                if equal != Ok(true) {
                    break;
                }
            }
            path.remove(&(a, b));
            equal
        }

        // Different types are never equal
        _ => Ok(false),
    }
}

/// Push the container pair `(a, b)` onto the comparison path.
fn enter(
    a: NodeId,
    b: NodeId,
    options: &EqualOptions,
    path: &mut HashSet<(NodeId, NodeId)>,
) -> Result<(), GraphError> {
    if let Some(limit) = options.max_depth {
        if path.len() >= limit {
            return Err(GraphError::DepthLimitExceeded { limit });
        }
    }
    if !path.insert((a, b)) {
        return Err(GraphError::Cycle(a));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};

    fn eq(a: Value, b: Value) -> bool {
        let mut graph = Graph::new();
        let a = graph.insert_json(&a);
        let b = graph.insert_json(&b);
        deep_equal(&graph, a, b)
    }

    // Scalar tests
    #[test]
    fn test_equal_numbers() {
        assert!(eq(json!(1), json!(1)));
        assert!(!eq(json!(1), json!(2)));
    }

    #[test]
    fn test_number_and_array_not_equal() {
        assert!(!eq(json!(1), json!([])));
    }

    #[test]
    fn test_zero_and_null_not_equal() {
        assert!(!eq(json!(0), json!(null)));
    }

    #[test]
    fn test_strings() {
        assert!(eq(json!("a"), json!("a")));
        assert!(!eq(json!("a"), json!("b")));
        assert!(!eq(json!(""), json!(null)));
    }

    #[test]
    fn test_booleans() {
        assert!(eq(json!(true), json!(true)));
        assert!(eq(json!(false), json!(false)));
        assert!(!eq(json!(true), json!(false)));
        assert!(!eq(json!(1), json!(true)));
        assert!(!eq(json!(0), json!(false)));
        assert!(!eq(json!(1), json!("1")));
    }

    #[test]
    fn test_null_and_undefined() {
        let mut graph = Graph::new();
        let null = graph.null();
        let other_null = graph.null();
        let undefined = graph.undefined();
        let other_undefined = graph.undefined();
        assert!(deep_equal(&graph, null, other_null));
        assert!(deep_equal(&graph, undefined, other_undefined));
        assert!(!deep_equal(&graph, null, undefined));
        assert!(!deep_equal(&graph, undefined, null));
    }

    #[test]
    fn test_nan_is_not_equal_to_itself_by_value() {
        let mut graph = Graph::new();
        let a = graph.number(f64::NAN);
        let b = graph.number(f64::NAN);
        assert!(!deep_equal(&graph, a, b));
        // Same node short-circuits.
        assert!(deep_equal(&graph, a, a));
    }

    #[test]
    fn test_signed_zero() {
        let mut graph = Graph::new();
        let a = graph.number(0.0);
        let b = graph.number(-0.0);
        assert!(deep_equal(&graph, a, b));
    }

    // Object tests
    #[test]
    fn test_empty_objects_equal() {
        assert!(eq(json!({}), json!({})));
    }

    #[test]
    fn test_equal_objects_different_order() {
        assert!(eq(json!({"a": 1, "b": "2"}), json!({"b": "2", "a": 1})));
    }

    #[test]
    fn test_not_equal_objects() {
        assert!(!eq(json!({"a": 1, "b": "2"}), json!({"a": 1, "b": "2", "c": []})));
        assert!(!eq(json!({"a": 1, "b": 2}), json!({"a": 1})));
        assert!(!eq(json!({"a": 1, "c": 3}), json!({"a": 1, "d": 3})));
        assert!(!eq(json!({"a": {"b": 1}}), json!({"a": {"b": 2}})));
    }

    #[test]
    fn test_empty_object_and_array_not_equal() {
        assert!(!eq(json!({}), json!([])));
    }

    // Array tests
    #[test]
    fn test_arrays() {
        assert!(eq(json!([]), json!([])));
        assert!(eq(json!([1, 2, 3]), json!([1, 2, 3])));
        assert!(!eq(json!([1, 2, 3]), json!([1, 2, 4])));
        assert!(!eq(json!([1, 2, 3]), json!([1, 2])));
        assert!(!eq(json!([1, 2]), json!([1, 2, 3])));
    }

    #[test]
    fn test_arrays_of_objects() {
        assert!(eq(json!([{"a": 1}, {"b": 2}]), json!([{"a": 1}, {"b": 2}])));
        assert!(!eq(json!([{"a": 1}, {"b": 2}]), json!([{"a": 1}, {"b": 3}])));
    }

    #[test]
    fn test_nested_structures() {
        let a = json!({"a": {"b": {"c": 1}}, "d": [1, 2, {"e": 3}]});
        let c = json!({"a": {"b": {"c": 2}}, "d": [1, 2, {"e": 3}]});
        assert!(eq(a.clone(), a.clone()));
        assert!(!eq(a, c));
    }

    // Dates
    #[test]
    fn test_dates_opaque_by_default() {
        let mut graph = Graph::new();
        let d1 = graph.date(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        let d2 = graph.date(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        let empty = graph.object();
        let arr = graph.array();
        assert!(deep_equal(&graph, d1, d2));
        assert!(deep_equal(&graph, d1, empty));
        assert!(deep_equal(&graph, empty, d1));
        assert!(!deep_equal(&graph, d1, arr));
    }

    #[test]
    fn test_dates_by_instant() {
        let mut graph = Graph::new();
        let instant = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let d1 = graph.date(instant);
        let d2 = graph.date(instant);
        let d3 = graph.date(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        let empty = graph.object();
        let options = EqualOptions {
            temporal: TemporalEquality::Instant,
            ..EqualOptions::default()
        };
        assert!(deep_equal_with(&graph, d1, d2, &options));
        assert!(!deep_equal_with(&graph, d1, d3, &options));
        assert!(!deep_equal_with(&graph, d1, empty, &options));
        assert!(!deep_equal_with(&graph, empty, d1, &options));
    }

    // Cycles
    #[test]
    fn test_same_cyclic_node_is_equal() {
        let mut graph = Graph::new();
        let root = graph.object();
        graph.set_key(root, "self", root).unwrap();
        assert_eq!(try_deep_equal(&graph, root, root), Ok(true));
    }

    #[test]
    fn test_distinct_cycles_are_reported() {
        let mut graph = Graph::new();
        let a = graph.object();
        graph.set_key(a, "self", a).unwrap();
        let b = graph.object();
        graph.set_key(b, "self", b).unwrap();

        assert_eq!(try_deep_equal(&graph, a, b), Err(GraphError::Cycle(a)));
        assert!(!deep_equal(&graph, a, b));
    }

    #[test]
    fn test_shared_child_is_not_a_cycle() {
        let mut graph = Graph::new();
        let leaf = graph.insert_json(&json!({"x": 1}));
        let a = graph.array_from(vec![leaf, leaf]);
        let other = graph.insert_json(&json!({"x": 1}));
        let b = graph.array_from(vec![other, other]);
        assert_eq!(try_deep_equal(&graph, a, b), Ok(true));
    }

    #[test]
    fn test_explicit_depth_limit() {
        let a = json!({"a": {"b": {"c": 1}}});
        let mut graph = Graph::new();
        let x = graph.insert_json(&a);
        let y = graph.insert_json(&a);

        let shallow = EqualOptions {
            max_depth: Some(2),
            ..EqualOptions::default()
        };
        assert_eq!(
            try_deep_equal_with(&graph, x, y, &shallow),
            Err(GraphError::DepthLimitExceeded { limit: 2 })
        );
        let deep_enough = EqualOptions {
            max_depth: Some(3),
            ..EqualOptions::default()
        };
        assert_eq!(try_deep_equal_with(&graph, x, y, &deep_enough), Ok(true));
    }

    #[test]
    fn test_big_object() {
        let a = json!({
            "prop1": "value1",
            "prop2": "value2",
            "prop4": {
                "subProp1": "sub value1",
                "subProp2": {
                    "subSubProp1": "sub sub value1",
                    "subSubProp2": [1, 2, {"prop2": 1, "prop": 2}, 4, 5]
                }
            },
            "prop5": 1000
        });
        let b = json!({
            "prop5": 1000,
            "prop1": "value1",
            "prop2": "value2",
            "prop4": {
                "subProp2": {
                    "subSubProp1": "sub sub value1",
                    "subSubProp2": [1, 2, {"prop2": 1, "prop": 2}, 4, 5]
                },
                "subProp1": "sub value1"
            }
        });
        assert!(eq(a, b));
    }
}
