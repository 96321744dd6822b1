use objkit_util::has_own_property;
use objkit_value::{parse_index, Graph, Kind, NodeId};
use tracing::{debug, trace};

/// Write `value` at a dot path, returning the new root.
///
/// The new root is a fresh object holding `root`'s own entries. Along the
/// path, a key that is missing or holds a non-container (including `null`
/// and dates) is replaced with a new empty object; existing containers below
/// the root are written through, not copied. Unlike [`get`](crate::get), the
/// empty path is the single key `""`.
///
/// Array keys must be canonical indices, and writing past the end pads the
/// array with undefined. Any other key on an array cannot be stored, so that
/// write is dropped.
///
/// # Example
///
/// ```
/// use objkit_dot_path::set;
/// use objkit_value::Graph;
/// use serde_json::json;
///
/// let mut graph = Graph::new();
/// let doc = graph.insert_json(&json!({}));
/// let one = graph.number(1.0);
/// let two = graph.number(2.0);
///
/// let first = set(&mut graph, doc, "a.b.c", one);
/// let second = set(&mut graph, first, "a.b.d", two);
/// assert_eq!(graph.to_json(second).unwrap(), json!({"a": {"b": {"c": 1, "d": 2}}}));
/// assert_eq!(graph.to_json(doc).unwrap(), json!({}));
/// ```
pub fn set(graph: &mut Graph, root: NodeId, path: &str, value: NodeId) -> NodeId {
    let entries = graph.entries(root);
    let result = graph.object_from(entries);

    let steps: Vec<&str> = path.split('.').collect();
    let Some((last, intermediate)) = steps.split_last() else {
        return result;
    };

    let mut current = result;
    for step in intermediate {
        let existing = if has_own_property(graph, current, step) {
            graph.child(current, step).filter(|&child| graph.is_container(child))
        } else {
            None
        };
        current = match existing {
            Some(child) => child,
            None => {
                let fresh = graph.object();
                trace!(%current, step, "creating intermediate object");
                assign(graph, current, step, fresh);
                fresh
            }
        };
    }

    assign(graph, current, last, value);
    result
}

fn assign(graph: &mut Graph, container: NodeId, step: &str, value: NodeId) {
    let outcome = match graph.kind(container) {
        Kind::Object => graph.set_key(container, step, value).map(drop),
        Kind::Array => match parse_index(step) {
            Some(index) => graph.set_index(container, index, value),
            None => {
                debug!(%container, step, "dropping non-index key on array");
                Ok(())
            }
        },
        _ => Ok(()),
    };
    if let Err(err) = outcome {
        debug!(%container, step, error = %err, "assignment dropped");
    }
}
