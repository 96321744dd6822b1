//! Conversion between value graphs and `serde_json::Value` trees.

use std::collections::HashSet;

use chrono::SecondsFormat;
use serde_json::{Map, Number, Value};

use crate::{Graph, GraphError, Node, NodeId};

/// Largest integer a double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Graph {
    /// Load a JSON tree into the arena and return its root.
    ///
    /// Numbers become `f64`. Every container gets a fresh node.
    pub fn insert_json(&mut self, value: &Value) -> NodeId {
        match value {
            Value::Null => self.null(),
            Value::Bool(b) => self.bool(*b),
            Value::Number(n) => self.number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => self.string(s.clone()),
            Value::Array(arr) => {
                let items: Vec<NodeId> = arr.iter().map(|v| self.insert_json(v)).collect();
                self.array_from(items)
            }
            Value::Object(obj) => {
                let entries: Vec<(String, NodeId)> = obj
                    .iter()
                    .map(|(k, v)| (k.clone(), self.insert_json(v)))
                    .collect();
                self.object_from(entries)
            }
        }
    }

    /// Render the graph under `root` as JSON.
    ///
    /// Shared subgraphs are rendered once per occurrence. Dates become RFC 3339
    /// strings, undefined object members are skipped and undefined array
    /// elements become `null`.
    ///
    /// # Errors
    ///
    /// `GraphError::Cycle` if a node is reached again below itself.
    pub fn to_json(&self, root: NodeId) -> Result<Value, GraphError> {
        let mut ancestors = HashSet::new();
        self.render(root, &mut ancestors)
    }

    fn render(&self, id: NodeId, ancestors: &mut HashSet<NodeId>) -> Result<Value, GraphError> {
        let value = match self.node(id) {
            Node::Undefined | Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => number_to_json(*n),
            Node::String(s) => Value::String(s.clone()),
            Node::Date(dt) => Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Node::Array(items) => {
                if !ancestors.insert(id) {
                    return Err(GraphError::Cycle(id));
                }
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(self.render(*item, ancestors)?);
                }
                ancestors.remove(&id);
                Value::Array(out)
            }
            Node::Object(map) => {
                if !ancestors.insert(id) {
                    return Err(GraphError::Cycle(id));
                }
                let mut out = Map::new();
                for (key, child) in map {
                    if matches!(self.node(*child), Node::Undefined) {
                        continue;
                    }
                    out.insert(key.clone(), self.render(*child, ancestors)?);
                }
                ancestors.remove(&id);
                Value::Object(out)
            }
        };
        Ok(value)
    }
}

fn number_to_json(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}
