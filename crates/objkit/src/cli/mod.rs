//! Core logic of the `objkit` command-line tool.
//!
//! Every command takes its documents as JSON text, loads them into one
//! [`Graph`], runs the operation and renders the result as pretty JSON.

use objkit_dot_path::{get, set};
use objkit_util::{clone, deep_equal, merge};
use objkit_value::{Graph, GraphError, NodeId};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Graph(#[from] GraphError),
    #[error("undefined")]
    NotFound,
}

fn load(graph: &mut Graph, json: &str) -> Result<NodeId, CliError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(graph.insert_json(&value))
}

fn render(graph: &Graph, id: NodeId) -> Result<String, CliError> {
    let value = graph.to_json(id)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

// ── get ───────────────────────────────────────────────────────────────────

/// Read the value at a dot path.
///
/// `default_json`, when given, is returned when nothing is found; without
/// it a miss is [`CliError::NotFound`].
pub fn lookup_path(
    doc_json: &str,
    path: &str,
    default_json: Option<&str>,
) -> Result<String, CliError> {
    let mut graph = Graph::new();
    let doc = load(&mut graph, doc_json)?;
    let default = default_json
        .map(|json| load(&mut graph, json))
        .transpose()?;

    let found = get(&graph, doc, path, default).ok_or(CliError::NotFound)?;
    debug!(path, node = %found, "path resolved");
    render(&graph, found)
}

// ── set ───────────────────────────────────────────────────────────────────

/// Write a JSON value at a dot path and return the new document.
pub fn assign_path(doc_json: &str, path: &str, value_json: &str) -> Result<String, CliError> {
    let mut graph = Graph::new();
    let doc = load(&mut graph, doc_json)?;
    let value = load(&mut graph, value_json)?;

    let updated = set(&mut graph, doc, path, value);
    render(&graph, updated)
}

// ── merge ─────────────────────────────────────────────────────────────────

/// Deep-merge `overlay_json` over `doc_json`.
pub fn merge_documents(doc_json: &str, overlay_json: &str) -> Result<String, CliError> {
    let mut graph = Graph::new();
    let doc = load(&mut graph, doc_json)?;
    let overlay = load(&mut graph, overlay_json)?;

    let merged = merge(&mut graph, doc, overlay);
    render(&graph, merged)
}

// ── equal ─────────────────────────────────────────────────────────────────

/// Structural equality of two documents.
pub fn documents_equal(doc_json: &str, other_json: &str) -> Result<bool, CliError> {
    let mut graph = Graph::new();
    let doc = load(&mut graph, doc_json)?;
    let other = load(&mut graph, other_json)?;

    Ok(deep_equal(&graph, doc, other))
}

// ── clone ─────────────────────────────────────────────────────────────────

/// Deep copy of a document, rendered back to JSON.
pub fn clone_document(doc_json: &str) -> Result<String, CliError> {
    let mut graph = Graph::new();
    let doc = load(&mut graph, doc_json)?;

    let copy = clone(&mut graph, doc);
    render(&graph, copy)
}
