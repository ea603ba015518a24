//! Graph lookups
//!
//! Every function here is total: no match yields `None`, `false` or an empty
//! iterator, never an error.

use serde::Serialize;
use serde_json::Value;

use crate::model::{Connection, Node, PatchGraph, Role};

/// First node, in declaration order, whose content contains `pattern`
pub fn find_by_content_substring<'g>(graph: &'g PatchGraph, pattern: &str) -> Option<&'g Node> {
    graph
        .nodes()
        .iter()
        .find(|node| node.content().contains(pattern))
}

/// First node, in declaration order, with the given role
pub fn find_by_role(graph: &PatchGraph, role: Role) -> Option<&Node> {
    graph.nodes().iter().find(|node| node.role() == role)
}

/// Every node with the given role, in declaration order
pub fn nodes_with_role(graph: &PatchGraph, role: Role) -> impl Iterator<Item = &Node> {
    graph.nodes().iter().filter(move |node| node.role() == role)
}

/// First node declaring `id`
pub fn find_node<'g>(graph: &'g PatchGraph, id: &str) -> Option<&'g Node> {
    graph.nodes().iter().find(|node| node.id() == Some(id))
}

/// Connections leaving node `id`
pub fn connections_from<'g>(
    graph: &'g PatchGraph,
    id: &'g str,
) -> impl Iterator<Item = &'g Connection> {
    graph
        .connections()
        .iter()
        .filter(move |c| c.source_id == id)
}

/// Connections entering node `id`
pub fn connections_to<'g>(
    graph: &'g PatchGraph,
    id: &'g str,
) -> impl Iterator<Item = &'g Connection> {
    graph
        .connections()
        .iter()
        .filter(move |c| c.destination_id == id)
}

/// True iff some connection runs from `source_id` to `destination_id`
///
/// When a port is given it must match exactly; `None` accepts any port.
pub fn find_connections_between(
    graph: &PatchGraph,
    source_id: &str,
    destination_id: &str,
    source_port: Option<u32>,
    destination_port: Option<u32>,
) -> bool {
    graph.connections().iter().any(|c| {
        c.source_id == source_id
            && c.destination_id == destination_id
            && source_port.map_or(true, |port| c.source_port == port)
            && destination_port.map_or(true, |port| c.destination_port == port)
    })
}

/// Configuration of the first script runner, for reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptRunnerSummary {
    pub node_id: Option<String>,
    pub content: String,
    pub file_reference: Option<String>,
    pub autostart: Option<Value>,
}

/// Summarize the first script runner, if any
pub fn script_runner_summary(graph: &PatchGraph) -> Option<ScriptRunnerSummary> {
    find_by_role(graph, Role::ScriptRunner).map(|node| ScriptRunnerSummary {
        node_id: node.id().map(str::to_string),
        content: node.content().to_string(),
        file_reference: node.file_reference().map(str::to_string),
        autostart: node.attribute("autostart").cloned(),
    })
}
