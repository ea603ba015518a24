use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use super::connection::Connection;
use super::node::Node;
use super::role::RoleMarkers;

/// Document key of the patcher object
pub const KEY_PATCHER: &str = "patcher";
/// Patcher key of the node collection
pub const KEY_BOXES: &str = "boxes";
/// Patcher key of the connection collection
pub const KEY_LINES: &str = "lines";
/// Key wrapping each node object inside `boxes`
pub const KEY_BOX: &str = "box";
/// Key wrapping each connection object inside `lines`
pub const KEY_PATCHLINE: &str = "patchline";

/// Which end of a connection a warning refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Source,
    Destination,
}

/// Non-fatal structural problem found while building a graph
///
/// Warnings never abort construction; they travel with the graph and are
/// surfaced by the checker as informational findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphWarning {
    /// An expected nested location (e.g. `patcher.boxes`) is absent
    StructureMissing { path: String },
    /// `boxes[index]` has no `box` object
    MalformedNode { index: usize },
    /// `lines[index]` has no usable `patchline` endpoints and was skipped
    MalformedConnection { index: usize },
    /// More than one node declares this id
    DuplicateNodeId { node_id: String },
    /// `connections()[connection_index]` names a node id that does not exist
    DanglingReference {
        connection_index: usize,
        endpoint: Endpoint,
        node_id: String,
    },
}

impl fmt::Display for GraphWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphWarning::StructureMissing { path } => {
                write!(f, "document has no '{}'", path)
            }
            GraphWarning::MalformedNode { index } => {
                write!(f, "box #{} has no 'box' object", index)
            }
            GraphWarning::MalformedConnection { index } => {
                write!(f, "line #{} has no valid source/destination pair", index)
            }
            GraphWarning::DuplicateNodeId { node_id } => {
                write!(f, "node id '{}' is declared more than once", node_id)
            }
            GraphWarning::DanglingReference {
                connection_index,
                endpoint,
                node_id,
            } => {
                let end = match endpoint {
                    Endpoint::Source => "source",
                    Endpoint::Destination => "destination",
                };
                write!(
                    f,
                    "connection #{} {} references unknown node '{}'",
                    connection_index, end, node_id
                )
            }
        }
    }
}

/// In-memory patch graph: nodes and connections in declaration order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatchGraph {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    warnings: Vec<GraphWarning>,
    markers: RoleMarkers,
}

impl PatchGraph {
    /// Build a graph from parts, recording duplicate ids and dangling references
    pub fn new(nodes: Vec<Node>, connections: Vec<Connection>) -> Self {
        Self::with_markers(nodes, connections, RoleMarkers::default())
    }

    /// Build a graph from parts under the given role markers
    ///
    /// Every node is reclassified against `markers`, so node roles always
    /// agree with [`PatchGraph::markers`].
    pub fn with_markers(
        mut nodes: Vec<Node>,
        connections: Vec<Connection>,
        markers: RoleMarkers,
    ) -> Self {
        for node in &mut nodes {
            node.classify(&markers);
        }
        let mut graph = Self {
            nodes,
            connections,
            warnings: Vec::new(),
            markers,
        };
        graph.record_integrity_warnings();
        graph
    }

    /// Build a graph from a parsed document with the default role markers
    pub fn from_document(document: &Value) -> Self {
        Self::from_document_with(document, &RoleMarkers::default())
    }

    /// Build a graph from a parsed document
    ///
    /// Reads `patcher.boxes[*].box` as nodes and `patcher.lines[*].patchline`
    /// as connections. Missing locations produce an empty collection and a
    /// [`GraphWarning::StructureMissing`]; this never fails.
    pub fn from_document_with(document: &Value, markers: &RoleMarkers) -> Self {
        let mut warnings = Vec::new();

        let patcher = document.get(KEY_PATCHER).filter(|p| p.is_object());
        if patcher.is_none() {
            warnings.push(GraphWarning::StructureMissing {
                path: KEY_PATCHER.to_string(),
            });
        }

        let mut nodes = Vec::new();
        match patcher.and_then(|p| p.get(KEY_BOXES)).and_then(Value::as_array) {
            Some(boxes) => {
                for (index, entry) in boxes.iter().enumerate() {
                    let fields = match entry.get(KEY_BOX).and_then(Value::as_object) {
                        Some(fields) => fields.clone(),
                        None => {
                            warnings.push(GraphWarning::MalformedNode { index });
                            Map::new()
                        }
                    };
                    nodes.push(Node::from_fields(fields, markers));
                }
            }
            None if patcher.is_some() => warnings.push(GraphWarning::StructureMissing {
                path: format!("{}.{}", KEY_PATCHER, KEY_BOXES),
            }),
            None => {}
        }

        let mut connections = Vec::new();
        match patcher.and_then(|p| p.get(KEY_LINES)).and_then(Value::as_array) {
            Some(lines) => {
                for (index, entry) in lines.iter().enumerate() {
                    match entry.get(KEY_PATCHLINE).and_then(Connection::from_patchline) {
                        Some(connection) => connections.push(connection),
                        None => warnings.push(GraphWarning::MalformedConnection { index }),
                    }
                }
            }
            None if patcher.is_some() => warnings.push(GraphWarning::StructureMissing {
                path: format!("{}.{}", KEY_PATCHER, KEY_LINES),
            }),
            None => {}
        }

        let mut graph = Self {
            nodes,
            connections,
            warnings,
            markers: markers.clone(),
        };
        graph.record_integrity_warnings();

        for warning in &graph.warnings {
            tracing::warn!(warning = %warning, "patch graph warning");
        }
        tracing::debug!(
            node_count = graph.nodes.len(),
            connection_count = graph.connections.len(),
            "patch graph built"
        );

        graph
    }

    fn record_integrity_warnings(&mut self) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for id in self.nodes.iter().filter_map(Node::id) {
            if !seen.insert(id) && reported.insert(id) {
                self.warnings.push(GraphWarning::DuplicateNodeId {
                    node_id: id.to_string(),
                });
            }
        }

        for (connection_index, connection) in self.connections.iter().enumerate() {
            let ends = [
                (Endpoint::Source, &connection.source_id),
                (Endpoint::Destination, &connection.destination_id),
            ];
            for (endpoint, node_id) in ends {
                if !seen.contains(node_id.as_str()) {
                    self.warnings.push(GraphWarning::DanglingReference {
                        connection_index,
                        endpoint,
                        node_id: node_id.clone(),
                    });
                }
            }
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn warnings(&self) -> &[GraphWarning] {
        &self.warnings
    }

    /// Markers the node roles were computed with
    pub fn markers(&self) -> &RoleMarkers {
        &self.markers
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty()
    }

    /// Copy every modified node back into the document it was built from
    ///
    /// Only `patcher.boxes[i].box` of modified nodes is replaced; the rest of
    /// the document is untouched. Returns the number of boxes written.
    pub fn write_back(&self, document: &mut Value) -> usize {
        let Some(boxes) = document
            .get_mut(KEY_PATCHER)
            .and_then(|p| p.get_mut(KEY_BOXES))
            .and_then(Value::as_array_mut)
        else {
            return 0;
        };

        let mut written = 0;
        for (node, entry) in self.nodes.iter().zip(boxes.iter_mut()) {
            if !node.is_modified() {
                continue;
            }
            if let Value::Object(entry) = entry {
                entry.insert(KEY_BOX.to_string(), Value::Object(node.fields().clone()));
                written += 1;
            }
        }
        written
    }
}
