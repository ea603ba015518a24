use serde::Serialize;
use serde_json::Value;

use crate::model::node::{FIELD_FILENAME, FIELD_SAVED_ATTRIBUTES, FIELD_TEXTFILE};
use crate::model::{Finding, FindingKind, Node, PatchGraph, Role};
use crate::queries::{find_by_role, find_connections_between};

/// Saved attribute that makes a script runner start on load
pub const ATTR_AUTOSTART: &str = "autostart";
/// Saved attribute selecting a private (1) or shared (0) dictionary
pub const ATTR_EMBED: &str = "embed";

/// Outcome of the response-loop topology check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoopStatus {
    /// dictionary outlet 0 → prepender → script runner inlet 0
    Connected,
    /// The prepender exists but at least one of the two edges is missing
    Disconnected {
        dictionary_to_prepender: bool,
        prepender_to_script: bool,
    },
    /// There is no prepender node
    MissingPrepender,
}

/// Check 2: the script runner's file reference contains the expected path
///
/// Substring rather than equality, since the stored value may carry a
/// parent-folder qualifier.
pub fn check_script_path(script: &Node, expected_script_path: &str) -> Option<Finding> {
    let actual = script.file_reference();
    if actual.is_some_and(|filename| filename.contains(expected_script_path)) {
        return None;
    }

    Some(
        Finding::new(
            FindingKind::ScriptPathMismatch,
            format!(
                "script path is '{}', should be '{}'",
                actual.unwrap_or_default(),
                expected_script_path
            ),
        )
        .with_node(script.id())
        .with_attribute(format!("{}.{}", FIELD_TEXTFILE, FIELD_FILENAME))
        .with_actual(actual.map(|a| Value::String(a.to_string())))
        .with_expected(Value::String(expected_script_path.to_string())),
    )
}

/// Check 3: `autostart` is the integer 1
pub fn check_autostart(script: &Node) -> Option<Finding> {
    let actual = script.attribute(ATTR_AUTOSTART);
    if actual.and_then(Value::as_i64) == Some(1) {
        return None;
    }

    let shown = actual.map_or_else(|| "absent".to_string(), Value::to_string);
    Some(
        Finding::new(
            FindingKind::AutostartDisabled,
            format!("@autostart is {}, should be 1", shown),
        )
        .with_node(script.id())
        .with_attribute(format!("{}.{}", FIELD_SAVED_ATTRIBUTES, ATTR_AUTOSTART))
        .with_actual(actual.cloned())
        .with_expected(Value::from(1)),
    )
}

/// Check 4: the dictionary store exists and references the shared dictionary
///
/// An absent `embed` attribute counts as 0.
pub fn check_dictionary(graph: &PatchGraph) -> Option<Finding> {
    let marker = graph.markers().dictionary_store.as_str();
    let Some(dictionary) = find_by_role(graph, Role::DictionaryStore) else {
        return Some(
            Finding::new(
                FindingKind::DictionaryStoreMissing,
                format!("'{}' object not found", marker),
            )
            .with_expected(Value::String(marker.to_string())),
        );
    };

    let embed = dictionary.attribute(ATTR_EMBED);
    if embed.and_then(Value::as_i64) != Some(1) {
        return None;
    }

    Some(
        Finding::new(
            FindingKind::DictionaryEmbedded,
            "dictionary has @embed 1, should be 0 (shared dictionary)",
        )
        .with_node(dictionary.id())
        .with_attribute(format!("{}.{}", FIELD_SAVED_ATTRIBUTES, ATTR_EMBED))
        .with_actual(embed.cloned())
        .with_expected(Value::from(0)),
    )
}

/// Check 5: classify the dictionary → prepender → script runner wiring
///
/// A missing dictionary or script runner simply makes the corresponding
/// edge absent; nodes without an id never match an edge.
pub fn response_loop_status(graph: &PatchGraph) -> LoopStatus {
    let Some(prepender) = find_by_role(graph, Role::Prepender) else {
        return LoopStatus::MissingPrepender;
    };
    let prepender_id = prepender.id();
    let dictionary_id = find_by_role(graph, Role::DictionaryStore).and_then(Node::id);
    let script_id = find_by_role(graph, Role::ScriptRunner).and_then(Node::id);

    let dictionary_to_prepender = match (dictionary_id, prepender_id) {
        (Some(dict), Some(prep)) => find_connections_between(graph, dict, prep, Some(0), None),
        _ => false,
    };
    let prepender_to_script = match (prepender_id, script_id) {
        (Some(prep), Some(script)) => {
            find_connections_between(graph, prep, script, None, Some(0))
        }
        _ => false,
    };

    if dictionary_to_prepender && prepender_to_script {
        LoopStatus::Connected
    } else {
        LoopStatus::Disconnected {
            dictionary_to_prepender,
            prepender_to_script,
        }
    }
}

/// Turn a non-connected loop status into a finding
pub fn loop_finding(status: LoopStatus, graph: &PatchGraph) -> Option<Finding> {
    match status {
        LoopStatus::Connected => None,
        LoopStatus::MissingPrepender => Some(Finding::new(
            FindingKind::ResponseLoopMissingPrepender,
            "response loop issue: missing prepend dict_response",
        )),
        LoopStatus::Disconnected {
            dictionary_to_prepender,
            prepender_to_script,
        } => {
            let mut missing = Vec::new();
            if !dictionary_to_prepender {
                missing.push("dictionary outlet 0 -> prepend");
            }
            if !prepender_to_script {
                missing.push("prepend -> node.script inlet 0");
            }
            Some(
                Finding::new(
                    FindingKind::ResponseLoopDisconnected,
                    format!(
                        "response loop exists but is not connected properly (missing: {})",
                        missing.join(", ")
                    ),
                )
                .with_node(find_by_role(graph, Role::Prepender).and_then(Node::id))
                .with_actual(Some(serde_json::json!({
                    "dictionary_to_prepender": dictionary_to_prepender,
                    "prepender_to_script": prepender_to_script,
                }))),
            )
        }
    }
}

/// Informational findings for every warning recorded while building the graph
pub fn graph_integrity_findings(graph: &PatchGraph) -> Vec<Finding> {
    use crate::model::GraphWarning;

    graph
        .warnings()
        .iter()
        .map(|warning| {
            let (kind, node_id) = match warning {
                GraphWarning::StructureMissing { .. } => (FindingKind::StructureMissing, None),
                GraphWarning::MalformedNode { .. } => (FindingKind::MalformedNode, None),
                GraphWarning::MalformedConnection { .. } => {
                    (FindingKind::MalformedConnection, None)
                }
                GraphWarning::DuplicateNodeId { node_id } => {
                    (FindingKind::DuplicateNodeId, Some(node_id.as_str()))
                }
                GraphWarning::DanglingReference { node_id, .. } => {
                    (FindingKind::DanglingReference, Some(node_id.as_str()))
                }
            };
            Finding::new(kind, warning.to_string()).with_node(node_id)
        })
        .collect()
}
