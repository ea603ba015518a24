use serde::Serialize;

use crate::model::{PatchGraph, Role};

/// One script runner whose file reference was rewritten
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRepair {
    pub node_id: Option<String>,
    pub previous: Option<String>,
    pub current: String,
}

/// Result of a repair request
///
/// `NoOp` is not a failure: it tells callers they can skip the write and the
/// backup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RepairOutcome {
    Repaired { nodes: Vec<NodeRepair> },
    NoOp,
}

impl RepairOutcome {
    /// Whether the graph was changed
    pub fn changed(&self) -> bool {
        matches!(self, RepairOutcome::Repaired { .. })
    }

    /// The rewritten nodes (empty for `NoOp`)
    pub fn repairs(&self) -> &[NodeRepair] {
        match self {
            RepairOutcome::Repaired { nodes } => nodes,
            RepairOutcome::NoOp => &[],
        }
    }
}

/// Point every script runner at the expected script file
///
/// Each script runner whose file reference does not already contain
/// `expected_script_path` gets its `textfile.filename` overwritten; nothing
/// else on the node or in the graph is touched. Repeating the call with the
/// same path returns [`RepairOutcome::NoOp`].
///
/// # Arguments
/// * `graph` - Graph to mutate in place
/// * `expected_script_path` - Relative script path the runners must reference
///
/// # Returns
/// The list of rewritten nodes, or `NoOp` if every runner already matched
/// (or the graph has no script runner at all)
pub fn repair_script_path(graph: &mut PatchGraph, expected_script_path: &str) -> RepairOutcome {
    let mut nodes = Vec::new();

    for node in graph
        .nodes_mut()
        .iter_mut()
        .filter(|node| node.role() == Role::ScriptRunner)
    {
        let previous = node.file_reference().map(str::to_string);
        if previous
            .as_deref()
            .is_some_and(|filename| filename.contains(expected_script_path))
        {
            continue;
        }

        node.set_file_reference(expected_script_path);
        tracing::info!(
            node_id = node.id().unwrap_or_default(),
            previous = previous.as_deref().unwrap_or_default(),
            current = expected_script_path,
            "script path repaired"
        );
        nodes.push(NodeRepair {
            node_id: node.id().map(str::to_string),
            previous,
            current: expected_script_path.to_string(),
        });
    }

    if nodes.is_empty() {
        RepairOutcome::NoOp
    } else {
        RepairOutcome::Repaired { nodes }
    }
}
