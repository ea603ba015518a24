use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Worth reporting; does not fail the device
    Informational,
    /// The device does not satisfy its expected configuration
    Blocking,
}

/// The invariant a finding belongs to, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    ScriptRunnerPresence,
    ScriptPath,
    Autostart,
    DictionaryStore,
    ResponseLoop,
    GraphIntegrity,
}

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    ScriptRunnerMissing,
    ScriptPathMismatch,
    AutostartDisabled,
    DictionaryStoreMissing,
    DictionaryEmbedded,
    /// The prepender exists but the dictionary → prepender → script path is incomplete
    ResponseLoopDisconnected,
    /// No prepender node at all
    ResponseLoopMissingPrepender,
    StructureMissing,
    MalformedNode,
    MalformedConnection,
    DuplicateNodeId,
    DanglingReference,
}

impl FindingKind {
    pub fn check(&self) -> Check {
        match self {
            FindingKind::ScriptRunnerMissing => Check::ScriptRunnerPresence,
            FindingKind::ScriptPathMismatch => Check::ScriptPath,
            FindingKind::AutostartDisabled => Check::Autostart,
            FindingKind::DictionaryStoreMissing | FindingKind::DictionaryEmbedded => {
                Check::DictionaryStore
            }
            FindingKind::ResponseLoopDisconnected | FindingKind::ResponseLoopMissingPrepender => {
                Check::ResponseLoop
            }
            FindingKind::StructureMissing
            | FindingKind::MalformedNode
            | FindingKind::MalformedConnection
            | FindingKind::DuplicateNodeId
            | FindingKind::DanglingReference => Check::GraphIntegrity,
        }
    }

    pub fn severity(&self) -> Severity {
        match self.check() {
            Check::GraphIntegrity => Severity::Informational,
            _ => Severity::Blocking,
        }
    }
}

/// Structured result of one failed check
///
/// Carries enough detail (node, attribute, actual vs. expected) to drive a
/// repair or a report without re-deriving it from the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub check: Check,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
    pub message: String,
}

impl Finding {
    pub fn new(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            check: kind.check(),
            severity: kind.severity(),
            node_id: None,
            attribute: None,
            actual: None,
            expected: None,
            message: message.into(),
        }
    }

    pub fn with_node(mut self, node_id: Option<&str>) -> Self {
        self.node_id = node_id.map(str::to_string);
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    pub fn with_actual(mut self, actual: Option<Value>) -> Self {
        self.actual = actual;
        self
    }

    pub fn with_expected(mut self, expected: Value) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Blocking
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(node_id) = &self.node_id {
            write!(f, " [node {}]", node_id)?;
        }
        Ok(())
    }
}
