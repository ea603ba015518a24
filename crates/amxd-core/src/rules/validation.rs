use serde_json::Value;

use crate::model::{Finding, FindingKind, PatchGraph, Role};
use crate::queries::find_by_role;

use super::expectation::DeviceExpectation;
use super::invariants;

/// Evaluate every device invariant against a graph
///
/// Checks run in a fixed order and never short-circuit, so one call reports
/// every problem:
///
/// 1. A script runner exists (if not, checks 2 and 3 are skipped)
/// 2. Its file reference contains the expected script path
/// 3. Its `autostart` attribute is 1
/// 4. The shared dictionary exists and is not embedded
/// 5. The response loop is wired, when the device requires it
///
/// Graph-construction warnings follow as informational findings. An empty
/// result, or one with only informational findings, means the device passes.
///
/// Marker text in findings comes from [`PatchGraph::markers`], the same
/// markers that assigned the node roles.
pub fn check_device(graph: &PatchGraph, expectation: &DeviceExpectation) -> Vec<Finding> {
    let markers = graph.markers();
    let mut findings = Vec::new();

    match find_by_role(graph, Role::ScriptRunner) {
        Some(script) => {
            findings.extend(invariants::check_script_path(
                script,
                &expectation.script_path,
            ));
            findings.extend(invariants::check_autostart(script));
        }
        None => findings.push(
            Finding::new(FindingKind::ScriptRunnerMissing, "no node.script object found")
                .with_expected(Value::String(markers.script_runner.clone())),
        ),
    }

    findings.extend(invariants::check_dictionary(graph));

    if expectation.requires_response_loop {
        let status = invariants::response_loop_status(graph);
        findings.extend(invariants::loop_finding(status, graph));
    }

    findings.extend(invariants::graph_integrity_findings(graph));

    tracing::debug!(
        finding_count = findings.len(),
        blocking = has_blocking(&findings),
        "device checked"
    );

    findings
}

/// True iff any finding fails the device
pub fn has_blocking(findings: &[Finding]) -> bool {
    findings.iter().any(Finding::is_blocking)
}
