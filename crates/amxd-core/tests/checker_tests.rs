#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use amxd_core::model::{Check, FindingKind, Severity};
use amxd_core::rules::{check_device, has_blocking, invariants, DeviceExpectation, LoopStatus};
use common::{box_entry, document, graph_of, line_entry, wired_sequencer_document};
use serde_json::json;

fn sequencer() -> DeviceExpectation {
    DeviceExpectation::new("track_2_sequencer/sequencer.js", true)
}

#[test]
fn test_wired_sequencer_passes_every_check() {
    let graph = graph_of(&wired_sequencer_document());

    let findings = check_device(&graph, &sequencer());

    assert!(findings.is_empty(), "unexpected findings: {:?}", findings);
    assert_eq!(invariants::response_loop_status(&graph), LoopStatus::Connected);
}

#[test]
fn test_failing_checks_two_three_four_yield_exactly_three_findings() {
    // GIVEN a device with a wrong path, autostart off and an embedded dictionary
    let doc = document(
        vec![
            box_entry(
                "obj-1",
                "dict ---power_trio_brain",
                json!({"saved_object_attributes": {"embed": 1}}),
            ),
            box_entry(
                "obj-2",
                "node.script logic.js",
                json!({
                    "textfile": {"filename": "logic.js"},
                    "saved_object_attributes": {"autostart": 0}
                }),
            ),
        ],
        vec![],
    );

    // WHEN checking a device that does not need the loop
    let findings = check_device(
        &graph_of(&doc),
        &DeviceExpectation::new("track_1_chord_lab/logic.js", false),
    );

    // THEN all three problems are reported, in check order
    let kinds: Vec<FindingKind> = findings.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FindingKind::ScriptPathMismatch,
            FindingKind::AutostartDisabled,
            FindingKind::DictionaryEmbedded,
        ]
    );
    assert!(findings.iter().all(|f| f.severity == Severity::Blocking));

    assert_eq!(findings[0].node_id.as_deref(), Some("obj-2"));
    assert_eq!(findings[0].actual, Some(json!("logic.js")));
    assert_eq!(findings[0].expected, Some(json!("track_1_chord_lab/logic.js")));
    assert_eq!(findings[1].actual, Some(json!(0)));
    assert_eq!(findings[2].node_id.as_deref(), Some("obj-1"));
    assert_eq!(findings[2].attribute.as_deref(), Some("saved_object_attributes.embed"));
}

#[test]
fn test_topology_tri_state() {
    // (a) fully wired
    let wired = graph_of(&wired_sequencer_document());
    assert_eq!(invariants::response_loop_status(&wired), LoopStatus::Connected);

    // (b) prepender present, edges missing
    let mut doc = wired_sequencer_document();
    doc["patcher"]["lines"] = json!([]);
    let unwired = graph_of(&doc);
    assert_eq!(
        invariants::response_loop_status(&unwired),
        LoopStatus::Disconnected {
            dictionary_to_prepender: false,
            prepender_to_script: false
        }
    );
    let findings = check_device(&unwired, &sequencer());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::ResponseLoopDisconnected);

    // (c) prepender absent
    let doc = document(
        vec![
            box_entry("obj-1", "dict ---power_trio_brain", json!({})),
            box_entry(
                "obj-3",
                "node.script sequencer.js",
                json!({
                    "textfile": {"filename": "track_2_sequencer/sequencer.js"},
                    "saved_object_attributes": {"autostart": 1}
                }),
            ),
        ],
        vec![line_entry("obj-1", 0, "obj-3", 0)],
    );
    let missing = graph_of(&doc);
    assert_eq!(
        invariants::response_loop_status(&missing),
        LoopStatus::MissingPrepender
    );
    let findings = check_device(&missing, &sequencer());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::ResponseLoopMissingPrepender);
}

#[test]
fn test_prepender_output_port_is_unconstrained() {
    let mut doc = wired_sequencer_document();
    doc["patcher"]["lines"] = json!([
        {"patchline": {"source": ["obj-1", 0], "destination": ["obj-2", 1]}},
        {"patchline": {"source": ["obj-2", 3], "destination": ["obj-3", 0]}}
    ]);

    let graph = graph_of(&doc);
    assert_eq!(invariants::response_loop_status(&graph), LoopStatus::Connected);
}

#[test]
fn test_missing_script_runner_reports_missing_dictionary_too() {
    let doc = document(vec![box_entry("obj-1", "route a b", json!({}))], vec![]);

    let findings = check_device(&graph_of(&doc), &sequencer());
    let kinds: Vec<FindingKind> = findings.iter().map(|f| f.kind).collect();

    assert_eq!(
        kinds,
        vec![
            FindingKind::ScriptRunnerMissing,
            FindingKind::DictionaryStoreMissing,
            FindingKind::ResponseLoopMissingPrepender,
        ]
    );
}

#[test]
fn test_document_without_patcher_is_checked_not_rejected() {
    let graph = graph_of(&json!({"something_else": true}));

    let findings = check_device(&graph, &sequencer());

    assert!(has_blocking(&findings));
    let integrity: Vec<_> = findings
        .iter()
        .filter(|f| f.check == Check::GraphIntegrity)
        .collect();
    assert_eq!(integrity.len(), 1);
    assert_eq!(integrity[0].kind, FindingKind::StructureMissing);
}

#[test]
fn test_checker_uses_first_script_runner() {
    let doc = document(
        vec![
            box_entry(
                "obj-1",
                "node.script a.js",
                json!({"textfile": {"filename": "shared/dict_init.js"}, "saved_object_attributes": {"autostart": 1}}),
            ),
            box_entry("obj-2", "node.script b.js", json!({})),
            box_entry("obj-3", "dict ---power_trio_brain", json!({})),
        ],
        vec![],
    );

    let findings = check_device(
        &graph_of(&doc),
        &DeviceExpectation::new("shared/dict_init.js", false),
    );
    assert!(findings.is_empty(), "unexpected findings: {:?}", findings);
}
