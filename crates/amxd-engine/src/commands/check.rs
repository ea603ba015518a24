//! Check command: inspect every catalog device and report findings
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for device operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()`/`warn!()` for
//! internal details.

use amxd_core::model::Finding;
use amxd_core::queries::{script_runner_summary, ScriptRunnerSummary};
use amxd_core::rules::{check_device, has_blocking};
use amxd_core::{log_op_end, log_op_error, log_op_start};
use amxd_store::catalog::{CatalogV0, DeviceEntry};
use amxd_store::errors::Result;
use amxd_store::fs::load_device;
use serde::Serialize;
use std::path::PathBuf;

use super::run::{elapsed_ms, is_not_found, DeviceFailure, RunContext};

/// What happened to one device during a check run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Checked {
        passed: bool,
        findings: Vec<Finding>,
        #[serde(skip_serializing_if = "Option::is_none")]
        script_runner: Option<ScriptRunnerSummary>,
    },
    NotFound,
    Failed(DeviceFailure),
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CheckOutcome::Checked { passed: true, .. })
    }
}

/// Check result for one catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceCheckReport {
    pub label: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Aggregate result of a check run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckSummary {
    pub devices: Vec<DeviceCheckReport>,
    pub all_passed: bool,
}

/// Check every device in the catalog
///
/// Per-device failures (missing file, unparseable container) are recorded
/// in that device's report and never stop the run.
pub fn check_devices(catalog: &CatalogV0, ctx: &RunContext) -> CheckSummary {
    log_op_start!("check_devices", device_count = catalog.devices.len());
    let start = std::time::Instant::now();

    let devices: Vec<DeviceCheckReport> = catalog
        .devices
        .iter()
        .map(|entry| check_device_file(entry, ctx))
        .collect();
    let all_passed = devices.iter().all(|d| d.outcome.passed());

    log_op_end!(
        "check_devices",
        duration_ms = elapsed_ms(start),
        all_passed = all_passed
    );

    CheckSummary {
        devices,
        all_passed,
    }
}

/// Check a single catalog device
pub fn check_device_file(entry: &DeviceEntry, ctx: &RunContext) -> DeviceCheckReport {
    let path = ctx.device_path(entry);
    log_op_start!("check_device", device = entry.label.as_str());
    let start = std::time::Instant::now();

    let outcome = match check_device_impl(entry, ctx, &path) {
        Ok(outcome) => {
            log_op_end!(
                "check_device",
                duration_ms = elapsed_ms(start),
                device = entry.label.as_str(),
                passed = outcome.passed()
            );
            outcome
        }
        Err(e) => {
            let e = e.with_device(entry.label.as_str());
            log_op_error!(
                "check_device",
                e.clone(),
                duration_ms = elapsed_ms(start),
                device = entry.label.as_str()
            );
            if is_not_found(&e) {
                CheckOutcome::NotFound
            } else {
                CheckOutcome::Failed(DeviceFailure::from(&e))
            }
        }
    };

    DeviceCheckReport {
        label: entry.label.clone(),
        path,
        outcome,
    }
}

fn check_device_impl(
    entry: &DeviceEntry,
    ctx: &RunContext,
    path: &std::path::Path,
) -> Result<CheckOutcome> {
    let (device, _) = load_device(path, &ctx.markers)?;
    let graph = device.graph();

    let findings = check_device(graph, &entry.expectation());
    tracing::debug!(
        device = entry.label.as_str(),
        node_count = graph.nodes().len(),
        connection_count = graph.connections().len(),
        finding_count = findings.len(),
        "device inspected"
    );

    Ok(CheckOutcome::Checked {
        passed: !has_blocking(&findings),
        findings,
        script_runner: script_runner_summary(graph),
    })
}
