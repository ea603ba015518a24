//! Fix command: repair script paths across every catalog device
//!
//! Only the script file reference is repaired; autostart, embed and wiring
//! problems are left for the check report. A device is backed up to
//! `<path>.backup` (once) before its first write, and untouched devices are
//! neither backed up nor rewritten.

use amxd_core::ops::{repair_script_path, NodeRepair, RepairOutcome};
use amxd_core::{log_op_end, log_op_error, log_op_start};
use amxd_store::catalog::{CatalogV0, DeviceEntry};
use amxd_store::errors::Result;
use amxd_store::fs::{ensure_backup, load_device, save_device};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::run::{elapsed_ms, is_not_found, DeviceFailure, RunContext};

/// What happened to one device during a fix run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FixOutcome {
    Repaired {
        nodes: Vec<NodeRepair>,
        /// Backup written by this run; `None` when an earlier backup was kept
        backup: Option<PathBuf>,
        digest_before: String,
        digest_after: String,
    },
    Unchanged {
        digest: String,
    },
    NotFound,
    Failed(DeviceFailure),
}

/// Fix result for one catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceFixReport {
    pub label: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FixOutcome,
}

/// Aggregate result of a fix run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixSummary {
    pub devices: Vec<DeviceFixReport>,
    pub repaired_count: usize,
    /// False if any device failed to load, back up or save
    pub success: bool,
}

/// Repair the script path of every device in the catalog
///
/// Missing devices are reported and skipped; they do not fail the run.
pub fn fix_devices(catalog: &CatalogV0, ctx: &RunContext) -> FixSummary {
    log_op_start!("fix_devices", device_count = catalog.devices.len());
    let start = std::time::Instant::now();

    let devices: Vec<DeviceFixReport> = catalog
        .devices
        .iter()
        .map(|entry| fix_device_file(entry, ctx))
        .collect();
    let repaired_count = devices
        .iter()
        .filter(|d| matches!(d.outcome, FixOutcome::Repaired { .. }))
        .count();
    let success = !devices
        .iter()
        .any(|d| matches!(d.outcome, FixOutcome::Failed(_)));

    log_op_end!(
        "fix_devices",
        duration_ms = elapsed_ms(start),
        repaired_count = repaired_count,
        success = success
    );

    FixSummary {
        devices,
        repaired_count,
        success,
    }
}

/// Repair a single catalog device
pub fn fix_device_file(entry: &DeviceEntry, ctx: &RunContext) -> DeviceFixReport {
    let path = ctx.device_path(entry);
    log_op_start!("fix_device", device = entry.label.as_str());
    let start = std::time::Instant::now();

    let outcome = match fix_device_impl(entry, ctx, &path) {
        Ok(outcome) => {
            log_op_end!(
                "fix_device",
                duration_ms = elapsed_ms(start),
                device = entry.label.as_str(),
                changed = matches!(outcome, FixOutcome::Repaired { .. })
            );
            outcome
        }
        Err(e) => {
            let e = e.with_device(entry.label.as_str());
            log_op_error!(
                "fix_device",
                e.clone(),
                duration_ms = elapsed_ms(start),
                device = entry.label.as_str()
            );
            if is_not_found(&e) {
                FixOutcome::NotFound
            } else {
                FixOutcome::Failed(DeviceFailure::from(&e))
            }
        }
    };

    DeviceFixReport {
        label: entry.label.clone(),
        path,
        outcome,
    }
}

fn fix_device_impl(entry: &DeviceEntry, ctx: &RunContext, path: &Path) -> Result<FixOutcome> {
    let (mut device, raw) = load_device(path, &ctx.markers)?;

    let nodes = match repair_script_path(device.graph_mut(), &entry.script) {
        RepairOutcome::NoOp => {
            return Ok(FixOutcome::Unchanged { digest: raw.digest });
        }
        RepairOutcome::Repaired { nodes } => nodes,
    };

    let backup = ensure_backup(path)?;
    let digest_after = save_device(path, &device)?;

    Ok(FixOutcome::Repaired {
        nodes,
        backup,
        digest_before: raw.digest,
        digest_after,
    })
}
