//! Shared per-run context for the check and fix commands

use amxd_core::errors::{ExError, ExErrorKind};
use amxd_core::model::RoleMarkers;
use amxd_store::catalog::{CatalogV0, DeviceEntry};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where devices live and how their nodes are classified
#[derive(Debug, Clone)]
pub struct RunContext {
    pub devices_dir: PathBuf,
    pub markers: RoleMarkers,
}

impl RunContext {
    /// Build the context for a catalog
    ///
    /// `devices_dir` overrides the catalog's own directory; with neither, the
    /// current directory is used.
    pub fn new(catalog: &CatalogV0, devices_dir: Option<&Path>) -> Self {
        let devices_dir = devices_dir
            .map(Path::to_path_buf)
            .or_else(|| catalog.devices_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            devices_dir,
            markers: catalog.role_markers(),
        }
    }

    pub fn device_path(&self, entry: &DeviceEntry) -> PathBuf {
        entry.resolve(&self.devices_dir)
    }
}

/// A fatal per-device error, flattened for reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceFailure {
    pub code: String,
    pub message: String,
}

impl From<&ExError> for DeviceFailure {
    fn from(err: &ExError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Whether an error means the device file does not exist
pub(crate) fn is_not_found(err: &ExError) -> bool {
    err.kind() == ExErrorKind::NotFound
}

pub(crate) fn elapsed_ms(start: std::time::Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
