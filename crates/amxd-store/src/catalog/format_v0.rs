//! Catalog Format v0 schema
//!
//! Defines the YAML structure listing the devices to inspect

use amxd_core::model::RoleMarkers;
use amxd_core::rules::DeviceExpectation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level catalog file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Directory device files are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices_dir: Option<PathBuf>,

    /// Name of the shared dictionary (defaults to `power_trio_brain`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_name: Option<String>,

    /// Devices to inspect, in report order
    pub devices: Vec<DeviceEntry>,
}

/// One device and its expected configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEntry {
    /// File name (or path) of the device, relative to `devices_dir`
    pub file: String,

    /// Human label used in reports
    pub label: String,

    /// Script path the device's script runner must reference
    pub script: String,

    /// Whether the response loop is required; inferred from the label when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_response_loop: Option<bool>,
}

impl DeviceEntry {
    pub fn new(file: &str, label: &str, script: &str) -> Self {
        Self {
            file: file.to_string(),
            label: label.to_string(),
            script: script.to_string(),
            requires_response_loop: None,
        }
    }

    pub fn requires_response_loop(&self) -> bool {
        self.requires_response_loop
            .unwrap_or_else(|| DeviceExpectation::loop_required_for_label(&self.label))
    }

    pub fn expectation(&self) -> DeviceExpectation {
        DeviceExpectation::new(self.script.clone(), self.requires_response_loop())
    }

    /// Device path under `devices_dir`; absolute `file` values win
    pub fn resolve(&self, devices_dir: &Path) -> PathBuf {
        devices_dir.join(&self.file)
    }
}

impl CatalogV0 {
    /// Role markers for this catalog's dictionary name
    pub fn role_markers(&self) -> RoleMarkers {
        match &self.dictionary_name {
            Some(name) => RoleMarkers::for_dictionary(name),
            None => RoleMarkers::default(),
        }
    }
}
