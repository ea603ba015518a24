//! Catalog parser with validation
//!
//! Parses YAML and validates schema version, required fields and file uniqueness

use crate::catalog::format_v0::CatalogV0;
use crate::errors::{catalog_error, io_error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a catalog file from a path
///
/// A relative `devices_dir` is resolved against the catalog file's directory.
pub fn parse_catalog_file(path: &Path) -> Result<CatalogV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("read_catalog", path, e))?;

    let mut catalog = parse_catalog_str(&content).map_err(|e| e.with_path(path))?;
    if let (Some(dir), Some(base)) = (&catalog.devices_dir, path.parent()) {
        if dir.is_relative() {
            catalog.devices_dir = Some(base.join(dir));
        }
    }

    Ok(catalog)
}

/// Parse a catalog from a string
pub fn parse_catalog_str(content: &str) -> Result<CatalogV0> {
    let catalog: CatalogV0 = serde_yaml::from_str(content)
        .map_err(|e| catalog_error(&format!("YAML parse error: {}", e)))?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

/// Validate a parsed catalog
pub fn validate_catalog(catalog: &CatalogV0) -> Result<()> {
    if catalog.schema_version != 0 {
        return Err(catalog_error(&format!(
            "Unsupported schema_version: {}. Expected 0",
            catalog.schema_version
        )));
    }

    if catalog.devices.is_empty() {
        return Err(catalog_error("Catalog lists no devices"));
    }

    if let Some(name) = &catalog.dictionary_name {
        if name.trim().is_empty() {
            return Err(catalog_error("dictionary_name cannot be empty"));
        }
    }

    let mut files = HashSet::new();
    for (index, device) in catalog.devices.iter().enumerate() {
        for (field, value) in [
            ("file", &device.file),
            ("label", &device.label),
            ("script", &device.script),
        ] {
            if value.trim().is_empty() {
                return Err(catalog_error(&format!(
                    "Device #{} has an empty '{}'",
                    index, field
                )));
            }
        }

        if !files.insert(device.file.as_str()) {
            return Err(catalog_error(&format!(
                "Duplicate device file: {}",
                device.file
            )));
        }
    }

    Ok(())
}
