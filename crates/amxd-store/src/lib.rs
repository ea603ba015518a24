//! amxd Store - filesystem layer for device files
//!
//! Provides:
//! - Device reads with SHA-256 digests and atomic writes
//! - One-time `<path>.backup` copies before a device is modified
//! - Catalog Format v0 (YAML) parser and the built-in Power Trio catalog

pub mod catalog;
pub mod errors;
pub mod fs;

// Re-export key types
pub use catalog::{default_catalog, CatalogV0, DeviceEntry};
pub use errors::Result;
