//! amxd Core - device container codec and patch graph kernel
//!
//! This crate provides everything that operates on a single device file in
//! memory:
//! - Container codec (binary header + embedded patcher document)
//! - Patch graph model with role-classified nodes and port-addressed connections
//! - Read-only graph queries
//! - Device invariant checks producing structured findings
//! - Targeted script-path repair
//!
//! File I/O, catalogs and backups live in `amxd-store`; orchestration over
//! many devices lives in `amxd-engine`.

pub mod container;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;

pub use amxd_core_types::schema;

// Re-export commonly used types
pub use container::{extract, reassemble, Container};
pub use errors::{ContainerError, ExError, ExErrorKind, Result};
pub use model::{Connection, Finding, FindingKind, Node, PatchGraph, Role, RoleMarkers, Severity};
pub use ops::{repair_script_path, DeviceDocument, RepairOutcome};
pub use rules::{check_device, DeviceExpectation, LoopStatus};
