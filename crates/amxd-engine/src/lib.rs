//! amxd Engine - Orchestration layer
//!
//! Drives the core checker and repair engine over every device of a catalog,
//! coordinating with the store for reads, backups and writes, and aggregates
//! per-device reports.

pub mod commands;
