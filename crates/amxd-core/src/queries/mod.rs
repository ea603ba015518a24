//! Query module for read-only graph lookups
//!
//! Key principles:
//! - All queries are read-only (no mutations)
//! - All queries are total (no match is `None`/`false`, never an error)
//! - Results follow declaration order

pub mod graph_queries;

pub use graph_queries::{
    connections_from, connections_to, find_by_content_substring, find_by_role,
    find_connections_between, find_node, nodes_with_role, script_runner_summary,
    ScriptRunnerSummary,
};
