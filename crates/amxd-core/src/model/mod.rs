pub mod connection;
pub mod finding;
pub mod graph;
pub mod node;
pub mod role;

pub use connection::Connection;
pub use finding::{Check, Finding, FindingKind, Severity};
pub use graph::{Endpoint, GraphWarning, PatchGraph};
pub use node::Node;
pub use role::{Role, RoleMarkers, DEFAULT_DICTIONARY_NAME};
