pub mod builtin;
pub mod format_v0;
pub mod parser;

pub use builtin::default_catalog;
pub use format_v0::{CatalogV0, DeviceEntry};
pub use parser::{parse_catalog_file, parse_catalog_str, validate_catalog};
