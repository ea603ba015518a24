//! Error handling for amxd-store
//!
//! Wraps amxd-core ExError with store-specific helpers

use std::path::Path;

use amxd_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a file operation
///
/// A missing file maps to `NotFound` so callers can report it per device.
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    let kind = if err.kind() == std::io::ErrorKind::NotFound {
        ExErrorKind::NotFound
    } else {
        ExErrorKind::Io
    };
    ExError::new(kind)
        .with_op(operation)
        .with_path(path)
        .with_message(err.to_string())
}

/// Create a catalog validation error
pub fn catalog_error(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("catalog_parse")
        .with_message(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_not_found_kind() {
        let err = io_error(
            "read_device",
            Path::new("/nope.amxd"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.path(), Some(Path::new("/nope.amxd")));
    }

    #[test]
    fn test_io_error_other_kind() {
        let err = io_error(
            "write_device",
            Path::new("/ro.amxd"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.op(), Some("write_device"));
    }
}
