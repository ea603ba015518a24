use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using ContainerError
pub type Result<T> = std::result::Result<T, ContainerError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and machine-readable reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input/Configuration
    InvalidInput,
    NotFound,

    // Container
    /// No document boundary was found, or the boundary content is not JSON
    ContainerParse,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ContainerParse => "ERR_CONTAINER_PARSE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and enough
/// context (operation, file, device) to report a per-file failure without
/// aborting the rest of a run.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    device: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            device: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add device label context
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the device label context, if any
    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(device) = &self.device {
            write!(f, " (device: {})", device)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Errors raised while splitting or reassembling a device container
#[derive(Error, Debug)]
pub enum ContainerError {
    /// No `{` byte anywhere in the container
    #[error("no embedded document found: container has no '{{' byte")]
    NoDocumentStart,

    /// A `{` was found but no `}` follows it
    #[error("embedded document starting at byte {offset} is never closed")]
    NoDocumentEnd { offset: usize },

    /// The text between the first `{` and the last `}` is not valid JSON
    #[error("embedded document starting at byte {offset} is not valid JSON: {source}")]
    InvalidDocument {
        offset: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be serialized back to text
    #[error("failed to serialize document: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl ContainerError {
    /// True for every variant that means "the container could not be parsed"
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, ContainerError::Serialize { .. })
    }
}

impl From<ContainerError> for ExError {
    fn from(err: ContainerError) -> Self {
        match &err {
            ContainerError::NoDocumentStart
            | ContainerError::NoDocumentEnd { .. }
            | ContainerError::InvalidDocument { .. } => ExError::new(ExErrorKind::ContainerParse)
                .with_op("extract")
                .with_message(err.to_string()),
            ContainerError::Serialize { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("reassemble")
                .with_message(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ExErrorKind::ContainerParse.code(), "ERR_CONTAINER_PARSE");
        assert_eq!(ExErrorKind::Io.code(), "ERR_IO");
        assert_eq!(ExErrorKind::NotFound.code(), "ERR_NOT_FOUND");
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("read_device")
            .with_device("Track 2: Sequencer")
            .with_path("/tmp/Track_2_Sequencer.amxd")
            .with_message("permission denied");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_IO]"));
        assert!(rendered.contains("read_device"));
        assert!(rendered.contains("permission denied"));
        assert!(rendered.contains("Track 2: Sequencer"));
        assert!(rendered.contains("Track_2_Sequencer.amxd"));
    }

    #[test]
    fn test_container_error_maps_to_parse_kind() {
        let ex: ExError = ContainerError::NoDocumentEnd { offset: 4 }.into();
        assert_eq!(ex.kind(), ExErrorKind::ContainerParse);
        assert_eq!(ex.op(), Some("extract"));
        assert!(ex.message().contains("byte 4"));
    }

    #[test]
    fn test_invalid_document_keeps_json_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops}").unwrap_err();
        let err = ContainerError::InvalidDocument {
            offset: 0,
            source: json_err,
        };

        assert!(err.is_parse_error());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner = ExError::new(ExErrorKind::ContainerParse).with_message("bad json");
        let outer = ExError::new(ExErrorKind::Internal).with_source(inner);

        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::ContainerParse)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }
}
