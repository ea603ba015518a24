//! Device container codec
//!
//! A device file is an opaque binary header followed by an embedded JSON
//! document, optionally followed by trailing bytes:
//!
//! ```text
//! <header bytes> { ...document... } <trailing bytes, ignored>
//! ```
//!
//! The document boundary is found heuristically: it starts at the first `{`
//! byte and ends at the last `}` character of the (lossily decoded)
//! remainder. A trailing segment that itself contains `}` would move the
//! boundary; this matches the behaviour of the tooling that produced the
//! files and is kept for compatibility rather than replaced by a stricter
//! bracket-matching parse.
//!
//! On save the header is written back verbatim and the document is
//! regenerated with a tab indentation unit. Trailing bytes are dropped, so
//! only header identity and document content identity are guaranteed, not
//! full-file byte identity.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::errors::{ContainerError, Result};

/// Indentation unit used when regenerating the embedded document
pub const DOCUMENT_INDENT: &[u8] = b"\t";

/// A device container split into its two halves
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    /// Every byte preceding the first `{`; never modified
    pub header: Vec<u8>,
    /// The parsed embedded document
    pub document: Value,
}

impl Container {
    /// Split raw device bytes into header and parsed document
    ///
    /// # Errors
    ///
    /// See [`extract`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (header, document) = extract(bytes)?;
        Ok(Self { header, document })
    }

    /// Reassemble the container into raw device bytes
    ///
    /// # Errors
    ///
    /// See [`reassemble`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        reassemble(&self.header, &self.document)
    }
}

/// Split raw device bytes into `(header, document)`
///
/// Invalid UTF-8 after the header is replaced with U+FFFD rather than
/// rejected; only the JSON parse itself can fail.
///
/// # Errors
///
/// - [`ContainerError::NoDocumentStart`] if there is no `{` byte
/// - [`ContainerError::NoDocumentEnd`] if no `}` follows it
/// - [`ContainerError::InvalidDocument`] if the bounded text is not JSON
pub fn extract(bytes: &[u8]) -> Result<(Vec<u8>, Value)> {
    let start = bytes
        .iter()
        .position(|&b| b == b'{')
        .ok_or(ContainerError::NoDocumentStart)?;

    let text = String::from_utf8_lossy(&bytes[start..]);
    let end = text
        .rfind('}')
        .ok_or(ContainerError::NoDocumentEnd { offset: start })?;

    let document = serde_json::from_str(&text[..=end])
        .map_err(|source| ContainerError::InvalidDocument {
            offset: start,
            source,
        })?;

    Ok((bytes[..start].to_vec(), document))
}

/// Concatenate `header` with the deterministically serialized `document`
///
/// # Errors
///
/// Returns [`ContainerError::Serialize`] if the document cannot be encoded.
pub fn reassemble(header: &[u8], document: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(header.len() + 4096);
    out.extend_from_slice(header);
    write_document(&mut out, document)?;
    Ok(out)
}

/// Serialize a document alone, without any header
///
/// # Errors
///
/// Returns [`ContainerError::Serialize`] if the document cannot be encoded.
pub fn serialize_document(document: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_document(&mut out, document)?;
    Ok(out)
}

fn write_document(out: &mut Vec<u8>, document: &Value) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(DOCUMENT_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(out, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|source| ContainerError::Serialize { source })
}
