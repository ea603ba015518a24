use crate::container::Container;
use crate::errors::Result;
use crate::model::{PatchGraph, RoleMarkers};

/// A loaded device: its container plus the graph built from the document
///
/// Repairs mutate the graph; [`DeviceDocument::to_bytes`] folds the modified
/// nodes back into a copy of the document and re-encodes the container.
#[derive(Debug, Clone)]
pub struct DeviceDocument {
    container: Container,
    graph: PatchGraph,
}

impl DeviceDocument {
    /// Extract the document from raw device bytes and build its graph
    ///
    /// # Errors
    /// Fails when no document can be located or parsed.
    pub fn parse(bytes: &[u8], markers: &RoleMarkers) -> Result<Self> {
        let container = Container::from_bytes(bytes)?;
        let graph = PatchGraph::from_document_with(&container.document, markers);
        Ok(Self { container, graph })
    }

    pub fn graph(&self) -> &PatchGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut PatchGraph {
        &mut self.graph
    }

    pub fn header(&self) -> &[u8] {
        &self.container.header
    }

    /// The document as it was read
    pub fn document(&self) -> &serde_json::Value {
        &self.container.document
    }

    /// Header followed by the regenerated document, including graph edits
    ///
    /// # Errors
    /// Fails if the document cannot be serialized.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut document = self.container.document.clone();
        self.graph.write_back(&mut document);
        crate::container::reassemble(&self.container.header, &document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::repair_script_path;

    const DEVICE: &[u8] = b"ampf\x00\x00\x01\x04meta{\"patcher\":{\"boxes\":[{\"box\":{\"id\":\"obj-1\",\"text\":\"node.script x.js\",\"textfile\":{\"filename\":\"x.js\"}}}],\"lines\":[]}}";

    #[test]
    fn test_parse_keeps_header_and_builds_graph() {
        let device = DeviceDocument::parse(DEVICE, &RoleMarkers::default()).unwrap();

        assert_eq!(device.header(), b"ampf\x00\x00\x01\x04meta");
        assert_eq!(device.graph().nodes().len(), 1);
    }

    #[test]
    fn test_to_bytes_carries_repairs() {
        let mut device = DeviceDocument::parse(DEVICE, &RoleMarkers::default()).unwrap();
        repair_script_path(device.graph_mut(), "shared/x.js");

        let bytes = device.to_bytes().unwrap();
        let reread = DeviceDocument::parse(&bytes, &RoleMarkers::default()).unwrap();

        assert!(bytes.starts_with(b"ampf\x00\x00\x01\x04meta{"));
        assert_eq!(
            reread.graph().nodes()[0].file_reference(),
            Some("shared/x.js")
        );
        // the loaded document itself is left as read
        assert_eq!(
            device.document()["patcher"]["boxes"][0]["box"]["textfile"]["filename"],
            serde_json::json!("x.js")
        );
    }

    #[test]
    fn test_parse_without_document_fails() {
        let err = DeviceDocument::parse(b"\x00\x01\x02", &RoleMarkers::default()).unwrap_err();
        assert!(err.is_parse_error());
    }
}
