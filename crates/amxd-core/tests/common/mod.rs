use amxd_core::PatchGraph;
use serde_json::{json, Value};

/// A box entry for the patcher `boxes` array
#[allow(dead_code)]
pub fn box_entry(id: &str, text: &str, extra: Value) -> Value {
    let mut fields = json!({"id": id, "text": text});
    if let (Some(target), Value::Object(extra)) = (fields.as_object_mut(), extra) {
        target.extend(extra);
    }
    json!({ "box": fields })
}

/// A line entry for the patcher `lines` array
#[allow(dead_code)]
pub fn line_entry(source: &str, source_port: u32, destination: &str, destination_port: u32) -> Value {
    json!({
        "patchline": {
            "source": [source, source_port],
            "destination": [destination, destination_port]
        }
    })
}

/// A full document from box and line entries
#[allow(dead_code)]
pub fn document(boxes: Vec<Value>, lines: Vec<Value>) -> Value {
    json!({
        "patcher": {
            "fileversion": 1,
            "boxes": boxes,
            "lines": lines
        }
    })
}

/// Dictionary, prepender and script runner wired into a complete response loop
#[allow(dead_code)]
pub fn wired_sequencer_document() -> Value {
    document(
        vec![
            box_entry(
                "obj-1",
                "dict ---power_trio_brain",
                json!({"saved_object_attributes": {"embed": 0}}),
            ),
            box_entry("obj-2", "prepend dict_response", json!({})),
            box_entry(
                "obj-3",
                "node.script sequencer.js",
                json!({
                    "textfile": {"filename": "track_2_sequencer/sequencer.js", "flags": 0},
                    "saved_object_attributes": {"autostart": 1, "defer": 0}
                }),
            ),
        ],
        vec![line_entry("obj-1", 0, "obj-2", 0), line_entry("obj-2", 0, "obj-3", 0)],
    )
}

#[allow(dead_code)]
pub fn graph_of(document: &Value) -> PatchGraph {
    PatchGraph::from_document(document)
}

/// Device bytes: an opaque header followed by the compact document
#[allow(dead_code)]
pub fn device_bytes(header: &[u8], document: &Value) -> Vec<u8> {
    let mut bytes = header.to_vec();
    bytes.extend_from_slice(document.to_string().as_bytes());
    bytes
}
