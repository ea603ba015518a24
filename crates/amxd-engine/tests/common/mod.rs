use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub const HEADER: &[u8] = b"ampf\x04\x00\x00\x00aaaameta\x04\x00\x00\x00\x00\x00\x00\x00ptch";

/// A healthy device document for `script`, optionally with the response loop
#[allow(dead_code)]
pub fn device_document(script: &str, with_loop: bool) -> Value {
    let mut boxes = vec![
        json!({"box": {"id": "obj-1", "text": "dict ---power_trio_brain", "saved_object_attributes": {"embed": 0}}}),
        json!({"box": {
            "id": "obj-3",
            "text": "node.script main.js",
            "textfile": {"filename": script},
            "saved_object_attributes": {"autostart": 1}
        }}),
    ];
    let mut lines = Vec::new();
    if with_loop {
        boxes.push(json!({"box": {"id": "obj-2", "text": "prepend dict_response"}}));
        lines.push(json!({"patchline": {"source": ["obj-1", 0], "destination": ["obj-2", 0]}}));
        lines.push(json!({"patchline": {"source": ["obj-2", 0], "destination": ["obj-3", 0]}}));
    }
    json!({"patcher": {"boxes": boxes, "lines": lines}})
}

#[allow(dead_code)]
pub fn write_device(dir: &Path, name: &str, document: &Value) -> PathBuf {
    let mut bytes = HEADER.to_vec();
    bytes.extend_from_slice(document.to_string().as_bytes());
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// Write all five Power Trio devices in a healthy state
#[allow(dead_code)]
pub fn write_healthy_set(dir: &Path) {
    for entry in amxd_store::default_catalog().devices {
        let document = device_document(&entry.script, entry.requires_response_loop());
        write_device(dir, &entry.file, &document);
    }
}
