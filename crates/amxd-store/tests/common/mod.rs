use std::fs;
use std::path::{Path, PathBuf};

/// Header bytes shaped like a real device preamble
#[allow(dead_code)]
pub const DEVICE_HEADER: &[u8] = b"ampf\x04\x00\x00\x00aaaameta\x04\x00\x00\x00\x00\x00\x00\x00ptch\x10\x02\x00\x00";

/// Write a device holding a single script runner pointing at `filename`
#[allow(dead_code)]
pub fn write_script_device(dir: &Path, name: &str, filename: &str) -> PathBuf {
    let document = serde_json::json!({
        "patcher": {
            "boxes": [{"box": {
                "id": "obj-1",
                "text": "node.script main.js",
                "textfile": {"filename": filename},
                "saved_object_attributes": {"autostart": 1}
            }}],
            "lines": []
        }
    });
    let mut bytes = DEVICE_HEADER.to_vec();
    bytes.extend_from_slice(document.to_string().as_bytes());

    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}
