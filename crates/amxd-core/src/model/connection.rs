use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A directed patch cord from one node's outlet to another node's inlet
///
/// Port 0 is the leftmost (primary) outlet or inlet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub source_id: String,
    pub source_port: u32,
    pub destination_id: String,
    pub destination_port: u32,
}

impl Connection {
    pub fn new(source_id: &str, source_port: u32, destination_id: &str, destination_port: u32) -> Self {
        Self {
            source_id: source_id.to_string(),
            source_port,
            destination_id: destination_id.to_string(),
            destination_port,
        }
    }

    /// Read a `patchline` object
    ///
    /// Returns `None` unless both `source` and `destination` are
    /// `[id, port]` arrays with a string id and a non-negative port.
    pub(crate) fn from_patchline(patchline: &Value) -> Option<Self> {
        let (source_id, source_port) = endpoint(patchline.get("source")?)?;
        let (destination_id, destination_port) = endpoint(patchline.get("destination")?)?;

        Some(Self {
            source_id,
            source_port,
            destination_id,
            destination_port,
        })
    }
}

fn endpoint(value: &Value) -> Option<(String, u32)> {
    let pair = value.as_array()?;
    let id = pair.first()?.as_str()?.to_string();
    let port = u32::try_from(pair.get(1)?.as_u64()?).ok()?;
    Some((id, port))
}
