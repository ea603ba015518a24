//! Device file reads and writes

use crate::errors::{io_error, Result};
use crate::fs::atomic::atomic_write;
use amxd_core::errors::ExError;
use amxd_core::model::RoleMarkers;
use amxd_core::ops::DeviceDocument;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Raw device bytes plus their digest
#[derive(Debug, Clone)]
pub struct DeviceBytes {
    pub bytes: Vec<u8>,
    pub digest: String,
}

/// Hex-encoded SHA-256 of `bytes`
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Read a device file
pub fn read_device_bytes(path: &Path) -> Result<DeviceBytes> {
    let bytes = fs::read(path).map_err(|e| io_error("read_device", path, e))?;
    let digest = sha256_hex(&bytes);
    tracing::debug!(path = %path.display(), size = bytes.len(), "device read");
    Ok(DeviceBytes { bytes, digest })
}

/// Read and parse a device file
pub fn load_device(path: &Path, markers: &RoleMarkers) -> Result<(DeviceDocument, DeviceBytes)> {
    let raw = read_device_bytes(path)?;
    let device = DeviceDocument::parse(&raw.bytes, markers)
        .map_err(|e| ExError::from(e).with_path(path))?;
    Ok((device, raw))
}

/// Serialize a device and write it atomically; returns the written digest
pub fn save_device(path: &Path, device: &DeviceDocument) -> Result<String> {
    let bytes = device
        .to_bytes()
        .map_err(|e| ExError::from(e).with_path(path))?;
    atomic_write(path, &bytes)?;
    Ok(sha256_hex(&bytes))
}
