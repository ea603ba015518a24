//! Filesystem access for device files
//!
//! Provides:
//! - Atomic writes (temp file + rename)
//! - One-time backups at `<path>.backup`
//! - Device reads and writes with SHA-256 digests

pub mod atomic;
pub mod backup;
pub mod device_io;

pub use atomic::atomic_write;
pub use backup::{backup_path, ensure_backup, BACKUP_SUFFIX};
pub use device_io::{load_device, read_device_bytes, save_device, sha256_hex, DeviceBytes};
