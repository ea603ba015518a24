#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use amxd_core::model::RoleMarkers;
use amxd_core::ops::repair_script_path;
use amxd_store::catalog::parse_catalog_file;
use amxd_store::fs::{backup_path, ensure_backup, load_device, save_device, sha256_hex};
use common::{write_script_device, DEVICE_HEADER};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_repair_save_keeps_header_and_backup_is_pristine() {
    // GIVEN a device pointing at the wrong script
    let temp_dir = TempDir::new().unwrap();
    let path = write_script_device(temp_dir.path(), "Track_4_Bridge.amxd", "bridge.js");
    let original = fs::read(&path).unwrap();

    // WHEN it is loaded, repaired, backed up and saved
    let (mut device, raw) = load_device(&path, &RoleMarkers::default()).unwrap();
    assert_eq!(raw.digest, sha256_hex(&original));

    let outcome = repair_script_path(device.graph_mut(), "track_4_drums/groove_wanderer_bridge.js");
    assert!(outcome.changed());

    let backup = ensure_backup(&path).unwrap();
    let written_digest = save_device(&path, &device).unwrap();

    // THEN the backup is the original and the new file carries the repair
    assert_eq!(backup, Some(backup_path(&path)));
    assert_eq!(fs::read(backup_path(&path)).unwrap(), original);

    let saved = fs::read(&path).unwrap();
    assert!(saved.starts_with(DEVICE_HEADER));
    assert_eq!(written_digest, sha256_hex(&saved));
    assert_ne!(written_digest, raw.digest);

    let (reloaded, _) = load_device(&path, &RoleMarkers::default()).unwrap();
    assert_eq!(
        reloaded.graph().nodes()[0].file_reference(),
        Some("track_4_drums/groove_wanderer_bridge.js")
    );
}

#[test]
fn test_catalog_file_resolves_relative_devices_dir() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("devices.yaml");
    fs::write(
        &catalog_path,
        r#"
schema_version: 0
devices_dir: max
dictionary_name: power_trio_brain
devices:
  - file: Track_3_Global_Brain.amxd
    label: "Track 3: Global Brain"
    script: shared/dict_init.js
  - file: Track_5_Bass_Follower.amxd
    label: "Track 5: Bass Follower"
    script: track_5_bass/bass_follower.js
    requires_response_loop: false
"#,
    )
    .unwrap();

    let catalog = parse_catalog_file(&catalog_path).unwrap();

    assert_eq!(catalog.devices_dir, Some(temp_dir.path().join("max")));
    assert!(!catalog.devices[0].requires_response_loop());
    assert!(!catalog.devices[1].requires_response_loop());
}

#[test]
fn test_missing_catalog_file_names_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.yaml");

    let err = parse_catalog_file(&missing).unwrap_err();

    assert_eq!(err.op(), Some("read_catalog"));
    assert_eq!(err.path(), Some(missing.as_path()));
}
