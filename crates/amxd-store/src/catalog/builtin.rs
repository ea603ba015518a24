//! The built-in Power Trio device catalog

use super::format_v0::{CatalogV0, DeviceEntry};

/// The five Power Trio devices and the scripts they must load
pub fn default_catalog() -> CatalogV0 {
    CatalogV0 {
        schema_version: 0,
        devices_dir: None,
        dictionary_name: None,
        devices: vec![
            DeviceEntry::new(
                "Track_1_Chord_Lab.amxd",
                "Track 1: Chord Lab",
                "track_1_chord_lab/logic.js",
            ),
            DeviceEntry::new(
                "Track_2_Sequencer.amxd",
                "Track 2: Sequencer",
                "track_2_sequencer/sequencer.js",
            ),
            DeviceEntry::new(
                "Track_3_Global_Brain.amxd",
                "Track 3: Global Brain",
                "shared/dict_init.js",
            ),
            DeviceEntry::new(
                "Track_4_Bridge.amxd",
                "Track 4: Bridge",
                "track_4_drums/groove_wanderer_bridge.js",
            ),
            DeviceEntry::new(
                "Track_5_Bass_Follower.amxd",
                "Track 5: Bass Follower",
                "track_5_bass/bass_follower.js",
            ),
        ],
    }
}
