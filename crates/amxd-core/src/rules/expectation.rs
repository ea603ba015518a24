use serde::{Deserialize, Serialize};

/// What a particular device is supposed to look like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceExpectation {
    /// Relative path of the script file the runner must reference
    pub script_path: String,
    /// Whether the dictionary → prepender → script loop is required
    pub requires_response_loop: bool,
}

impl DeviceExpectation {
    pub fn new(script_path: impl Into<String>, requires_response_loop: bool) -> Self {
        Self {
            script_path: script_path.into(),
            requires_response_loop,
        }
    }

    /// Loop requirement inferred from a device label
    ///
    /// Sequencer and bass devices answer dictionary queries, so they need the
    /// response loop.
    pub fn loop_required_for_label(label: &str) -> bool {
        label.contains("Sequencer") || label.contains("Bass")
    }
}
