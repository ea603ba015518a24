pub mod device;
pub mod repair_ops;

pub use device::DeviceDocument;
pub use repair_ops::{repair_script_path, NodeRepair, RepairOutcome};
