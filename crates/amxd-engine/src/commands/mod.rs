pub mod check;
pub mod fix;
pub mod run;

pub use check::{check_device_file, check_devices, CheckOutcome, CheckSummary, DeviceCheckReport};
pub use fix::{fix_device_file, fix_devices, DeviceFixReport, FixOutcome, FixSummary};
pub use run::{DeviceFailure, RunContext};
