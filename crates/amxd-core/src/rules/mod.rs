pub mod expectation;
pub mod invariants;
pub mod validation;

pub use expectation::DeviceExpectation;
pub use invariants::{response_loop_status, LoopStatus};
pub use validation::{check_device, has_blocking};
