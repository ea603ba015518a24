//! Structured logging for device checks and repairs
//!
//! `init(profile)` installs the global subscriber once. Check and fix runs
//! bracket each device with `log_op_start!` / `log_op_end!` (or
//! `log_op_error!`), carrying the `device` label and `duration_ms`.
//!
//! ```rust
//! use amxd_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
