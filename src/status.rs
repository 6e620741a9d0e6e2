//! Exit status codes for the CLI
//!
//! Seaquest follows standard Unix exit code conventions:
//! - 0: The run completed (transport failures inside iterations included)
//! - 1: The run could not start (bad flags, missing endpoint, client setup)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Every iteration was attempted and reported
    Success = 0,
    /// Setup failed before any request was issued
    Error = 1,
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}
