// src/exit.rs
//! Process exit codes for `fixturegen`.
//!
//! Scripts can rely on 0 vs non-0; the specific codes say which stage failed.

use crate::error::FixtureError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FixtureExit {
    /// All fixtures written.
    Success = 0,
    /// I/O or configuration error.
    Error = 1,
    /// The input file is malformed (missing header, wrong field count, bad wattage).
    InvalidInput = 2,
    /// Rendering or writing the output failed part way.
    OutputFailure = 3,
}

impl FixtureExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for FixtureExit {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn report(self) -> std::process::ExitCode {
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&FixtureError> for FixtureExit {
    fn from(err: &FixtureError) -> Self {
        if err.is_input_error() {
            return Self::InvalidInput;
        }
        match err {
            FixtureError::Render { .. } | FixtureError::Write { .. } => Self::OutputFailure,
            _ => Self::Error,
        }
    }
}

impl From<&anyhow::Error> for FixtureExit {
    fn from(err: &anyhow::Error) -> Self {
        err.downcast_ref::<FixtureError>()
            .map_or(Self::Error, Self::from)
    }
}
