//! Error taxonomy for the statistics core

use thiserror::Error;

/// Errors raised by the statistics routines.
///
/// All validation happens up front, before any numeric computation. There is
/// no recovery path: a validation failure is the caller's bug and propagates
/// unchanged. Numeric edge cases (a null proportion very close to 0 or 1, a
/// tiny standard error) are not errors; they simply produce extreme
/// statistics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    /// A caller-supplied argument was rejected during validation.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

impl StatError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        StatError::InvalidArgument { reason }
    }
}
