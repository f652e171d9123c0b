//! Error types

use std::error::Error;
use std::fmt;

/// Errors surfaced by wheel construction and commands.
///
/// Commands that arrive at a busy or disabled wheel are not errors; they
/// are silently dropped (see `SpinWheel::spin`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    /// Construction-time validation failed (empty section list, duplicate
    /// ids, out-of-range rigged or initial index)
    InvalidConfig(String),
    /// `spin_to_index` target outside `[0, len)`
    InvalidIndex { index: usize, len: usize },
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::InvalidConfig(msg) => write!(f, "invalid wheel config: {msg}"),
            WheelError::InvalidIndex { index, len } => {
                write!(f, "slice index {index} out of range for {len} sections")
            }
        }
    }
}

impl Error for WheelError {}
