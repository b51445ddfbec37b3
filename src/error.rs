//! Error types for timer operations.
//!
//! The `TimerError` enum covers registration, hardware configuration and
//! operator-command failures. None of them is fatal: every variant is
//! recoverable by retrying with corrected input.

use core::fmt;

/// Timer error type.
///
/// Operator-input errors (`MissingArgument`, `InvalidArgument`) and
/// `HardwareConfigFailure` abort the command before any shared state is
/// touched. `TableFull` is returned instead of overwriting a live slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// Command not found in the command table
    CommandNotFound,

    /// Too few (or too many) arguments for a command
    MissingArgument {
        /// Number of arguments the command needs
        expected: usize,
        /// Number of arguments received
        received: usize,
    },

    /// Argument present but not usable (e.g., expected integer, got text)
    InvalidArgument {
        /// Which argument (0-indexed)
        arg_index: usize,
        /// What was expected (e.g., "tick count > 0")
        expected: &'static str,
    },

    /// Hardware timebase rejected the requested configuration
    HardwareConfigFailure,

    /// Every slot in the timer table is in use
    TableFull {
        /// Table capacity
        capacity: usize,
    },

    /// Buffer capacity exceeded
    BufferFull,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::CommandNotFound => write!(f, "Command not found"),
            TimerError::MissingArgument { expected, received } => {
                write!(f, "Expected {} arguments, got {}", expected, received)
            }
            TimerError::InvalidArgument {
                arg_index,
                expected,
            } => {
                write!(f, "Argument {}: expected {}", arg_index + 1, expected)
            }
            TimerError::HardwareConfigFailure => write!(f, "Timebase configuration failed"),
            TimerError::TableFull { capacity } => {
                write!(f, "Timer table full ({} slots)", capacity)
            }
            TimerError::BufferFull => write!(f, "Buffer full"),
        }
    }
}
