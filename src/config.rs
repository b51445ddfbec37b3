//! Capacity and buffer-size configuration.
//!
//! Slot capacity is a const generic on [`Scheduler`](crate::scheduler::Scheduler)
//! and [`TimerTable`](crate::table::TimerTable), defaulting to
//! [`DEFAULT_CAPACITY`]. The operator console is sized by a `ConsoleConfig`
//! implementation, which adds no runtime overhead.

/// Default number of virtual timer slots.
pub const DEFAULT_CAPACITY: usize = 16;

/// Console configuration trait defining buffer sizes and limits.
///
/// All values are const (zero runtime cost).
pub trait ConsoleConfig {
    /// Maximum input line length (default: 128)
    const MAX_INPUT: usize;

    /// Maximum number of command arguments (default: 8)
    const MAX_ARGS: usize;

    /// Maximum response message length (default: 256)
    const MAX_RESPONSE: usize;
}

/// Default configuration for typical embedded systems.
///
/// - MAX_INPUT: 128 bytes
/// - MAX_ARGS: 8 arguments
/// - MAX_RESPONSE: 256 bytes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl ConsoleConfig for DefaultConfig {
    const MAX_INPUT: usize = 128;
    const MAX_ARGS: usize = 8;
    const MAX_RESPONSE: usize = 256;
}

/// Minimal configuration for resource-constrained systems.
///
/// - MAX_INPUT: 64 bytes
/// - MAX_ARGS: 4 arguments
/// - MAX_RESPONSE: 128 bytes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MinimalConfig;

impl ConsoleConfig for MinimalConfig {
    const MAX_INPUT: usize = 64;
    const MAX_ARGS: usize = 4;
    const MAX_RESPONSE: usize = 128;
}
