//! # tick-mux
//!
//! Virtual timers multiplexed onto a single hardware timebase interrupt.
//!
//! **Key features:**
//! - **Static allocation** - Fixed-capacity slot table, zero heap usage
//! - **Interrupt-safe** - Table mutations run inside critical sections
//! - **Checked capacity** - Registering past the last slot fails with `TableFull`
//! - **Pluggable hardware** - `Timebase` and `ActionSink` traits, plus an
//!   `embedded-hal` pin bank
//! - **Operator console** - Optional line console exposing the timer commands
//!
//! ## Optional Features
//!
//! - `console` - Character I/O trait, command table and line console (default)
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;

// Timer model and tick dispatch
pub mod dispatch;
pub mod slot;
pub mod table;

// Hardware collaborators
pub mod hal;
pub mod pins;

// Scheduler context
pub mod scheduler;

// Operator console
#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "console")]
pub mod io;
#[cfg(feature = "console")]
pub mod response;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Configuration
pub use config::{ConsoleConfig, DefaultConfig, MinimalConfig, DEFAULT_CAPACITY};

// Error types
pub use error::TimerError;

// Timer model
pub use dispatch::dispatch;
pub use slot::{Level, OutputId, SlotId, TimerSlot};
pub use table::TimerTable;

// Hardware collaborators
pub use hal::{ActionSink, TickHandler, TickPeriod, TickUnit, Timebase};
pub use pins::PinBank;

// Scheduler
pub use scheduler::Scheduler;

// Console types
#[cfg(feature = "console")]
pub use console::{CommandHandler, CommandMeta, Console, TimerCommands};
#[cfg(feature = "console")]
pub use io::CharIo;
#[cfg(feature = "console")]
pub use response::Response;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
