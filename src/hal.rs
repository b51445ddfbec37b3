//! Collaborator contracts: hardware timebase and output action sink.
//!
//! The scheduler never owns these. It calls into an [`ActionSink`] when slots
//! fire and drives a [`Timebase`] through configure/start/stop, installing
//! itself as the timebase's single [`TickHandler`].
//!
//! Prescaler/period arithmetic lives in `Timebase` implementations; the
//! scheduler only sees the resulting tick period.

use crate::slot::{Level, OutputId};
use fugit::MicrosDurationU32;

/// Duration of one tick as reported by a configured timebase.
pub type TickPeriod = MicrosDurationU32;

/// Requested tick granularity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickUnit {
    /// Microsecond ticks
    Fine,

    /// Millisecond ticks
    Coarse,
}

impl TickUnit {
    /// Nominal tick length for this unit.
    ///
    /// Implementations may report a slightly different period from
    /// [`Timebase::configure`] when the peripheral clock doesn't divide evenly.
    pub const fn nominal_period(self) -> TickPeriod {
        match self {
            TickUnit::Fine => TickPeriod::micros(1),
            TickUnit::Coarse => TickPeriod::millis(1),
        }
    }

    /// Operator code: `0` selects microseconds, `1` milliseconds.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(TickUnit::Fine),
            1 => Some(TickUnit::Coarse),
            _ => None,
        }
    }

    /// Short unit label.
    pub const fn as_str(self) -> &'static str {
        match self {
            TickUnit::Fine => "us",
            TickUnit::Coarse => "ms",
        }
    }
}

/// Receiver of timebase period-elapsed events.
pub trait TickHandler {
    /// Called exactly once per elapsed tick, from interrupt context.
    fn on_tick(&self);
}

/// Periodic interrupt source.
///
/// `'h` is how long an installed tick handler must stay valid; `'static` on
/// real hardware where the handler is reached from an interrupt vector.
pub trait Timebase<'h> {
    /// Platform-specific configuration error
    type Error: core::fmt::Debug;

    /// Select a prescale/period combination for `unit`.
    ///
    /// Tears down any running configuration. Returns the achieved tick period.
    fn configure(&mut self, unit: TickUnit) -> Result<TickPeriod, Self::Error>;

    /// Start generating tick interrupts.
    fn start(&mut self);

    /// Stop generating tick interrupts and release the running configuration.
    fn stop(&mut self);

    /// Install the tick handler, replacing any previous one.
    fn set_tick_handler(&mut self, handler: &'h dyn TickHandler);
}

impl<'h, T: Timebase<'h> + ?Sized> Timebase<'h> for &mut T {
    type Error = T::Error;

    fn configure(&mut self, unit: TickUnit) -> Result<TickPeriod, Self::Error> {
        (**self).configure(unit)
    }

    fn start(&mut self) {
        (**self).start()
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn set_tick_handler(&mut self, handler: &'h dyn TickHandler) {
        (**self).set_tick_handler(handler)
    }
}

/// Output-toggling collaborator.
///
/// Calls are synchronous and infallible from the scheduler's point of view.
/// Receivers are `&self` so one sink can serve both the interrupt-context
/// dispatcher and foreground commands; implementations provide their own
/// interior mutability.
pub trait ActionSink {
    /// Invert the current level of `output`.
    fn toggle(&self, output: OutputId);

    /// Drive `output` to `level`.
    fn set_level(&self, output: OutputId, level: Level);
}

impl<S: ActionSink + ?Sized> ActionSink for &S {
    fn toggle(&self, output: OutputId) {
        (**self).toggle(output)
    }

    fn set_level(&self, output: OutputId, level: Level) {
        (**self).set_level(output, level)
    }
}
