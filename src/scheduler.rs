//! Scheduler context: registration, tick dispatch and global disable.
//!
//! `Scheduler` owns the timer table and borrows the action sink. Every access
//! to the table happens inside a critical section, which on a single core
//! excludes the tick interrupt for exactly the length of the table mutation.
//!
//! # Example
//!
//! ```rust,ignore
//! static PINS: PinBank<LedPin, 4> = PinBank::new(pins);
//! static SCHEDULER: Scheduler<'static, PinBank<LedPin, 4>> = Scheduler::new(&PINS);
//!
//! SCHEDULER.init(&mut timebase, TickUnit::Coarse)?;
//! SCHEDULER.register(NonZeroU32::new(500).unwrap(), OutputId(2), true)?;
//! ```

use crate::config::DEFAULT_CAPACITY;
use crate::dispatch::dispatch;
use crate::error::TimerError;
use crate::hal::{ActionSink, TickHandler, TickPeriod, TickUnit, Timebase};
use crate::slot::{Level, OutputId, SlotId, TimerSlot};
use crate::table::TimerTable;
use core::cell::{Cell, RefCell};
use core::num::NonZeroU32;
use critical_section::Mutex;

/// Virtual timer scheduler multiplexed onto one hardware timebase.
///
/// Generic over:
/// - `'a`: Lifetime of the action sink borrow (and of the tick handler
///   installed in the timebase)
/// - `S`: ActionSink implementation
/// - `N`: Slot capacity
pub struct Scheduler<'a, S: ActionSink, const N: usize = DEFAULT_CAPACITY> {
    /// Slot table, shared with the tick interrupt
    table: Mutex<RefCell<TimerTable<N>>>,

    /// Tick period of the running timebase (None when stopped)
    armed: Mutex<Cell<Option<TickPeriod>>>,

    /// Output collaborator
    sink: &'a S,
}

impl<'a, S: ActionSink, const N: usize> Scheduler<'a, S, N> {
    /// Create a scheduler with an empty table and no timebase armed.
    pub const fn new(sink: &'a S) -> Self {
        Self {
            table: Mutex::new(RefCell::new(TimerTable::new())),
            armed: Mutex::new(Cell::new(None)),
            sink,
        }
    }

    /// Configure and start `timebase` for `unit`, with this scheduler as its
    /// tick handler.
    ///
    /// A timebase that is already running is stopped first. If configuration
    /// fails, the error is reported and the timer table is left untouched.
    pub fn init<T>(&'a self, timebase: &mut T, unit: TickUnit) -> Result<TickPeriod, TimerError>
    where
        T: Timebase<'a>,
    {
        if self.armed().is_some() {
            timebase.stop();
            self.set_armed(None);
        }

        let period = timebase.configure(unit).map_err(|e| {
            log::warn!("timebase configuration for {} ticks failed: {:?}", unit.as_str(), e);
            TimerError::HardwareConfigFailure
        })?;

        timebase.set_tick_handler(self);
        timebase.start();
        self.set_armed(Some(period));

        log::info!(
            "timebase armed: {} ticks, period {} us",
            unit.as_str(),
            period.to_micros()
        );
        Ok(period)
    }

    /// Register a new virtual timer.
    ///
    /// The slot is built outside the critical section and published by a
    /// single table push, so the dispatcher never observes a partly written
    /// slot. Fails with `TableFull` once all `N` slots are in use.
    pub fn register(
        &self,
        timeout: NonZeroU32,
        output: OutputId,
        repeating: bool,
    ) -> Result<SlotId, TimerError> {
        let slot = TimerSlot::new(timeout, output, repeating);

        let result = critical_section::with(|cs| self.table.borrow_ref_mut(cs).push(slot));

        match &result {
            Ok(id) => log::debug!(
                "timer {} registered: timeout {} ticks, output {}, repeating {}",
                id,
                timeout,
                output,
                repeating
            ),
            Err(e) => log::warn!("timer registration rejected: {}", e),
        }

        result
    }

    /// Run one dispatcher pass. Returns how many slots fired.
    ///
    /// This is what the installed tick handler runs; it is public so a
    /// platform can call it from its own interrupt vector.
    ///
    /// The whole pass, sink calls included, runs inside one critical section.
    /// On single-core targets that masks every interrupt, so higher-priority
    /// interrupts wait for up to one pass over `N` slots.
    pub fn tick(&self) -> usize {
        critical_section::with(|cs| {
            let mut table = self.table.borrow_ref_mut(cs);
            dispatch(&mut *table, self.sink)
        })
    }

    /// Disable every timer.
    ///
    /// Drives each live slot's output to the inactive level, stops the
    /// timebase, then rewinds the table. The timebase must be configured again
    /// with [`init`](Self::init) before new registrations take effect.
    pub fn disable_all<T>(&self, timebase: &mut T)
    where
        T: Timebase<'a>,
    {
        let quiesced = critical_section::with(|cs| {
            let mut table = self.table.borrow_ref_mut(cs);
            for slot in table.live() {
                self.sink.set_level(slot.output(), Level::Inactive);
            }
            timebase.stop();
            self.armed.borrow(cs).set(None);

            let count = table.len();
            table.reset();
            count
        });

        log::info!("all timers disabled ({} outputs reset)", quiesced);
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.table.borrow_ref(cs).len())
    }

    /// True when no slot is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slot capacity.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Copy of a live slot's current state.
    pub fn slot(&self, id: SlotId) -> Option<TimerSlot> {
        critical_section::with(|cs| self.table.borrow_ref(cs).get(id).copied())
    }

    /// Consistent copy of every live slot, taken in one critical section.
    pub fn snapshot(&self) -> heapless::Vec<(SlotId, TimerSlot), N> {
        critical_section::with(|cs| {
            self.table
                .borrow_ref(cs)
                .iter()
                .map(|(id, slot)| (id, *slot))
                .collect()
        })
    }

    /// Tick period of the running timebase, or `None` if it is stopped.
    pub fn armed(&self) -> Option<TickPeriod> {
        critical_section::with(|cs| self.armed.borrow(cs).get())
    }

    fn set_armed(&self, period: Option<TickPeriod>) {
        critical_section::with(|cs| self.armed.borrow(cs).set(period));
    }
}

impl<S: ActionSink, const N: usize> TickHandler for Scheduler<'_, S, N> {
    fn on_tick(&self) {
        self.tick();
    }
}

impl<S: ActionSink, const N: usize> core::fmt::Debug for Scheduler<'_, S, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scheduler")
            .field("len", &self.len())
            .field("capacity", &N)
            .field("armed_us", &self.armed().map(|p| p.to_micros()))
            .finish_non_exhaustive()
    }
}
