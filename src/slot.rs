//! Timer slot model.
//!
//! A `TimerSlot` is the unit of schedulable state: a timeout, a running tick
//! count, the output it toggles, and its mode/state flags. Slots are only ever
//! created through [`TimerSlot::new`] and evolve through the dispatcher.

use core::fmt;
use core::num::NonZeroU32;

/// Identifier of the output line a slot toggles when it fires.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutputId(pub u8);

impl OutputId {
    /// Raw line number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Line number as an index into a pin bank.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for OutputId {
    fn from(line: u8) -> Self {
        Self(line)
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Drive level for an output line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Level {
    /// Line asserted
    Active,

    /// Line released (the quiescent level after a global disable)
    Inactive,
}

/// Checked index of a slot in a [`TimerTable`](crate::table::TimerTable).
///
/// Only the table issues these, so a `SlotId` is always below the table's
/// capacity. Use [`TimerTable::slot_id`](crate::table::TimerTable::slot_id) to
/// convert a raw index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(usize);

impl SlotId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in the table.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One virtual timer.
///
/// `timeout`, `output` and `repeating` are fixed at creation. `elapsed`,
/// `enabled` and `fired` are advanced by the dispatcher.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimerSlot {
    timeout: NonZeroU32,
    elapsed: u32,
    output: OutputId,
    repeating: bool,
    enabled: bool,
    fired: bool,
}

impl TimerSlot {
    /// Create an armed slot with a zero tick count.
    pub const fn new(timeout: NonZeroU32, output: OutputId, repeating: bool) -> Self {
        Self {
            timeout,
            elapsed: 0,
            output,
            repeating,
            enabled: true,
            fired: false,
        }
    }

    /// Placeholder contents for never-registered storage.
    pub(crate) const fn vacant() -> Self {
        Self {
            timeout: NonZeroU32::MIN,
            elapsed: 0,
            output: OutputId(0),
            repeating: false,
            enabled: false,
            fired: false,
        }
    }

    /// Ticks between fires.
    pub const fn timeout(&self) -> NonZeroU32 {
        self.timeout
    }

    /// Ticks counted since the slot was armed or last rearmed.
    pub const fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Output line toggled on fire.
    pub const fn output(&self) -> OutputId {
        self.output
    }

    /// Whether the slot rearms after firing.
    pub const fn is_repeating(&self) -> bool {
        self.repeating
    }

    /// Whether the dispatcher still services this slot.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Ready flag: set on the dispatch pass that fired, cleared on the next
    /// counting pass.
    ///
    /// Nothing in this crate consumes it; it is exposed as slot state only.
    pub const fn has_fired(&self) -> bool {
        self.fired
    }

    /// True once `elapsed` has reached `timeout`.
    pub(crate) const fn is_due(&self) -> bool {
        self.elapsed >= self.timeout.get()
    }

    /// Fire bookkeeping. Caller performs the output action.
    pub(crate) fn mark_fired(&mut self) {
        self.fired = true;
        if self.repeating {
            self.elapsed = 0;
        } else {
            self.enabled = false;
        }
    }

    /// Count one tick toward the timeout.
    pub(crate) fn advance(&mut self) {
        self.elapsed += 1;
        self.fired = false;
    }
}
