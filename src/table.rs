//! Fixed-capacity timer table.
//!
//! Slots are allocated from a monotonic cursor and never freed one by one.
//! The only way to reclaim capacity is [`TimerTable::reset`], which rewinds the
//! cursor and leaves old contents in place to be overwritten by later
//! registrations.

use crate::error::TimerError;
use crate::slot::{SlotId, TimerSlot};

/// Arena of `N` timer slots plus the allocation cursor.
///
/// Invariant: `cursor <= N`. Slots `[0, cursor)` are live.
#[derive(Debug, Clone)]
pub struct TimerTable<const N: usize> {
    slots: [TimerSlot; N],
    cursor: usize,
}

impl<const N: usize> TimerTable<N> {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            slots: [TimerSlot::vacant(); N],
            cursor: 0,
        }
    }

    /// Total number of slots.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of live slots (the cursor).
    pub const fn len(&self) -> usize {
        self.cursor
    }

    /// True when no slot is live.
    pub const fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// True when the next registration would fail.
    pub const fn is_full(&self) -> bool {
        self.cursor >= N
    }

    /// Convert a raw index into a `SlotId` if it names a live slot.
    pub fn slot_id(&self, index: usize) -> Option<SlotId> {
        (index < self.cursor).then(|| SlotId::new(index))
    }

    /// Allocate the slot at the cursor.
    ///
    /// The slot is fully written before the cursor moves past it.
    pub fn push(&mut self, slot: TimerSlot) -> Result<SlotId, TimerError> {
        if self.is_full() {
            return Err(TimerError::TableFull { capacity: N });
        }

        let index = self.cursor;
        self.slots[index] = slot;
        self.cursor = index + 1;

        Ok(SlotId::new(index))
    }

    /// Look up a live slot. Returns `None` for ids issued before a reset that
    /// are past the current cursor.
    pub fn get(&self, id: SlotId) -> Option<&TimerSlot> {
        self.live().get(id.index())
    }

    /// Live slots in index order.
    pub fn live(&self) -> &[TimerSlot] {
        &self.slots[..self.cursor]
    }

    /// Live slots in index order, mutable.
    pub(crate) fn live_mut(&mut self) -> &mut [TimerSlot] {
        &mut self.slots[..self.cursor]
    }

    /// Iterate over `(SlotId, &TimerSlot)` pairs of the live range.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &TimerSlot)> {
        self.live()
            .iter()
            .enumerate()
            .map(|(index, slot)| (SlotId::new(index), slot))
    }

    /// Rewind the cursor to zero. Slot contents are not cleared.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl<const N: usize> Default for TimerTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
