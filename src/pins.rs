//! `ActionSink` over a bank of `embedded-hal` output pins.

use crate::hal::ActionSink;
use crate::slot::{Level, OutputId};
use core::cell::RefCell;
use critical_section::Mutex;
use embedded_hal::digital::StatefulOutputPin;

/// Fixed bank of `K` output pins addressed by [`OutputId`].
///
/// Pins live behind a critical-section mutex so the bank can be shared by the
/// tick interrupt and foreground commands. Outputs past the end of the bank are
/// ignored, as are pin errors.
pub struct PinBank<P, const K: usize> {
    pins: Mutex<RefCell<[P; K]>>,
}

impl<P, const K: usize> PinBank<P, K>
where
    P: StatefulOutputPin,
{
    /// Wrap `pins`; `pins[i]` answers to `OutputId(i)`.
    pub const fn new(pins: [P; K]) -> Self {
        Self {
            pins: Mutex::new(RefCell::new(pins)),
        }
    }

    /// Number of addressable outputs.
    pub const fn len(&self) -> usize {
        K
    }

    /// True for a zero-sized bank.
    pub const fn is_empty(&self) -> bool {
        K == 0
    }

    /// Current driven level of `output`, if it exists and can be read.
    pub fn level(&self, output: OutputId) -> Option<Level> {
        critical_section::with(|cs| {
            let mut pins = self.pins.borrow_ref_mut(cs);
            let pin = pins.get_mut(output.index())?;
            match pin.is_set_high() {
                Ok(true) => Some(Level::Active),
                Ok(false) => Some(Level::Inactive),
                Err(_) => None,
            }
        })
    }

    /// Give the pins back.
    pub fn release(self) -> [P; K] {
        self.pins.into_inner().into_inner()
    }
}

impl<P, const K: usize> ActionSink for PinBank<P, K>
where
    P: StatefulOutputPin,
{
    fn toggle(&self, output: OutputId) {
        critical_section::with(|cs| {
            if let Some(pin) = self.pins.borrow_ref_mut(cs).get_mut(output.index()) {
                let _ = pin.toggle();
            }
        });
    }

    fn set_level(&self, output: OutputId, level: Level) {
        critical_section::with(|cs| {
            if let Some(pin) = self.pins.borrow_ref_mut(cs).get_mut(output.index()) {
                let _ = match level {
                    Level::Active => pin.set_high(),
                    Level::Inactive => pin.set_low(),
                };
            }
        });
    }
}

impl<P, const K: usize> core::fmt::Debug for PinBank<P, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PinBank").field("len", &K).finish_non_exhaustive()
    }
}
