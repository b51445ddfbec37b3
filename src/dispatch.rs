//! Tick dispatcher.
//!
//! Linear software timing wheel: every tick walks the live range of the table
//! in index order and advances each enabled slot by one. Work is O(live slots)
//! per tick with no shared deadline structure.
//!
//! Runs in interrupt context. It does not catch up on missed ticks: if a pass
//! takes longer than the tick period, the lost ticks are simply never counted.

use crate::hal::ActionSink;
use crate::table::TimerTable;

/// Run one dispatcher pass over `table`, returning how many slots fired.
///
/// For each live slot in order:
/// 1. Disabled slots are skipped.
/// 2. `elapsed` counts up by one and `fired` is cleared.
/// 3. A slot whose `elapsed` has reached `timeout` toggles its output, sets
///    `fired`, then rearms (`elapsed = 0`) if repeating or disables itself.
///
/// A slot registered with timeout `t` therefore fires on the `t`-th pass after
/// it was armed, and every `t` passes after that if repeating.
pub fn dispatch<S, const N: usize>(table: &mut TimerTable<N>, sink: &S) -> usize
where
    S: ActionSink + ?Sized,
{
    let mut fired = 0;

    for slot in table.live_mut() {
        if !slot.is_enabled() {
            continue;
        }

        // Count first so timeout == 1 fires on the very next pass
        slot.advance();

        if slot.is_due() {
            sink.toggle(slot.output());
            slot.mark_fired();
            fired += 1;
        }
    }

    fired
}
