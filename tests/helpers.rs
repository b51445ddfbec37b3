//! Helper functions for integration tests.
//!
//! Test files pull this in with `#[path = "helpers.rs"] mod helpers;` and
//! reach the fixtures through `helpers::fixtures`.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use std::num::NonZeroU32;

use fixtures::{MockSink, MockTimebase};
use tick_mux::Scheduler;

#[cfg(feature = "console")]
use fixtures::MockIo;
#[cfg(feature = "console")]
use tick_mux::{Console, DefaultConfig, TimerCommands};

/// Scheduler at the default capacity over the recording sink.
pub type TestScheduler<'a> = Scheduler<'a, MockSink>;

/// Timer commands driving an owned mock timebase.
#[cfg(feature = "console")]
pub type TestCommands<'a> = TimerCommands<'a, MockTimebase<'a>, MockSink, 16>;

/// Console used by the integration tests.
#[cfg(feature = "console")]
pub type TestConsole<'a> = Console<MockIo, TestCommands<'a>, DefaultConfig>;

/// Shorthand for a tick count.
pub fn ticks(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).expect("tick count must be non-zero")
}

/// Deliver `n` ticks and collect the 1-based tick numbers on which `output`
/// toggled.
pub fn fire_ticks(timebase: &MockTimebase<'_>, sink: &MockSink, output: u8, n: u32) -> Vec<u32> {
    let mut fired_at = Vec::new();
    for tick in 1..=n {
        let before = sink.toggles_of(output);
        timebase.tick();
        if sink.toggles_of(output) > before {
            fired_at.push(tick);
        }
    }
    fired_at
}

/// Create a console bound to `scheduler` with a fresh mock timebase.
#[cfg(feature = "console")]
pub fn create_console<'a>(scheduler: &'a TestScheduler<'a>) -> TestConsole<'a> {
    let commands = TimerCommands::new(scheduler, MockTimebase::new());
    Console::new(commands, MockIo::new())
}

/// Type `line` followed by Enter and return everything the console wrote.
#[cfg(feature = "console")]
pub fn execute_command(console: &mut TestConsole<'_>, line: &str) -> String {
    console.io_mut().clear_output();
    for c in line.chars() {
        console.process_char(c).expect("mock io never fails");
    }
    console.process_char('\r').expect("mock io never fails");
    console.io_mut().output()
}

/// Deliver `n` ticks through the console's timebase.
#[cfg(feature = "console")]
pub fn drive_ticks(console: &TestConsole<'_>, n: u32) {
    console.handler().timebase().run(n);
}

/// Assert that a command completed without an error line.
#[cfg(feature = "console")]
pub fn assert_success(output: &str) {
    assert!(!output.contains("Error:"), "unexpected error: {output:?}");
}

/// Assert that a command printed a diagnostic containing `fragment`.
#[cfg(feature = "console")]
pub fn assert_error(output: &str, fragment: &str) {
    assert!(output.contains("Error:"), "expected an error: {output:?}");
    assert!(
        output.contains(fragment),
        "expected {fragment:?} in {output:?}"
    );
}
