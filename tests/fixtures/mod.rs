//! Test fixtures for tick-mux testing.
//!
//! Provides:
//! - `MockSink`: ActionSink that records every output call
//! - `MockTimebase`: Timebase that records configuration and fires ticks on demand
//! - `MockIo`: Test implementation of CharIo
//! - `MockPin`: embedded-hal output pin for PinBank tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use tick_mux::{ActionSink, Level, OutputId, TickHandler, TickPeriod, TickUnit, Timebase};

#[cfg(feature = "console")]
use tick_mux::CharIo;

// ============================================================================
// MockSink - Recording Action Sink
// ============================================================================

/// One call made into the sink.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// `toggle(output)`
    Toggle(u8),
    /// `set_level(output, level)`
    SetLevel(u8, Level),
}

/// Action sink that records calls in order.
#[derive(Debug, Default)]
pub struct MockSink {
    events: RefCell<Vec<SinkEvent>>,
}

impl MockSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.borrow().clone()
    }

    /// Toggles of `output` so far.
    pub fn toggles_of(&self, output: u8) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| **e == SinkEvent::Toggle(output))
            .count()
    }

    /// Total toggle count.
    pub fn toggle_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, SinkEvent::Toggle(_)))
            .count()
    }

    /// Forget recorded calls.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl ActionSink for MockSink {
    fn toggle(&self, output: OutputId) {
        self.events.borrow_mut().push(SinkEvent::Toggle(output.get()));
    }

    fn set_level(&self, output: OutputId, level: Level) {
        self.events
            .borrow_mut()
            .push(SinkEvent::SetLevel(output.get(), level));
    }
}

// ============================================================================
// MockTimebase - Software Timebase
// ============================================================================

/// Timebase double: records what the scheduler asked for and delivers ticks
/// to the installed handler when `tick()` is called while running.
#[derive(Default)]
pub struct MockTimebase<'h> {
    handler: Option<&'h dyn TickHandler>,
    configured: Option<TickUnit>,
    running: bool,
    reject: bool,
    starts: usize,
    stops: usize,
    handlers_installed: usize,
}

impl<'h> MockTimebase<'h> {
    /// Create a stopped, unconfigured timebase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a timebase whose `configure` always fails.
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    /// Make subsequent `configure` calls fail (or succeed again).
    pub fn set_reject(&mut self, reject: bool) {
        self.reject = reject;
    }

    /// Deliver one period-elapsed interrupt. Returns false if stopped.
    pub fn tick(&self) -> bool {
        match (self.running, self.handler) {
            (true, Some(handler)) => {
                handler.on_tick();
                true
            }
            _ => false,
        }
    }

    /// Deliver `n` interrupts.
    pub fn run(&self, n: u32) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Unit from the last successful configure (cleared by stop).
    pub fn configured(&self) -> Option<TickUnit> {
        self.configured
    }

    /// True between start and stop.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of start calls.
    pub fn starts(&self) -> usize {
        self.starts
    }

    /// Number of stop calls.
    pub fn stops(&self) -> usize {
        self.stops
    }

    /// Number of handler installs.
    pub fn handlers_installed(&self) -> usize {
        self.handlers_installed
    }

    /// True once a handler is installed.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }
}

impl std::fmt::Debug for MockTimebase<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTimebase")
            .field("configured", &self.configured)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

impl<'h> Timebase<'h> for MockTimebase<'h> {
    type Error = &'static str;

    fn configure(&mut self, unit: TickUnit) -> Result<TickPeriod, Self::Error> {
        if self.reject {
            return Err("prescaler out of range");
        }
        self.running = false;
        self.configured = Some(unit);
        Ok(unit.nominal_period())
    }

    fn start(&mut self) {
        self.running = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.running = false;
        self.configured = None;
        self.stops += 1;
    }

    fn set_tick_handler(&mut self, handler: &'h dyn TickHandler) {
        self.handler = Some(handler);
        self.handlers_installed += 1;
    }
}

// ============================================================================
// MockIo - Test I/O Implementation
// ============================================================================

/// Mock I/O for testing.
///
/// Provides in-memory character I/O with input queue and output capture.
#[cfg(feature = "console")]
#[derive(Debug, Default)]
pub struct MockIo {
    /// Input queue (simulates operator typing)
    input: VecDeque<char>,

    /// Output capture (collects all output)
    output: String,
}

#[cfg(feature = "console")]
impl MockIo {
    /// Create new MockIo with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add input to queue (simulates operator typing).
    pub fn push_input(&mut self, s: &str) {
        self.input.extend(s.chars());
    }

    /// Get captured output.
    pub fn output(&self) -> String {
        self.output.clone()
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Check if input queue is empty.
    pub fn input_empty(&self) -> bool {
        self.input.is_empty()
    }
}

#[cfg(feature = "console")]
impl CharIo for MockIo {
    type Error = ();

    fn get_char(&mut self) -> Result<Option<char>, Self::Error> {
        Ok(self.input.pop_front())
    }

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        self.output.push(c);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.output.push_str(s);
        Ok(())
    }
}

// ============================================================================
// MockPin - embedded-hal Output Pin
// ============================================================================

/// Output pin that remembers its level and counts edges.
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
    pub edges: usize,
}

impl MockPin {
    fn drive(&mut self, high: bool) {
        if self.high != high {
            self.edges += 1;
        }
        self.high = high;
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}
