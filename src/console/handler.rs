//! Command handler trait and the timer command implementation.
//!
//! `CommandMeta` describes a command; a `CommandHandler` executes it. The
//! console validates argument counts before dispatching, but handlers check
//! their own arguments too so they are safe to call directly.

use super::args;
use super::commands::{self, CommandMeta, COMMANDS};
use crate::config::ConsoleConfig;
use crate::error::TimerError;
use crate::hal::{ActionSink, Timebase};
use crate::response::Response;
use crate::scheduler::Scheduler;
use core::fmt::Write;

/// Longest `timer-list` row, line break included.
const ROW_LEN: usize = 64;

/// Longest `timer-list` continuation line, line break included.
const MORE_LEN: usize = 32;

/// Command execution handler trait.
///
/// Generic over `C: ConsoleConfig` to match Response buffer sizes.
pub trait CommandHandler<C: ConsoleConfig> {
    /// Execute a command by name or alias.
    ///
    /// # Returns
    ///
    /// - `Ok(Response)`: Command executed successfully
    /// - `Err(TimerError::CommandNotFound)`: Name not recognized
    /// - `Err(TimerError)`: Argument or execution error
    fn execute(&mut self, name: &str, args: &[&str]) -> Result<Response<C>, TimerError>;
}

/// Handlers for the timer console commands.
///
/// Borrows the scheduler and drives the timebase `T` on its behalf. `T` may
/// be an owned timebase or a `&mut` to one.
pub struct TimerCommands<'a, T, S, const N: usize>
where
    S: ActionSink,
{
    scheduler: &'a Scheduler<'a, S, N>,
    timebase: T,
}

impl<'a, T, S, const N: usize> TimerCommands<'a, T, S, N>
where
    T: Timebase<'a>,
    S: ActionSink,
{
    /// Bind the commands to a scheduler and its timebase.
    pub fn new(scheduler: &'a Scheduler<'a, S, N>, timebase: T) -> Self {
        Self {
            scheduler,
            timebase,
        }
    }

    /// The scheduler these commands operate on.
    pub fn scheduler(&self) -> &'a Scheduler<'a, S, N> {
        self.scheduler
    }

    /// The timebase these commands drive.
    pub fn timebase(&self) -> &T {
        &self.timebase
    }

    /// Mutable access to the timebase.
    pub fn timebase_mut(&mut self) -> &mut T {
        &mut self.timebase
    }

    fn timebase_init<C: ConsoleConfig>(&mut self, args: &[&str]) -> Result<Response<C>, TimerError> {
        let unit = args::parse_unit(args::required(args, 0, 1)?, 0)?;
        let period = self.scheduler.init(&mut self.timebase, unit)?;

        let mut response = Response::empty();
        write!(response, "Timebase running, {} us per tick", period.to_micros()).ok();
        Ok(response)
    }

    fn timer_register<C: ConsoleConfig>(&mut self, args: &[&str]) -> Result<Response<C>, TimerError> {
        // Parse everything before touching the table
        let timeout = args::parse_timeout(args::required(args, 0, 3)?, 0)?;
        let output = args::parse_output(args::required(args, 1, 3)?, 1)?;
        let repeating = args::parse_flag(args::required(args, 2, 3)?, 2)?;

        let id = self.scheduler.register(timeout, output, repeating)?;

        let mut response = Response::empty();
        write!(
            response,
            "Timer {} registered ({} of {} slots used)",
            id,
            id.index() + 1,
            self.scheduler.capacity()
        )
        .ok();
        Ok(response)
    }

    fn timer_disable_all<C: ConsoleConfig>(&mut self) -> Result<Response<C>, TimerError> {
        self.scheduler.disable_all(&mut self.timebase);
        Ok(Response::success("All timers disabled"))
    }

    fn timer_list<C: ConsoleConfig>(&self, args: &[&str]) -> Result<Response<C>, TimerError> {
        let start = match args.first() {
            Some(arg) => args::parse_start(arg, 0)?,
            None => 0,
        };

        let mut response = Response::empty();

        match self.scheduler.armed() {
            Some(period) => write!(response, "Timebase: {} us per tick", period.to_micros()).ok(),
            None => write!(response, "Timebase: stopped").ok(),
        };

        let slots = self.scheduler.snapshot();
        if slots.is_empty() {
            response.push_line_break();
            response.push_str("No timers registered");
            return Ok(response.indented());
        }
        if start >= slots.len() {
            return Err(TimerError::InvalidArgument {
                arg_index: 0,
                expected: "index of a registered slot",
            });
        }

        for (id, slot) in slots.iter().skip(start) {
            let mut row: heapless::String<ROW_LEN> = heapless::String::new();
            write!(
                row,
                "\r\n#{:<3}{:>6}/{:<6} out {:<4}{:<7}{}",
                id.index(),
                slot.elapsed(),
                slot.timeout().get(),
                slot.output().get(),
                if slot.is_repeating() { "repeat" } else { "once" },
                if slot.is_enabled() { "on" } else { "off" }
            )
            .ok();

            // Every row but the last leaves room for the continuation line
            let reserve = if id.index() + 1 < slots.len() { MORE_LEN } else { 0 };
            if response.remaining() < row.len() + reserve {
                if id.index() == start {
                    return Err(TimerError::BufferFull);
                }
                write!(response, "\r\n-- more: timer-list {} --", id.index()).ok();
                break;
            }
            response.try_push_str(&row)?;
        }

        Ok(response.indented())
    }

    fn help<C: ConsoleConfig>(&self, args: &[&str]) -> Result<Response<C>, TimerError> {
        let mut response = Response::empty();

        match args.first() {
            Some(name) => {
                let cmd = commands::find_command(name).ok_or(TimerError::CommandNotFound)?;
                write!(response, "{} {}", cmd.name, cmd.usage).ok();
                response.push_line_break();
                response.push_str(cmd.help);
            }
            None => {
                for (i, cmd) in COMMANDS.iter().enumerate() {
                    if i > 0 {
                        response.push_line_break();
                    }
                    write!(response, "{:<18}- {}", cmd.name, cmd.description).ok();
                }
            }
        }

        Ok(response.indented())
    }
}

impl<'a, T, S, C, const N: usize> CommandHandler<C> for TimerCommands<'a, T, S, N>
where
    T: Timebase<'a>,
    S: ActionSink,
    C: ConsoleConfig,
{
    fn execute(&mut self, name: &str, args: &[&str]) -> Result<Response<C>, TimerError> {
        let cmd: &CommandMeta = commands::find_command(name).ok_or(TimerError::CommandNotFound)?;

        match cmd.name {
            "timebase-init" => self.timebase_init(args),
            "timer-register" => self.timer_register(args),
            "timer-disable-all" => self.timer_disable_all(),
            "timer-list" => self.timer_list(args),
            "help" => self.help(args),
            _ => Err(TimerError::CommandNotFound),
        }
    }
}

impl<T, S, const N: usize> core::fmt::Debug for TimerCommands<'_, T, S, N>
where
    S: ActionSink,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TimerCommands")
            .field("scheduler", self.scheduler)
            .finish_non_exhaustive()
    }
}
