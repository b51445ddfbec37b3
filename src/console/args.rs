//! Operator argument parsing.
//!
//! Each parser takes the raw token and its position so a failure can name the
//! offending argument. Parsers never touch scheduler or timebase state.

use crate::error::TimerError;
use crate::hal::TickUnit;
use crate::slot::OutputId;
use core::num::NonZeroU32;

/// Fetch argument `index`, or `MissingArgument` if the operator gave fewer
/// than `expected`.
pub fn required<'s>(args: &[&'s str], index: usize, expected: usize) -> Result<&'s str, TimerError> {
    args.get(index).copied().ok_or(TimerError::MissingArgument {
        expected,
        received: args.len(),
    })
}

/// Tick unit: `0`/`us`/`fine` or `1`/`ms`/`coarse`.
pub fn parse_unit(arg: &str, arg_index: usize) -> Result<TickUnit, TimerError> {
    match arg {
        "us" | "fine" => Ok(TickUnit::Fine),
        "ms" | "coarse" => Ok(TickUnit::Coarse),
        code => code
            .parse::<u32>()
            .ok()
            .and_then(TickUnit::from_code)
            .ok_or(TimerError::InvalidArgument {
                arg_index,
                expected: "unit (0/us or 1/ms)",
            }),
    }
}

/// Timeout in ticks; zero is rejected.
pub fn parse_timeout(arg: &str, arg_index: usize) -> Result<NonZeroU32, TimerError> {
    arg.parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(TimerError::InvalidArgument {
            arg_index,
            expected: "tick count > 0",
        })
}

/// Output line number.
pub fn parse_output(arg: &str, arg_index: usize) -> Result<OutputId, TimerError> {
    arg.parse::<u8>()
        .map(OutputId)
        .map_err(|_| TimerError::InvalidArgument {
            arg_index,
            expected: "output line 0-255",
        })
}

/// Slot index to start a listing at.
pub fn parse_start(arg: &str, arg_index: usize) -> Result<usize, TimerError> {
    arg.parse::<usize>().map_err(|_| TimerError::InvalidArgument {
        arg_index,
        expected: "slot index",
    })
}

/// Boolean flag given as `0` or `1`.
pub fn parse_flag(arg: &str, arg_index: usize) -> Result<bool, TimerError> {
    match arg {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(TimerError::InvalidArgument {
            arg_index,
            expected: "0 or 1",
        }),
    }
}
