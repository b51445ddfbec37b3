//! Operator console for the timer commands.
//!
//! The `Console` struct turns characters from a [`CharIo`] into command lines,
//! dispatches them to a [`CommandHandler`] and writes the formatted result.
//! Line editing is intentionally small: printable characters are echoed,
//! backspace erases, CR or LF submits, other control characters are ignored.

use crate::config::ConsoleConfig;
use crate::error::TimerError;
use crate::io::CharIo;
use crate::response::Response;
use core::fmt::Write;
use core::marker::PhantomData;

// Sub-modules
pub mod args;
pub mod commands;
pub mod handler;

// Re-export key types
pub use commands::{find_command, CommandMeta, COMMANDS};
pub use handler::{CommandHandler, TimerCommands};

/// Prompt written after every response.
pub const PROMPT: &str = "> ";

/// Banner written by [`Console::activate`].
pub const WELCOME: &str = "Virtual timer console. Type 'help' for commands.\r\n";

/// Line-oriented operator console.
///
/// Generic over:
/// - `IO`: CharIo implementation
/// - `H`: CommandHandler implementation
/// - `C`: ConsoleConfig implementation
pub struct Console<IO, H, C>
where
    IO: CharIo,
    H: CommandHandler<C>,
    C: ConsoleConfig,
{
    /// Input buffer, bounded by `C::MAX_INPUT`
    input_buffer: heapless::String<128>, // TODO: Use C::MAX_INPUT when generic_const_exprs stabilizes

    /// I/O interface
    io: IO,

    /// Command handlers
    handler: H,

    /// Config type marker (zero-size)
    _config: PhantomData<C>,
}

impl<IO, H, C> core::fmt::Debug for Console<IO, H, C>
where
    IO: CharIo,
    H: CommandHandler<C>,
    C: ConsoleConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Console")
            .field("input_buffer", &self.input_buffer.as_str())
            .finish_non_exhaustive()
    }
}

impl<IO, H, C> Console<IO, H, C>
where
    IO: CharIo,
    H: CommandHandler<C>,
    C: ConsoleConfig,
{
    /// Create a console. Call `activate()` to print the banner and prompt.
    pub fn new(handler: H, io: IO) -> Self {
        Self {
            input_buffer: heapless::String::new(),
            io,
            handler,
            _config: PhantomData,
        }
    }

    /// Show welcome message and initial prompt.
    pub fn activate(&mut self) -> Result<(), IO::Error> {
        self.io.write_str(WELCOME)?;
        self.io.write_str(PROMPT)
    }

    /// Process a single character of input.
    pub fn process_char(&mut self, c: char) -> Result<(), IO::Error> {
        match c {
            '\n' | '\r' => self.handle_enter(),

            // Backspace - ASCII BS (0x08) or DEL (0x7F)
            '\x08' | '\x7f' => {
                if self.input_buffer.pop().is_some() {
                    self.io.write_str("\x08 \x08")?;
                }
                Ok(())
            }

            c if c.is_control() => Ok(()),

            c => {
                let fits = self.input_buffer.len() + c.len_utf8()
                    <= C::MAX_INPUT.min(self.input_buffer.capacity());
                if fits && self.input_buffer.push(c).is_ok() {
                    self.io.put_char(c)
                } else {
                    // Buffer full - beep and ignore
                    self.io.put_char('\x07')
                }
            }
        }
    }

    /// Poll for one incoming character and process it.
    ///
    /// Convenience for simple blocking loops. Interrupt- or DMA-driven
    /// transports should feed [`process_char()`](Self::process_char) directly.
    pub fn poll(&mut self) -> Result<(), IO::Error> {
        if let Some(c) = self.io.get_char()? {
            self.process_char(c)?;
        }
        Ok(())
    }

    /// Parse and execute one command line without any I/O.
    ///
    /// Splits on whitespace, resolves the command and checks its argument
    /// count before handing it to the handler.
    pub fn execute_line(&mut self, line: &str) -> Result<Response<C>, TimerError> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(TimerError::CommandNotFound)?;

        let mut args: heapless::Vec<&str, 8> = heapless::Vec::new(); // TODO: Use C::MAX_ARGS
        let limit = C::MAX_ARGS.min(args.capacity());
        for (index, word) in words.enumerate() {
            if index >= limit || args.push(word).is_err() {
                return Err(TimerError::InvalidArgument {
                    arg_index: index,
                    expected: "no further arguments",
                });
            }
        }

        let cmd = commands::find_command(name).ok_or(TimerError::CommandNotFound)?;

        if args.len() < cmd.min_args {
            return Err(TimerError::MissingArgument {
                expected: cmd.min_args,
                received: args.len(),
            });
        }
        if args.len() > cmd.max_args {
            return Err(TimerError::InvalidArgument {
                arg_index: cmd.max_args,
                expected: "no further arguments",
            });
        }

        self.handler.execute(cmd.name, &args)
    }

    /// Get reference to the command handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Get mutable reference to the command handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Get mutable reference to the I/O interface.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Handle Enter key: run the buffered line and print the outcome.
    fn handle_enter(&mut self) -> Result<(), IO::Error> {
        let input = self.input_buffer.clone();
        self.input_buffer.clear();

        self.io.write_str("\r\n")?;

        if !input.trim().is_empty() {
            match self.execute_line(&input) {
                Ok(response) => self.write_formatted_response(&response)?,
                Err(e) => {
                    let mut msg = heapless::String::<128>::new();
                    write!(msg, "Error: {}", e).ok();
                    self.io.write_str(&msg)?;
                    self.io.write_str("\r\n")?;
                }
            }
        }

        self.io.write_str(PROMPT)
    }

    /// Write a response, applying its formatting flags.
    fn write_formatted_response(&mut self, response: &Response<C>) -> Result<(), IO::Error> {
        if response.indent_message {
            for (i, line) in response.message.split("\r\n").enumerate() {
                if i > 0 {
                    self.io.write_str("\r\n")?;
                }
                self.io.write_str("  ")?;
                self.io.write_str(line)?;
            }
        } else {
            self.io.write_str(&response.message)?;
        }

        if response.postfix_newline {
            self.io.write_str("\r\n")?;
        }

        Ok(())
    }
}
