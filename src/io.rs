//! Operator transport for the timer console.
//!
//! The console only ever runs in foreground context, never from the tick
//! interrupt, so a `CharIo` may share a UART with logging as long as the
//! platform serializes the two.

/// Byte-stream link to the operator (UART, USB CDC, semihosting, stdio).
pub trait CharIo {
    /// Transport error
    type Error;

    /// Next typed character, or `Ok(None)` when nothing is pending.
    ///
    /// Must not block; [`Console::poll`](crate::console::Console::poll) is
    /// called from the same loop that services timer commands.
    fn get_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Queue one character of console output (echo, bell, response text).
    fn put_char(&mut self, c: char) -> Result<(), Self::Error>;

    /// Queue a whole response line or prompt.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        s.chars().try_for_each(|c| self.put_char(c))
    }
}
