//! Response type for operator commands.
//!
//! `Response` represents successful execution with a message and formatting
//! flags. Command failures return `Err(TimerError)`, not `Response`.

use crate::config::ConsoleConfig;
use crate::error::TimerError;
use core::fmt::Write;
use core::marker::PhantomData;

/// Command execution response with message and formatting flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<C: ConsoleConfig> {
    /// Response message, truncated to `C::MAX_RESPONSE`
    pub message: heapless::String<256>, // TODO: Use C::MAX_RESPONSE when generic_const_exprs stabilizes

    /// Indent output (2 spaces per line)
    pub indent_message: bool,

    /// Add newline after message
    pub postfix_newline: bool,

    _config: PhantomData<C>,
}

impl<C: ConsoleConfig> Response<C> {
    /// Create success response with default formatting.
    pub fn success(message: &str) -> Self {
        let mut response = Self::empty();
        response.push_str(message);
        response
    }

    /// Response with an empty message, to be filled with `write!`.
    pub fn empty() -> Self {
        Self {
            message: heapless::String::new(),
            indent_message: false,
            postfix_newline: true,
            _config: PhantomData,
        }
    }

    /// Append text, dropping whatever doesn't fit.
    pub fn push_str(&mut self, text: &str) {
        let limit = self.limit();
        for c in text.chars() {
            if self.message.len() + c.len_utf8() > limit {
                break;
            }
            let _ = self.message.push(c);
        }
    }

    /// Append `text` whole, or leave the message unchanged and return
    /// `BufferFull` if it doesn't fit.
    pub fn try_push_str(&mut self, text: &str) -> Result<(), TimerError> {
        if text.len() > self.remaining() {
            return Err(TimerError::BufferFull);
        }
        self.push_str(text);
        Ok(())
    }

    /// Bytes that can still be appended before the `C::MAX_RESPONSE` limit.
    pub fn remaining(&self) -> usize {
        self.limit().saturating_sub(self.message.len())
    }

    fn limit(&self) -> usize {
        C::MAX_RESPONSE.min(self.message.capacity())
    }

    /// Append `\r\n` as a line separator.
    pub fn push_line_break(&mut self) {
        self.push_str("\r\n");
    }

    /// Builder method to indent response (2 spaces per line).
    pub fn indented(mut self) -> Self {
        self.indent_message = true;
        self
    }
}

impl<C: ConsoleConfig> Write for Response<C> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
