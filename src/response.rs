//! Response text produced by command handlers.
//!
//! Every dispatched line yields exactly one `Response`, written to the
//! transport in a single `emit` call. Fixed texts are borrowed from flash;
//! texts carrying a value are formatted into a bounded buffer.

use crate::config::{LINE_END, RESPONSE_CAPACITY};
use crate::error::CommandError;
use core::fmt::{self, Write};

/// Text to send back for one dispatched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Fixed text, including its line ending
    Static(&'static str),

    /// Text built at runtime, including its line ending
    Formatted(heapless::String<RESPONSE_CAPACITY>),
}

impl Response {
    /// Response with fixed text.
    pub const fn text(text: &'static str) -> Self {
        Response::Static(text)
    }

    /// Response formatted from arguments.
    ///
    /// Output that does not fit `RESPONSE_CAPACITY` is cut at the first
    /// fragment that overflows. Debug builds assert that it fits.
    pub fn formatted(args: fmt::Arguments<'_>) -> Self {
        let mut msg = heapless::String::new();
        let written = msg.write_fmt(args);
        debug_assert!(written.is_ok(), "response exceeds RESPONSE_CAPACITY");
        Response::Formatted(msg)
    }

    /// Single line of runtime text followed by `\r\n`.
    ///
    /// The text is shortened (on a character boundary) so the line ending
    /// always fits.
    pub fn line(text: &str) -> Self {
        let room = RESPONSE_CAPACITY - LINE_END.len();
        let mut end = text.len().min(room);
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        let mut msg = heapless::String::new();
        let _ = msg.push_str(&text[..end]);
        let _ = msg.push_str(LINE_END);
        Response::Formatted(msg)
    }

    /// Response text.
    pub fn as_str(&self) -> &str {
        match self {
            Response::Static(text) => text,
            Response::Formatted(msg) => msg.as_str(),
        }
    }

    /// Response bytes as they go on the wire.
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }
}

impl From<CommandError> for Response {
    fn from(err: CommandError) -> Self {
        Response::formatted(format_args!("{}{}", err, LINE_END))
    }
}
