//! Error types for command handling.
//!
//! A `CommandError` never leaves the dispatcher: it is rendered to its wire
//! text and sent back like any other response. Transport failures are not
//! represented here; they surface as the transport's own error type.

use core::fmt;

/// Command-level failure, reported to the sender as a text line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// First token of the line is not a known command name
    UnknownCommand,

    /// Pin argument missing or naming an unsupported port/pin.
    /// No hardware access is attempted.
    InvalidPin,
}

impl CommandError {
    /// Wire text for this error, without line ending.
    pub const fn message(self) -> &'static str {
        match self {
            CommandError::UnknownCommand => "Unknown command",
            CommandError::InvalidPin => "Invalid pin",
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
