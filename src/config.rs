//! Compile-time configuration for buffer sizing and fixed wire text.
//!
//! There are no configuration files or environment variables: everything the
//! shell needs is a constant chosen when the firmware is built. Firmware that
//! wants a different line capacity picks it through the const parameter of
//! [`LineChannel`](crate::line::LineChannel) instead of editing these values.

/// Default capacity of the line buffer, in bytes.
///
/// A line may hold at most `LINE_CAPACITY - 1` bytes before its terminator.
pub const LINE_CAPACITY: usize = 100;

/// Longest command name that can match a known command.
pub const MAX_COMMAND_NAME: usize = 19;

/// Byte that ends a line on the wire.
pub const TERMINATOR: u8 = b'\r';

/// Line ending appended to every single-line response.
pub const LINE_END: &str = "\r\n";

/// Capacity of a formatted (non-static) response, in bytes.
pub const RESPONSE_CAPACITY: usize = 64;

/// Identification string reported by `get_info` unless the board overrides it.
pub const INFO_BANNER: &str = "STM32 UART Shell v1.0";
