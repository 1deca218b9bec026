//! Shared library code for the native demos
//!
//! Host stand-ins for the pieces firmware would provide: the terminal plays
//! the UART and a printing board plays the hardware.

pub mod board;
pub mod io;

pub use board::ConsoleBoard;
pub use io::{NoopReceive, RawModeGuard, StdoutChannel};
