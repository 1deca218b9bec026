//! Terminal-backed transport for the native demos

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, Write};
use uart_shell::{ReceiveControl, ResponseChannel};

// =============================================================================
// Terminal Raw Mode Guard
// =============================================================================

/// RAII guard that enables raw terminal mode on creation and restores on drop.
///
/// Raw mode hands every keystroke over as it is typed, and Enter arrives as
/// `\r`, the same byte a serial terminal sends.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

// =============================================================================
// Transport
// =============================================================================

/// Transmit side: responses go straight to stdout.
#[derive(Debug, Default)]
pub struct StdoutChannel;

impl ResponseChannel for StdoutChannel {
    type Error = io::Error;

    fn emit(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let mut out = io::stdout().lock();
        out.write_all(bytes)?;
        out.flush()
    }
}

/// Receive side: stdin is read in a blocking loop, so there is nothing to arm.
#[derive(Debug, Default)]
pub struct NoopReceive;

impl ReceiveControl for NoopReceive {
    fn arm_receive(&mut self) {}
}
