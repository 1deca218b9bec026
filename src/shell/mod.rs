//! Main-loop side of the shell: command dispatch and the re-arm protocol.
//!
//! The interrupt handler only fills the [`LineChannel`]. Everything else
//! (tokenizing, running the handler, writing the response, handing the buffer
//! back) happens in [`Shell::poll`], called from the main loop.

use crate::board::Board;
use crate::config::LINE_CAPACITY;
use crate::error::CommandError;
use crate::io::{ReceiveControl, ResponseChannel};
use crate::line::LineChannel;
use crate::response::Response;

// Sub-modules
pub mod handlers;
pub mod parser;

// Re-export key types
pub use handlers::Command;
pub use parser::{Args, CommandRecord};

/// Shell orchestration struct.
///
/// Owns the board capabilities and the response channel, and borrows the
/// line channel it shares with the receive interrupt.
///
/// Generic over:
/// - `'a`: Lifetime of the line channel (typically `'static`)
/// - `B`: Board implementation
/// - `IO`: ResponseChannel implementation
/// - `N`: Line buffer capacity
pub struct Shell<'a, B, IO, const N: usize = LINE_CAPACITY>
where
    B: Board,
    IO: ResponseChannel,
{
    /// Line buffer shared with the receive interrupt
    channel: &'a LineChannel<N>,

    /// Hardware capabilities
    board: B,

    /// Response output
    io: IO,
}

impl<'a, B, IO, const N: usize> core::fmt::Debug for Shell<'a, B, IO, N>
where
    B: Board,
    IO: ResponseChannel,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shell")
            .field("channel", self.channel)
            .finish_non_exhaustive()
    }
}

impl<'a, B, IO, const N: usize> Shell<'a, B, IO, N>
where
    B: Board,
    IO: ResponseChannel,
{
    /// Create a shell over a line channel, a board and a response channel.
    pub fn new(channel: &'a LineChannel<N>, board: B, io: IO) -> Self {
        Self { channel, board, io }
    }

    /// Service a pending line, if any.
    ///
    /// When the receiver has completed a line: take it, dispatch it, write
    /// the response, then release the buffer and re-arm reception through
    /// `rx`. The buffer is released even if writing the response failed; the
    /// write error is returned afterwards.
    ///
    /// Returns `Ok(true)` if a line was dispatched, `Ok(false)` if none was
    /// pending.
    pub fn poll<R: ReceiveControl>(&mut self, rx: &mut R) -> Result<bool, IO::Error> {
        let Some(line) = self.channel.take_line() else {
            return Ok(false);
        };

        let result = self.dispatch(&line);
        self.channel.release(rx);
        result.map(|()| true)
    }

    /// Dispatch one line (without terminator) and write its response.
    ///
    /// The line ends at its first NUL byte; anything after it is ignored.
    /// Exactly one `emit` call is made, whether the command succeeded,
    /// failed, or was not recognized.
    pub fn dispatch(&mut self, line: &[u8]) -> Result<(), IO::Error> {
        let line = line.split(|&b| b == 0).next().unwrap_or(&[]);
        let response = self.execute(line).unwrap_or_else(Response::from);
        self.io.emit(response.as_bytes())
    }

    /// Route a line to its handler.
    fn execute(&mut self, line: &[u8]) -> Result<Response, CommandError> {
        let record = CommandRecord::parse(line);

        let Some(command) = Command::from_name(record.name) else {
            #[cfg(feature = "defmt")]
            defmt::debug!("shell: unknown command {=[u8]:a}", record.name);
            return Err(CommandError::UnknownCommand);
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("shell: {} args={=[u8]:a}", command, record.args.as_bytes());

        let result = command.execute(record.args, &mut self.board);

        #[cfg(feature = "defmt")]
        if let Err(err) = &result {
            defmt::debug!("shell: {} failed: {}", command, err);
        }

        result
    }

    /// Line channel this shell services.
    pub fn channel(&self) -> &'a LineChannel<N> {
        self.channel
    }

    /// Get reference to the board.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Get mutable reference to the board.
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Get reference to the response channel.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Get mutable reference to the response channel.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }
}
