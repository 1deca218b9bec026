//! # uart-shell
//!
//! Interrupt-driven serial command shell for microcontrollers, with zero heap
//! allocation.
//!
//! **Key pieces:**
//! - **Line receiver** - one byte per receive interrupt into a shared,
//!   fixed-capacity buffer, with overflow handling
//! - **Single-slot handoff** - a completed line is handed to the main loop
//!   exactly once; reception stays disarmed until it is released
//! - **Command dispatcher** - first-word routing to nine built-in commands,
//!   exactly one response per line
//! - **Capability interface** - GPIO, ADC and timer access behind the
//!   [`Board`] trait, so the core runs against simulated hardware on a host
//!
//! ## Wiring
//!
//! ```rust,ignore
//! static RX_LINE: LineChannel = LineChannel::new();
//!
//! #[interrupt]
//! fn USART2() {
//!     RX_LINE.on_byte(read_rx_byte(), &mut UartRx);
//! }
//!
//! #[entry]
//! fn main() -> ! {
//!     let (board, tx) = init_hardware();
//!     let mut shell = Shell::new(&RX_LINE, board, tx);
//!     RX_LINE.start(&mut UartRx);
//!     loop {
//!         shell.poll(&mut UartRx).ok();
//!     }
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `defmt` - Log receiver and dispatcher events over defmt
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod io;

pub mod error;

// Capability interface
pub mod board;

pub mod response;

// Receive side (interrupt context)
pub mod line;

// Dispatch side (main loop)
pub mod shell;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Transport
pub use io::{ReceiveControl, ResponseChannel};

// Error types
pub use error::CommandError;

// Hardware capabilities
pub use board::{Board, PinRef, Port};

// Line reception
pub use line::{Line, LineBuffer, LineChannel, RxEvent, RxState};

pub use response::Response;

// Shell types
pub use shell::{Command, Shell};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
