//! Line reception: the buffer the receive interrupt fills and the handoff of
//! completed lines to the main loop.
//!
//! [`LineBuffer`] is the plain state machine. [`LineChannel`] wraps it in a
//! critical-section cell so the interrupt handler and the main loop can share
//! one `static` instance.
//!
//! Ownership follows the receive state:
//!
//! ```text
//!            byte (not \r)          \r
//!   ┌──────────────────┐  ┌─────────────────────┐
//!   │                  ▼  │                     ▼
//!   └──── Receiving ──────┘                LineReady ── claim ──> Dispatching
//!          ▲   │  buffer full                                         │
//!          │   ▼                                                      │
//!          │  Discarding ── \r ──┐                                    │
//!          └─────────────────────┴──────────── reset ─────────────────┘
//! ```
//!
//! The receiver writes only in `Receiving`; the dispatcher reads only in
//! `Dispatching`.

mod channel;

pub use channel::LineChannel;

use crate::config::TERMINATOR;
use core::ops::Deref;

/// Who owns the line buffer, and what the receiver does with the next byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxState {
    /// Receiver owns the buffer and is accumulating a line
    Receiving,

    /// Previous bytes overflowed the buffer; dropping input up to the next
    /// terminator
    Discarding,

    /// A complete line is waiting; the receiver is idle and not armed
    LineReady,

    /// The line has been handed to the dispatcher and not yet released
    Dispatching,
}

/// Result of feeding one received byte to the line buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxEvent {
    /// Byte appended to the current line
    Stored,

    /// Terminator received; the line is ready for dispatch
    LineReady,

    /// Buffer filled without a terminator; the line is dropped
    Overflow,

    /// Byte dropped as part of an overflowed line
    Discarded,

    /// Byte arrived while the dispatcher owns the buffer; ignored
    Rejected,
}

impl RxEvent {
    /// Whether another single-byte receive must be requested after this event.
    ///
    /// Reception stays disarmed once a line is ready; re-arming then belongs
    /// to the dispatcher.
    pub fn needs_rearm(self) -> bool {
        !matches!(self, RxEvent::LineReady | RxEvent::Rejected)
    }
}

/// Fixed-capacity line accumulator with explicit ownership state.
///
/// Holds at most `N - 1` line bytes: the byte that would fill the last slot
/// is treated as overflow, leaving room for the terminator.
#[derive(Debug)]
pub struct LineBuffer<const N: usize> {
    storage: [u8; N],
    index: usize,
    state: RxState,
}

impl<const N: usize> LineBuffer<N> {
    const CAPACITY_CHECK: () = assert!(N >= 2, "line buffer needs room for a byte and a terminator");

    /// Create an empty buffer in `Receiving` state.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        Self {
            storage: [0; N],
            index: 0,
            state: RxState::Receiving,
        }
    }

    /// Buffer capacity in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Current receive state.
    pub fn state(&self) -> RxState {
        self.state
    }

    /// Write index: number of bytes accumulated for the current line.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Bytes accumulated so far (the pending line once `LineReady`).
    pub fn contents(&self) -> &[u8] {
        &self.storage[..self.index]
    }

    /// Feed one received byte.
    pub fn push(&mut self, byte: u8) -> RxEvent {
        match self.state {
            RxState::LineReady | RxState::Dispatching => RxEvent::Rejected,

            RxState::Discarding => {
                if byte == TERMINATOR {
                    self.state = RxState::Receiving;
                }
                RxEvent::Discarded
            }

            RxState::Receiving => {
                if byte == TERMINATOR {
                    self.state = RxState::LineReady;
                    return RxEvent::LineReady;
                }

                self.storage[self.index] = byte;
                self.index += 1;
                if self.index < N {
                    RxEvent::Stored
                } else {
                    self.index = 0;
                    self.state = RxState::Discarding;
                    RxEvent::Overflow
                }
            }
        }
    }

    /// Hand a ready line to the dispatcher.
    ///
    /// Succeeds once per line: the state moves to `Dispatching` and further
    /// calls return `None` until [`reset`](Self::reset).
    pub fn claim(&mut self) -> Option<Line<N>> {
        if self.state != RxState::LineReady {
            return None;
        }
        self.state = RxState::Dispatching;

        let mut line = Line::empty();
        line.bytes[..self.index].copy_from_slice(&self.storage[..self.index]);
        line.len = self.index;
        Some(line)
    }

    /// Return the buffer to the receiver after dispatch.
    ///
    /// Returns `false` (and changes nothing) unless a line is being dispatched.
    pub fn reset(&mut self) -> bool {
        if self.state != RxState::Dispatching {
            return false;
        }
        self.index = 0;
        self.state = RxState::Receiving;
        true
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// A completed line, without its terminator, owned by the dispatcher.
#[derive(Clone)]
pub struct Line<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> Line<N> {
    fn empty() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Line content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl<const N: usize> Deref for Line<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> core::fmt::Debug for Line<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Line").field(&self.as_bytes()).finish()
    }
}

impl<const N: usize> PartialEq<[u8]> for Line<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}
