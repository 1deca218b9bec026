//! Single-slot handoff between the receive interrupt and the main loop.

use super::{Line, LineBuffer, RxEvent, RxState};
use crate::config::LINE_CAPACITY;
use crate::io::ReceiveControl;
use core::cell::RefCell;
use critical_section::Mutex;

/// Line buffer shared by the receive interrupt and the main loop.
///
/// Meant to live in a `static`:
///
/// ```rust,ignore
/// static RX_LINE: LineChannel = LineChannel::new();
///
/// #[interrupt]
/// fn USART2() {
///     let byte = read_data_register();
///     RX_LINE.on_byte(byte, &mut UartRx);
/// }
/// ```
///
/// Every method takes a short critical section: one byte store, one state
/// change, or one copy of at most `N` bytes. Dispatching the line happens
/// outside of it, on a copy, while the receive state keeps the receiver out
/// of the buffer.
pub struct LineChannel<const N: usize = LINE_CAPACITY> {
    buffer: Mutex<RefCell<LineBuffer<N>>>,
}

impl<const N: usize> LineChannel<N> {
    /// Create an empty channel, ready to receive.
    pub const fn new() -> Self {
        Self {
            buffer: Mutex::new(RefCell::new(LineBuffer::new())),
        }
    }

    /// Arm the first receive at startup.
    ///
    /// Arms whenever the receiver owns the buffer (`Receiving` or
    /// `Discarding`). Does nothing while a line waits for or is held by the
    /// dispatcher; [`release`](Self::release) arms in that case.
    pub fn start<R: ReceiveControl>(&self, rx: &mut R) {
        if matches!(self.state(), RxState::Receiving | RxState::Discarding) {
            rx.arm_receive();
        }
    }

    /// Receive-complete handler: feed one byte and re-arm as needed.
    ///
    /// Called from interrupt context once per delivered byte. Requests the
    /// next byte unless this one completed a line (or was rejected).
    pub fn on_byte<R: ReceiveControl>(&self, byte: u8, rx: &mut R) -> RxEvent {
        let event = critical_section::with(|cs| self.buffer.borrow_ref_mut(cs).push(byte));

        #[cfg(feature = "defmt")]
        match event {
            RxEvent::Overflow => defmt::warn!("rx: line exceeds {=usize} bytes, discarding", N),
            RxEvent::Rejected => defmt::warn!("rx: byte {=u8:#x} while line pending", byte),
            _ => {}
        }

        if event.needs_rearm() {
            rx.arm_receive();
        }
        event
    }

    /// Whether a completed line is waiting for the dispatcher.
    pub fn is_line_ready(&self) -> bool {
        self.state() == RxState::LineReady
    }

    /// Current receive state.
    pub fn state(&self) -> RxState {
        critical_section::with(|cs| self.buffer.borrow_ref(cs).state())
    }

    /// Bytes received so far for the current line.
    pub fn pending_len(&self) -> usize {
        critical_section::with(|cs| self.buffer.borrow_ref(cs).index())
    }

    /// Take the completed line, once.
    ///
    /// Returns `None` if no line is ready or it was already taken. After a
    /// successful take the receiver stays disarmed until [`release`](Self::release).
    pub fn take_line(&self) -> Option<Line<N>> {
        critical_section::with(|cs| self.buffer.borrow_ref_mut(cs).claim())
    }

    /// Return the buffer to the receiver and request the next byte.
    ///
    /// Returns `false` without arming if no line was taken.
    pub fn release<R: ReceiveControl>(&self, rx: &mut R) -> bool {
        let released = critical_section::with(|cs| self.buffer.borrow_ref_mut(cs).reset());
        if released {
            rx.arm_receive();
        }
        released
    }
}

impl<const N: usize> Default for LineChannel<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for LineChannel<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineChannel")
            .field("capacity", &N)
            .field("state", &self.state())
            .field("pending_len", &self.pending_len())
            .finish()
    }
}
