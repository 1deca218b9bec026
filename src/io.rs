//! Transport abstraction for the UART the shell talks over.
//!
//! The transport is split along the two execution contexts:
//! - [`ReceiveControl`] is driven by the receive path. It issues one
//!   single-byte receive request at a time.
//! - [`ResponseChannel`] is driven by the main loop. It writes a whole
//!   response out before returning.
//!
//! On hardware both halves usually wrap the same peripheral, e.g. the RX half
//! enables the RXNE interrupt and the TX half spins on TXE.

/// Response output, used only from the main loop.
pub trait ResponseChannel {
    /// Platform-specific error type
    type Error;

    /// Blocking write of the full response.
    ///
    /// The shell calls this exactly once per dispatched line. Implementations
    /// may spin until the hardware has accepted every byte; the shell imposes
    /// no timeout of its own.
    fn emit(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Receive arming, used from both the interrupt handler and the main loop.
///
/// Arming requests exactly one more byte. The line receiver calls this once
/// per byte it processes, except when it has just completed a line: from then
/// until the dispatcher releases the buffer no byte is solicited, which is
/// what keeps the receiver out of a buffer the dispatcher is reading.
pub trait ReceiveControl {
    /// Request delivery of the next received byte.
    fn arm_receive(&mut self);
}

impl<T: ReceiveControl + ?Sized> ReceiveControl for &mut T {
    fn arm_receive(&mut self) {
        (**self).arm_receive()
    }
}
