//! Test fixtures and utilities for uart-shell testing.
//!
//! Provides:
//! - `SimBoard`: Simulated GPIO/ADC/timer implementing `Board`
//! - `MockUart`: Response capture implementing `ResponseChannel`
//! - `ArmCounter`: Counts receive requests, implementing `ReceiveControl`

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use uart_shell::{Board, PinRef, ReceiveControl, ResponseChannel};

// ============================================================================
// SimBoard - Simulated Hardware
// ============================================================================

/// Timer activity recorded by `SimBoard`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    Started(i32),
    Stopped,
}

/// Simulated board.
///
/// Keeps one 16-bit output register per port and returns a deterministic ADC
/// reading per channel. Every hardware call is counted so tests can assert
/// that rejected commands never reach the hardware.
#[derive(Debug, Default)]
pub struct SimBoard {
    /// Output register per port (A..K)
    pub ports: [u16; 11],

    /// Channels sampled, in order
    pub adc_reads: Vec<i32>,

    /// Timer starts/stops, in order
    pub timer_log: Vec<TimerEvent>,

    /// Accept every port in `resolve_pin`, not just port A
    pub all_ports: bool,

    /// Number of pin writes/toggles
    pub pin_writes: usize,
}

impl SimBoard {
    /// Create a board with every pin low.
    pub fn new() -> Self {
        Self::default()
    }

    /// Board whose resolver accepts ports A through K.
    pub fn with_all_ports() -> Self {
        Self {
            all_ports: true,
            ..Self::default()
        }
    }

    /// Current level of `PA<n>`.
    pub fn pa(&self, n: u8) -> bool {
        self.ports[0] & (1 << n) != 0
    }

    /// Reading the simulated ADC returns for `channel`.
    pub fn adc_value(channel: i32) -> u32 {
        (channel as u32).wrapping_mul(257).wrapping_add(100) & 0x0FFF
    }

    /// Whether the timer is currently running.
    pub fn timer_running(&self) -> bool {
        matches!(self.timer_log.last(), Some(TimerEvent::Started(_)))
    }
}

impl Board for SimBoard {
    fn resolve_pin(&self, name: &[u8]) -> Option<PinRef> {
        let pin = PinRef::parse(name)?;
        if self.all_ports || pin.port == uart_shell::Port::A {
            Some(pin)
        } else {
            None
        }
    }

    fn write_pin(&mut self, pin: PinRef, high: bool) {
        self.pin_writes += 1;
        let port = &mut self.ports[pin.port.index()];
        if high {
            *port |= pin.mask;
        } else {
            *port &= !pin.mask;
        }
    }

    fn read_pin(&mut self, pin: PinRef) -> bool {
        self.ports[pin.port.index()] & pin.mask != 0
    }

    fn toggle_pin(&mut self, pin: PinRef) {
        self.pin_writes += 1;
        self.ports[pin.port.index()] ^= pin.mask;
    }

    fn sample_adc(&mut self, channel: i32) -> u32 {
        self.adc_reads.push(channel);
        Self::adc_value(channel)
    }

    fn start_periodic_timer(&mut self, period_ms: i32) {
        self.timer_log.push(TimerEvent::Started(period_ms));
    }

    fn stop_periodic_timer(&mut self) {
        self.timer_log.push(TimerEvent::Stopped);
    }
}

// ============================================================================
// MockUart - Response Capture
// ============================================================================

/// Mock transmit side of the UART.
///
/// Each `emit` is stored as a separate entry so tests can check that a line
/// produced exactly one write.
#[derive(Debug, Default)]
pub struct MockUart {
    emits: Vec<Vec<u8>>,
}

impl MockUart {
    /// Create new MockUart with nothing captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `emit` call so far, as strings.
    pub fn responses(&self) -> Vec<String> {
        self.emits
            .iter()
            .map(|e| String::from_utf8_lossy(e).into_owned())
            .collect()
    }

    /// Get captured output as one string.
    pub fn output(&self) -> String {
        self.responses().concat()
    }

    /// Number of `emit` calls.
    pub fn emit_count(&self) -> usize {
        self.emits.len()
    }

    /// Clear captured output.
    pub fn clear_output(&mut self) {
        self.emits.clear();
    }
}

impl ResponseChannel for MockUart {
    type Error = ();

    fn emit(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.emits.push(bytes.to_vec());
        Ok(())
    }
}

// ============================================================================
// ArmCounter - Receive Request Tracking
// ============================================================================

/// Counts single-byte receive requests.
///
/// Clones share the count, so the "interrupt" side and the main loop can
/// each hold one, as the RX peripheral handle would be shared on hardware.
#[derive(Debug, Clone, Default)]
pub struct ArmCounter {
    count: Rc<Cell<usize>>,
}

impl ArmCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive requests issued so far.
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl ReceiveControl for ArmCounter {
    fn arm_receive(&mut self) {
        self.count.set(self.count.get() + 1);
    }
}
