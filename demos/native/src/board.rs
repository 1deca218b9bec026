//! Simulated board that narrates hardware access

use uart_shell::{Board, PinRef};

/// Board backed by in-memory port registers.
///
/// Every hardware call is echoed as a `[hw]` line so the effect of each
/// command is visible next to its response.
#[derive(Debug, Default)]
pub struct ConsoleBoard {
    ports: [u16; 11],
    adc_seed: u32,
}

impl ConsoleBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self, args: core::fmt::Arguments<'_>) {
        print!("[hw] {}\r\n", args);
    }
}

impl Board for ConsoleBoard {
    fn write_pin(&mut self, pin: PinRef, high: bool) {
        let port = &mut self.ports[pin.port.index()];
        if high {
            *port |= pin.mask;
        } else {
            *port &= !pin.mask;
        }
        self.log(format_args!(
            "P{:?}{} <- {}",
            pin.port,
            pin.number(),
            u8::from(high)
        ));
    }

    fn read_pin(&mut self, pin: PinRef) -> bool {
        self.ports[pin.port.index()] & pin.mask != 0
    }

    fn toggle_pin(&mut self, pin: PinRef) {
        self.ports[pin.port.index()] ^= pin.mask;
        self.log(format_args!("P{:?}{} toggled", pin.port, pin.number()));
    }

    fn sample_adc(&mut self, channel: i32) -> u32 {
        // 12-bit reading that drifts between samples
        self.adc_seed = self.adc_seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let value = (self.adc_seed >> 16) & 0x0FFF;
        self.log(format_args!("ADC channel {} sampled", channel));
        value
    }

    fn start_periodic_timer(&mut self, period_ms: i32) {
        self.log(format_args!("timer started, period {} ms", period_ms));
    }

    fn stop_periodic_timer(&mut self) {
        self.log(format_args!("timer stopped"));
    }

    fn system_info(&self) -> &str {
        "STM32 UART Shell v1.0 (host simulation)"
    }
}
