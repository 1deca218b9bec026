//! Capability interface to the hardware the commands act on.
//!
//! The shell never touches registers itself. GPIO, ADC and timer access go
//! through a [`Board`] implementation supplied by the firmware (or by a
//! simulation in tests), so command parsing is independent of the chip.

/// GPIO port identifier, named by its letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
}

impl Port {
    /// Port for its letter (`b'A'`..=`b'K'`).
    pub fn from_letter(letter: u8) -> Option<Self> {
        let port = match letter {
            b'A' => Port::A,
            b'B' => Port::B,
            b'C' => Port::C,
            b'D' => Port::D,
            b'E' => Port::E,
            b'F' => Port::F,
            b'G' => Port::G,
            b'H' => Port::H,
            b'I' => Port::I,
            b'J' => Port::J,
            b'K' => Port::K,
            _ => return None,
        };
        Some(port)
    }

    /// Index of the port, `A` being 0.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single pin: its port and its bit in the port's registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinRef {
    /// Port the pin belongs to
    pub port: Port,

    /// Single-bit mask selecting the pin (`1 << number`)
    pub mask: u16,
}

impl PinRef {
    /// Build a pin reference from port and pin number (0..=15).
    pub fn new(port: Port, number: u8) -> Option<Self> {
        if number > 15 {
            return None;
        }
        Some(Self {
            port,
            mask: 1 << number,
        })
    }

    /// Parse a textual pin name such as `PA5`.
    ///
    /// Format: `P`, a port letter, and exactly one decimal digit. Anything
    /// else (lowercase, missing digit, two-digit pins, trailing characters)
    /// is rejected.
    pub fn parse(name: &[u8]) -> Option<Self> {
        match *name {
            [b'P', letter, digit] if digit.is_ascii_digit() => {
                Self::new(Port::from_letter(letter)?, digit - b'0')
            }
            _ => None,
        }
    }

    /// Pin number within its port.
    pub fn number(self) -> u8 {
        self.mask.trailing_zeros() as u8
    }
}

/// Hardware capabilities the command handlers rely on.
///
/// Every call is synchronous and is assumed to finish (or block acceptably)
/// before the handler returns.
pub trait Board {
    /// Resolve a textual pin name.
    ///
    /// The default accepts port A only (`PA0`..`PA9`); boards wiring up more
    /// ports override this.
    fn resolve_pin(&self, name: &[u8]) -> Option<PinRef> {
        PinRef::parse(name).filter(|pin| pin.port == Port::A)
    }

    /// Drive a pin high (`true`) or low (`false`).
    fn write_pin(&mut self, pin: PinRef, high: bool);

    /// Read the current level of a pin.
    fn read_pin(&mut self, pin: PinRef) -> bool;

    /// Invert the output level of a pin.
    fn toggle_pin(&mut self, pin: PinRef);

    /// Configure `channel`, run one conversion and return the raw result.
    ///
    /// The channel number is passed through unvalidated.
    fn sample_adc(&mut self, channel: i32) -> u32;

    /// Start the periodic timer with the given period in milliseconds.
    ///
    /// The period is passed through unvalidated, including 0 and negative
    /// values; mapping it to a reload value is up to the board.
    fn start_periodic_timer(&mut self, period_ms: i32);

    /// Stop the periodic timer.
    fn stop_periodic_timer(&mut self);

    /// Identification text reported by `get_info`.
    fn system_info(&self) -> &str {
        crate::config::INFO_BANNER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullBoard;

    impl Board for NullBoard {
        fn write_pin(&mut self, _pin: PinRef, _high: bool) {}
        fn read_pin(&mut self, _pin: PinRef) -> bool {
            false
        }
        fn toggle_pin(&mut self, _pin: PinRef) {}
        fn sample_adc(&mut self, _channel: i32) -> u32 {
            0
        }
        fn start_periodic_timer(&mut self, _period_ms: i32) {}
        fn stop_periodic_timer(&mut self) {}
    }

    #[test]
    fn test_parse_pin_name() {
        let pin = PinRef::parse(b"PA5").unwrap();
        assert_eq!(pin.port, Port::A);
        assert_eq!(pin.mask, 1 << 5);
        assert_eq!(pin.number(), 5);

        let pin = PinRef::parse(b"PC0").unwrap();
        assert_eq!(pin.port, Port::C);
        assert_eq!(pin.mask, 1);
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        let cases: [&[u8]; 8] = [b"", b"P", b"PA", b"PAx", b"pa5", b"PA10", b"PA5x", b"PZ1"];
        for name in cases {
            assert_eq!(PinRef::parse(name), None, "{:?}", name);
        }
    }

    #[test]
    fn test_default_resolver_supports_port_a_only() {
        let board = NullBoard;
        assert!(board.resolve_pin(b"PA0").is_some());
        assert!(board.resolve_pin(b"PA9").is_some());
        assert_eq!(board.resolve_pin(b"PB3"), None);
        assert_eq!(board.resolve_pin(b"PC13"), None);
    }

    #[test]
    fn test_default_system_info() {
        assert_eq!(NullBoard.system_info(), "STM32 UART Shell v1.0");
    }

    #[test]
    fn test_pin_number_bounds() {
        assert!(PinRef::new(Port::B, 15).is_some());
        assert_eq!(PinRef::new(Port::B, 16), None);
    }
}
