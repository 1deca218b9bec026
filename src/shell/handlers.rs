//! Built-in commands and their handlers.
//!
//! Each handler parses its own arguments from the raw tail of the line and
//! talks to the hardware through [`Board`]. Numbers that are missing or
//! malformed come through as 0 and are used as-is; only pin names are
//! validated, since an unresolvable pin has no hardware to act on.

use crate::board::{Board, PinRef};
use crate::config::MAX_COMMAND_NAME;
use crate::error::CommandError;
use crate::response::Response;
use crate::shell::parser::Args;

/// Usage text returned by `help`.
pub const HELP_TEXT: &str = "Available commands:\r\n\
    help            - Show this help message\r\n\
    clear           - Clear the terminal\r\n\
    set_pin <pin> <state> - Set GPIO pin state (0 or 1)\r\n\
    get_pin <pin>   - Get GPIO pin state\r\n\
    toggle_pin <pin> - Toggle GPIO pin\r\n\
    read_adc <channel> - Read ADC value from channel\r\n\
    get_info        - Get system information\r\n\
    start_timer <period> - Start a timer with the given period (ms)\r\n\
    stop_timer      - Stop the timer\r\n";

/// ANSI sequence moving the cursor home and clearing the screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

/// The commands the shell understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `help`: list commands
    Help,
    /// `clear`: clear the terminal
    Clear,
    /// `set_pin <pin> <state>`
    SetPin,
    /// `get_pin <pin>`
    GetPin,
    /// `toggle_pin <pin>`
    TogglePin,
    /// `read_adc <channel>`
    ReadAdc,
    /// `get_info`: identification string
    GetInfo,
    /// `start_timer <period_ms>`
    StartTimer,
    /// `stop_timer`
    StopTimer,
}

impl Command {
    /// All commands, in help order.
    pub const ALL: [Command; 9] = [
        Command::Help,
        Command::Clear,
        Command::SetPin,
        Command::GetPin,
        Command::TogglePin,
        Command::ReadAdc,
        Command::GetInfo,
        Command::StartTimer,
        Command::StopTimer,
    ];

    /// Name the command is invoked by.
    pub const fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Clear => "clear",
            Command::SetPin => "set_pin",
            Command::GetPin => "get_pin",
            Command::TogglePin => "toggle_pin",
            Command::ReadAdc => "read_adc",
            Command::GetInfo => "get_info",
            Command::StartTimer => "start_timer",
            Command::StopTimer => "stop_timer",
        }
    }

    /// Look up a command by exact, case-sensitive name.
    ///
    /// Names longer than `MAX_COMMAND_NAME` never match.
    pub fn from_name(name: &[u8]) -> Option<Self> {
        if name.len() > MAX_COMMAND_NAME {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name().as_bytes() == name)
    }

    /// Run the command against `board`.
    pub fn execute<B: Board>(self, args: Args<'_>, board: &mut B) -> Result<Response, CommandError> {
        match self {
            Command::Help => Ok(Response::text(HELP_TEXT)),
            Command::Clear => Ok(Response::text(CLEAR_SCREEN)),
            Command::SetPin => set_pin(args, board),
            Command::GetPin => get_pin(args, board),
            Command::TogglePin => toggle_pin(args, board),
            Command::ReadAdc => read_adc(args, board),
            Command::GetInfo => Ok(Response::line(board.system_info())),
            Command::StartTimer => start_timer(args, board),
            Command::StopTimer => {
                board.stop_periodic_timer();
                Ok(Response::text("Timer stopped\r\n"))
            }
        }
    }
}

/// Resolve the pin named by the next argument.
fn pin_arg<B: Board>(args: &mut Args<'_>, board: &B) -> Result<PinRef, CommandError> {
    let name = args.next_token().ok_or(CommandError::InvalidPin)?;
    board.resolve_pin(name).ok_or(CommandError::InvalidPin)
}

fn set_pin<B: Board>(mut args: Args<'_>, board: &mut B) -> Result<Response, CommandError> {
    let pin = pin_arg(&mut args, board)?;
    let state = args.next_int();

    board.write_pin(pin, state != 0);
    Ok(Response::text("Pin set successfully\r\n"))
}

fn get_pin<B: Board>(mut args: Args<'_>, board: &mut B) -> Result<Response, CommandError> {
    let pin = pin_arg(&mut args, board)?;
    let level = board.read_pin(pin);

    Ok(Response::formatted(format_args!(
        "Pin state: {}\r\n",
        u8::from(level)
    )))
}

fn toggle_pin<B: Board>(mut args: Args<'_>, board: &mut B) -> Result<Response, CommandError> {
    let pin = pin_arg(&mut args, board)?;

    board.toggle_pin(pin);
    Ok(Response::text("Pin toggled successfully\r\n"))
}

fn read_adc<B: Board>(mut args: Args<'_>, board: &mut B) -> Result<Response, CommandError> {
    let channel = args.next_int();
    let value = board.sample_adc(channel);

    Ok(Response::formatted(format_args!("ADC Value: {}\r\n", value)))
}

fn start_timer<B: Board>(mut args: Args<'_>, board: &mut B) -> Result<Response, CommandError> {
    let period_ms = args.next_int();

    board.start_periodic_timer(period_ms);
    Ok(Response::text("Timer started\r\n"))
}
