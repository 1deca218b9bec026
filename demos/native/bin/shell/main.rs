//! Runs the UART shell against the terminal.
//!
//! Keystrokes are delivered to the line channel one byte at a time, exactly
//! as the receive interrupt would deliver them, and the main loop polls the
//! shell after each byte.
//!
//! ```bash
//! cargo run --bin shell
//! ```
//!
//! Type `help` and press Enter. Ctrl+C or Ctrl+D quits.

use native_demos::{ConsoleBoard, NoopReceive, RawModeGuard, StdoutChannel};
use std::io::{self, Read, Write};
use uart_shell::{LineChannel, Shell};

static LINE: LineChannel = LineChannel::new();

const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("uart-shell native demo");
    println!("======================\n");
    println!("Type 'help' for commands, Ctrl+C to quit.\n");

    let _raw = RawModeGuard::new()?;

    let mut rx = NoopReceive;
    LINE.start(&mut rx);
    let mut shell = Shell::new(&LINE, ConsoleBoard::new(), StdoutChannel);

    let mut stdin = io::stdin();
    loop {
        let mut buf = [0u8; 1];
        match stdin.read(&mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let byte = buf[0];
                if byte == CTRL_C || byte == CTRL_D {
                    break;
                }

                // The firmware does not echo; echo locally so the line is visible
                local_echo(byte)?;

                LINE.on_byte(byte, &mut rx);
                shell.poll(&mut rx)?;
            }
            Err(e) => {
                eprint!("\r\nError reading input: {}\r\n", e);
                break;
            }
        }
    }

    print!("\r\n");
    Ok(())
}

fn local_echo(byte: u8) -> io::Result<()> {
    let mut out = io::stdout().lock();
    match byte {
        b'\r' => out.write_all(b"\r\n")?,
        0x20..=0x7E => out.write_all(&[byte])?,
        _ => {}
    }
    out.flush()
}
