//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

pub use fixtures::{ArmCounter, MockUart, SimBoard, TimerEvent};
use uart_shell::{LineChannel, RxEvent, Shell};

/// Shell type used throughout the integration tests.
pub type TestShell = Shell<'static, SimBoard, MockUart>;

// ============================================================================
// Shell Creation Helpers
// ============================================================================

/// Create a shell over a fresh line channel, with reception started.
///
/// The channel is leaked to get the `'static` lifetime a firmware `static`
/// would have.
pub fn create_test_shell() -> (TestShell, ArmCounter) {
    create_shell_with_board(SimBoard::new())
}

/// Same as `create_test_shell`, over a caller-supplied board.
pub fn create_shell_with_board(board: SimBoard) -> (TestShell, ArmCounter) {
    let channel: &'static LineChannel = Box::leak(Box::new(LineChannel::new()));
    let mut rx = ArmCounter::new();
    channel.start(&mut rx);
    (Shell::new(channel, board, MockUart::new()), rx)
}

// ============================================================================
// Input Helpers
// ============================================================================

/// Deliver bytes the way the receive interrupt would, one per call.
pub fn receive(shell: &TestShell, rx: &mut ArmCounter, bytes: &[u8]) -> Vec<RxEvent> {
    bytes
        .iter()
        .map(|&b| shell.channel().on_byte(b, rx))
        .collect()
}

/// Receive a command line (terminator appended), run one main-loop pass and
/// return what was written back.
pub fn execute_command(shell: &mut TestShell, rx: &mut ArmCounter, cmd: &str) -> String {
    shell.io_mut().clear_output();

    receive(shell, rx, cmd.as_bytes());
    receive(shell, rx, b"\r");
    shell.poll(rx).unwrap();

    shell.io().output()
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for exp in expected {
        assert!(
            output.contains(exp),
            "Expected '{}' in output, got: {:?}",
            exp,
            output
        );
    }
}

/// Assert that a response is `ADC Value: <digits>\r\n`.
pub fn assert_adc_response(output: &str) {
    let digits = output
        .strip_prefix("ADC Value: ")
        .and_then(|rest| rest.strip_suffix("\r\n"))
        .unwrap_or_else(|| panic!("Malformed ADC response: {:?}", output));
    assert!(
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        "Expected digits in ADC response, got: {:?}",
        output
    );
}
