//! Tokenizing a received line into a command name and its arguments.
//!
//! Lines are raw bytes; nothing here assumes UTF-8. Tokens are separated by
//! runs of ASCII whitespace (space, tab, LF, VT, FF, CR), the same set a
//! C-style `%s` scan would skip.

/// A dispatched line split into command name and raw argument tail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CommandRecord<'a> {
    /// First whitespace-delimited token (empty for a blank line)
    pub name: &'a [u8],

    /// Everything after the name, leading whitespace included
    pub args: Args<'a>,
}

impl<'a> CommandRecord<'a> {
    /// Split a line into its command name and argument tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use uart_shell::shell::parser::CommandRecord;
    ///
    /// let record = CommandRecord::parse(b"  set_pin PA5 1");
    /// assert_eq!(record.name, b"set_pin");
    /// assert_eq!(record.args.as_bytes(), b" PA5 1");
    /// ```
    pub fn parse(line: &'a [u8]) -> Self {
        let mut args = Args::new(line);
        let name = args.next_token().unwrap_or(&[]);
        Self { name, args }
    }
}

/// Cursor over the unparsed remainder of a line.
///
/// Handlers pull what they need from it; missing values are not errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Args<'a> {
    rest: &'a [u8],
}

impl<'a> Args<'a> {
    /// Cursor over `rest`.
    pub const fn new(rest: &'a [u8]) -> Self {
        Self { rest }
    }

    /// Unconsumed bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.rest
    }

    /// Next whitespace-delimited token, or `None` at end of line.
    pub fn next_token(&mut self) -> Option<&'a [u8]> {
        let start = self.rest.iter().position(|&b| !is_space(b))?;
        let tail = &self.rest[start..];
        let end = tail.iter().position(|&b| is_space(b)).unwrap_or(tail.len());

        self.rest = &tail[end..];
        Some(&tail[..end])
    }

    /// Next token read as a decimal integer.
    ///
    /// A missing token, or one that does not start with a number, yields 0.
    /// Callers get the zero and pass it on unchanged: `read_adc` without a
    /// channel samples channel 0, `start_timer` without a period starts the
    /// timer with period 0.
    pub fn next_int(&mut self) -> i32 {
        self.next_token().and_then(parse_int).unwrap_or(0)
    }
}

/// Leading decimal integer of a token.
///
/// Accepts an optional sign followed by digits and ignores whatever follows
/// them (`"12ms"` is 12). Returns `None` when there are no digits. Values
/// beyond the `i32` range saturate.
pub fn parse_int(token: &[u8]) -> Option<i32> {
    let (negative, digits) = match token {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, token),
    };

    let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }

    let magnitude = digits[..len].iter().fold(0i64, |acc, &d| {
        (acc * 10 + i64::from(d - b'0')).min(i64::from(i32::MAX) + 1)
    });
    let value = if negative { -magnitude } else { magnitude };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// ASCII whitespace as recognized by C `isspace`.
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
