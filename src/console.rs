//! Console input: prompting and turning a line into a number.
//!
//! Parsing never panics. Anything that is not a number comes back as
//! `Error::InvalidInput` carrying the offending text, which the CLI prints
//! as a message.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Parse a whole number, ignoring surrounding whitespace.
pub fn parse_integer(line: &str) -> Result<i64> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| Error::InvalidInput {
        input: trimmed.to_string(),
        expected: "a whole number",
    })
}

/// Parse a digit-sequence binary encoding such as `110`.
///
/// Only the number format is checked here; the digits themselves are
/// validated by `convert::decode_binary`.
pub fn parse_encoding(line: &str) -> Result<u128> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| Error::InvalidInput {
        input: trimmed.to_string(),
        expected: "a binary encoding such as 110",
    })
}

/// Parse a temperature. `NaN` and infinities are rejected.
pub fn parse_temperature(line: &str) -> Result<f64> {
    let trimmed = line.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidInput {
            input: trimmed.to_string(),
            expected: "a valid temperature",
        }),
    }
}

/// Print `message` on its own line, then read one line of input.
///
/// The returned line has its trailing newline removed.
///
/// # Errors
/// `Error::Io` if reading or writing fails, `Error::InvalidInput` if the
/// input ends before a line is read.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String> {
    writeln!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InvalidInput {
            input: String::new(),
            expected: "a line of input",
        });
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
