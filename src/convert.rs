//! Binary encoding in "digit-sequence" form.
//!
//! A non-negative integer is encoded as a decimal number whose digits are the
//! binary digits of the input, most significant first: `6` becomes `110`.
//! Two encoders produce the same result:
//!
//! - `encode_binary` recurses once per bit, building the number on the way
//!   back up.
//! - `encode_binary_tail` carries a multiplier and an accumulated result
//!   forward. Rust does not promise tail-call elimination, so it runs as a
//!   loop in constant stack space.
//!
//! The result is `u128`, which holds up to 39 digits, so every input below
//! `2^39` encodes. Larger inputs fail with an overflow error instead of
//! wrapping. Negative inputs are rejected.

use tracing::trace;

use crate::error::{ArithmeticError, Error, Result};

/// Largest input whose encoding fits in a `u128` (39 binary ones).
pub const MAX_ENCODABLE: i64 = (1 << 39) - 1;

const OVERFLOW: ArithmeticError = ArithmeticError::Overflow {
    operation: "binary encoding",
};

/// Encode `n` recursively.
///
/// `encode_binary(0) == 0`, otherwise `encode_binary(n / 2) * 10 + n % 2`.
///
/// # Errors
/// - `Error::NegativeInput` when `n < 0`.
/// - `ArithmeticError::Overflow` when `n > MAX_ENCODABLE`.
pub fn encode_binary(n: i64) -> Result<u128> {
    let n = non_negative(n)?;
    encode_recursive(n)
}

fn encode_recursive(n: u64) -> Result<u128> {
    if n == 0 {
        return Ok(0);
    }
    let higher = encode_recursive(n / 2)?;
    let encoded = higher
        .checked_mul(10)
        .and_then(|v| v.checked_add(u128::from(n % 2)))
        .ok_or(OVERFLOW)?;
    trace!(n, encoded, "encode step");
    Ok(encoded)
}

/// Encode `n` with the accumulator form, starting from `multiplier = 1` and
/// `accumulated = 0`. Always agrees with `encode_binary`.
pub fn encode_binary_tail(n: i64) -> Result<u128> {
    encode_binary_tail_with(n, 1, 0)
}

/// Accumulator form with explicit starting values.
///
/// Each step adds `(n % 2) * multiplier` to `accumulated`, halves `n` and
/// multiplies `multiplier` by ten. When `n` reaches zero the accumulated value
/// is returned, so `encode_binary_tail_with(0, m, acc) == acc`.
///
/// The multiplier is only advanced while bits remain, so it never overflows
/// for an encoding that itself fits.
pub fn encode_binary_tail_with(
    n: i64,
    mut multiplier: u128,
    mut accumulated: u128,
) -> Result<u128> {
    let mut n = non_negative(n)?;
    while n != 0 {
        let bit = u128::from(n % 2);
        accumulated = bit
            .checked_mul(multiplier)
            .and_then(|v| accumulated.checked_add(v))
            .ok_or(OVERFLOW)?;
        n /= 2;
        if n != 0 {
            multiplier = multiplier.checked_mul(10).ok_or(OVERFLOW)?;
        }
        trace!(n, multiplier, accumulated, "tail step");
    }
    Ok(accumulated)
}

/// Decode a digit-sequence encoding back into the number it represents.
///
/// # Errors
/// `Error::InvalidArgument` if any decimal digit is neither 0 nor 1.
pub fn decode_binary(encoded: u128) -> Result<u64> {
    let mut rest = encoded;
    let mut value = 0u64;
    let mut position = 0u32;
    while rest != 0 {
        match rest % 10 {
            0 => {}
            1 => value |= 1u64 << position,
            digit => {
                return Err(Error::InvalidArgument(format!(
                    "{} is not a binary encoding (found digit {})",
                    encoded, digit
                )));
            }
        }
        rest /= 10;
        position += 1;
    }
    Ok(value)
}

fn non_negative(n: i64) -> Result<u64> {
    u64::try_from(n).map_err(|_| Error::NegativeInput(n))
}
