//! Integer helpers used as runner payloads and CLI commands.

use crate::error::{ArithmeticError, Error, Result};

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL: i64 = 34;

pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Product of `1..=n`; `factorial(0) == 1`.
///
/// # Errors
/// `Error::NegativeInput` for `n < 0`, `ArithmeticError::Overflow` above
/// `MAX_FACTORIAL`.
pub fn factorial(n: i64) -> Result<u128> {
    let n = u128::try_from(n).map_err(|_| Error::NegativeInput(n))?;
    (1..=n).try_fold(1u128, |acc, i| {
        acc.checked_mul(i).ok_or(Error::Arithmetic(ArithmeticError::Overflow {
            operation: "factorial",
        }))
    })
}

/// Primality by trial division. Numbers below 2 are not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if is_even(n) {
        return false;
    }
    let mut i = 3i64;
    // i <= n / i avoids squaring past i64::MAX
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Integer division truncating toward zero.
pub fn divide(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero.into());
    }
    a.checked_div(b).ok_or(Error::Arithmetic(ArithmeticError::Overflow {
        operation: "division",
    }))
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_even() {
        assert!(is_even(0));
        assert!(is_even(-4));
        assert!(!is_even(5));
        assert!(!is_even(-3));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
        assert!(factorial(MAX_FACTORIAL).is_ok());
        assert!(factorial(MAX_FACTORIAL + 1).unwrap_err().is_arithmetic());
        assert!(matches!(factorial(-1), Err(Error::NegativeInput(-1))));
    }

    #[test]
    fn test_is_prime_boundaries() {
        for n in [-7, -1, 0, 1, 4, 9, 15, 25, 49, 91] {
            assert!(!is_prime(n), "{} should not be prime", n);
        }
        for n in [2, 3, 5, 7, 11, 13, 97, 7919] {
            assert!(is_prime(n), "{} should be prime", n);
        }
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10, 2).unwrap(), 5);
        assert_eq!(divide(-7, 2).unwrap(), -3);
        let err = divide(10, 0).unwrap_err();
        assert!(matches!(err, Error::Arithmetic(ArithmeticError::DivisionByZero)));
        assert!(divide(i64::MIN, -1).unwrap_err().is_arithmetic());
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }
}
