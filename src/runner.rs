//! Passing functions as values.

/// Apply `f` to `n` and hand back whatever it returns.
///
/// Works with function items, non-capturing closures and closures that
/// capture their environment:
///
/// ```
/// use binrec_lib::runner::run;
///
/// assert!(!run(5, |x| x % 2 == 0));
/// let offset = 10;
/// assert_eq!(run(5, |x| x + offset), 15);
/// ```
pub fn run<T, F>(n: i64, f: F) -> T
where
    F: FnOnce(i64) -> T,
{
    f(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::encode_binary_tail;
    use crate::math::is_even;

    fn factorial(x: i64) -> i64 {
        (1..=x).product()
    }

    #[test]
    fn test_run_is_even() {
        assert!(!run(5, is_even));
        assert!(run(8, is_even));
    }

    #[test]
    fn test_run_factorial() {
        assert_eq!(run(5, factorial), 120);
    }

    #[test]
    fn test_run_encoder() {
        assert_eq!(run(6, encode_binary_tail).unwrap(), 110);
    }

    #[test]
    fn test_run_moves_captured_state() {
        let label = String::from("n=");
        let out = run(7, move |x| format!("{}{}", label, x));
        assert_eq!(out, "n=7");
    }
}
