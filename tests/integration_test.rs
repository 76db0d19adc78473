use binrec_lib::convert::{decode_binary, encode_binary, encode_binary_tail};
use binrec_lib::math::{divide, factorial, is_even};
use binrec_lib::runner::run;
use binrec_lib::{ArithmeticError, Error};

#[test]
fn integration_encoders_agree_and_decode() {
    for n in [0, 1, 2, 6, 255, 1023, 10_000] {
        let recursive = encode_binary(n).expect("encode");
        let tail = encode_binary_tail(n).expect("encode tail");
        assert_eq!(recursive, tail);
        assert_eq!(decode_binary(recursive).expect("decode"), n as u64);
    }
}

#[test]
fn integration_runner_with_library_functions() {
    assert!(!run(5, is_even));
    assert_eq!(run(5, factorial).expect("factorial"), 120);
    assert_eq!(run(5, |x| (1..=x).product::<i64>()), 120);
    assert_eq!(run(6, encode_binary).expect("encode"), 110);
}

#[test]
fn integration_errors_are_values() {
    assert!(matches!(encode_binary(-1), Err(Error::NegativeInput(-1))));
    assert!(matches!(
        divide(10, 0),
        Err(Error::Arithmetic(ArithmeticError::DivisionByZero))
    ));
}
