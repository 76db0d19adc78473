//! Binrec: binary encoding, a function runner and a few integer helpers
//! behind a small CLI. `src/main.rs` only calls `run()`; `execute()` runs a
//! single command against any reader/writer pair.

pub mod console;
pub mod convert;
pub mod error;
pub mod math;
pub mod runner;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use crate::error::{ArithmeticError, Error, Result};

use crate::console::{parse_encoding, parse_integer, parse_temperature, prompt};
use crate::convert::{decode_binary, encode_binary, encode_binary_tail};
use crate::math::{celsius_to_fahrenheit, divide, factorial, is_even, is_prime};
use crate::runner::run as run_with;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Every value argument is optional: when it is left out the command asks
/// for it on the console.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a number in binary using plain recursion
    Binary {
        /// Number to encode (prompted for when omitted)
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
    },
    /// Write a number in binary using the accumulator (tail-recursive) form
    BinaryTail {
        /// Number to encode (prompted for when omitted)
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
    },
    /// Turn a binary digit sequence such as 110 back into a number
    Decode {
        /// Binary digits such as 110 (prompted for when omitted)
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
    },
    /// Check whether a number is even
    Even {
        /// Number to check (prompted for when omitted)
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
    },
    /// Compute the factorial of a number
    Factorial {
        /// Number whose factorial to compute (prompted for when omitted)
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
    },
    /// Check whether a number is prime
    Prime {
        /// Number to check (prompted for when omitted)
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
    },
    /// Convert a Celsius temperature to Fahrenheit
    Celsius {
        /// Temperature in degrees Celsius (prompted for when omitted)
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
    },
    /// Integer division
    Divide {
        /// Number to divide (prompted for when omitted)
        #[arg(allow_negative_numbers = true)]
        dividend: Option<String>,
        /// Number to divide by (prompted for when omitted)
        #[arg(allow_negative_numbers = true)]
        divisor: Option<String>,
    },
}

/// Run the Binrec CLI.
///
/// Parses arguments, sets up logging, executes the command against the
/// process's stdin/stdout and prints the result line. Errors are printed to
/// stderr as `error: <message>` and turn into a failing exit code; no input
/// makes the process panic.
///
/// ```no_run
/// fn main() -> std::process::ExitCode {
///     binrec_lib::run()
/// }
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(command = ?cli.command, "parsed command");

    let result = {
        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        execute(cli.command, &mut input, &mut output)
    };

    ExitCode::from(report(result, &mut io::stdout(), &mut io::stderr()))
}

/// Print the outcome of a command and return the process exit code.
///
/// A result line goes to `out` and gives 0. An error goes to `err` as a
/// single `error: <message>` line and gives 1.
pub fn report<O: Write, E: Write>(
    result: Result<String>,
    out: &mut O,
    err: &mut E,
) -> u8 {
    match result {
        Ok(line) => {
            let _ = writeln!(out, "{}", line);
            0
        }
        Err(e) => {
            debug!(error = %e, arithmetic = e.is_arithmetic(), "command failed");
            let _ = writeln!(err, "error: {}", e);
            1
        }
    }
}

/// Execute one command and return the line to print.
///
/// Missing values are prompted for on `output` and read from `input`.
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    match command {
        Command::Binary { value } => {
            let n = parse_integer(&value_or_prompt(value, input, output, "Enter number:")?)?;
            Ok(format!("{} written on binary as {}", n, encode_binary(n)?))
        }
        Command::BinaryTail { value } => {
            let n = parse_integer(&value_or_prompt(value, input, output, "Enter number:")?)?;
            Ok(format!("{} written on binary as {}", n, run_with(n, encode_binary_tail)?))
        }
        Command::Decode { value } => {
            let encoded = parse_encoding(&value_or_prompt(value, input, output, "Enter binary digits:")?)?;
            Ok(format!("{} decoded from binary is {}", encoded, decode_binary(encoded)?))
        }
        Command::Even { value } => {
            let n = parse_integer(&value_or_prompt(value, input, output, "Enter number:")?)?;
            Ok(format!("{} is even: {}", n, run_with(n, is_even)))
        }
        Command::Factorial { value } => {
            let n = parse_integer(&value_or_prompt(value, input, output, "Enter number:")?)?;
            Ok(format!("factorial of {} is: {}", n, run_with(n, factorial)?))
        }
        Command::Prime { value } => {
            let n = parse_integer(&value_or_prompt(value, input, output, "Enter number to check:")?)?;
            Ok(format!("{} is prime: {}", n, is_prime(n)))
        }
        Command::Celsius { value } => {
            let c = parse_temperature(&value_or_prompt(value, input, output, "Enter temperature:")?)?;
            Ok(format!("{} C° = {} F°", c, celsius_to_fahrenheit(c)))
        }
        Command::Divide { dividend, divisor } => {
            let a = parse_integer(&value_or_prompt(dividend, input, output, "Enter dividend:")?)?;
            let b = parse_integer(&value_or_prompt(divisor, input, output, "Enter divisor:")?)?;
            Ok(format!("{} / {} = {}", a, b, divide(a, b)?))
        }
    }
}

fn value_or_prompt<R: BufRead, W: Write>(
    value: Option<String>,
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => prompt(input, output, message),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // keep the first subscriber if one is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
