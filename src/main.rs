/// Binary entrypoint for the `binrec` executable.
///
/// Keeps the binary thin — all logic lives in the `binrec_lib` crate so unit
/// tests can import library functions directly.
fn main() -> std::process::ExitCode {
    binrec_lib::run()
}
