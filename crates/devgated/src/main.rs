use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match devgated::run_gateway() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(io::stderr(), "devgated: {error}");
            ExitCode::FAILURE
        }
    }
}
