//! chainfmt CLI

use std::process::ExitCode;

fn main() -> ExitCode {
    chainfmt::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    ExitCode::from(chainfmt::commands::run_format(&args))
}
