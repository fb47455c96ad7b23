//! luai command-line entry point.

use std::process::ExitCode;

use luai::{usage, Command};

fn main() -> ExitCode {
    luai::init_tracing();

    let command = match Command::from_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("luai: {err}");
            eprintln!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    let config = match command {
        Command::Help => {
            println!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Command::Run(config) => config,
    };

    // A fault in the program is reported on stdout and still exits 0.
    match luai::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("luai: {err}");
            ExitCode::FAILURE
        }
    }
}
