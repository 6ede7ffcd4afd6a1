use std::process::ExitCode;

use clap::Parser;
use percent_run_cli::{cli_args, dispatch};
use percent_run_core::error::Error;

fn main() -> ExitCode {
    env_logger::init();

    let args = cli_args::Args::parse();

    match dispatch::run(&args) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("{e}");
            if matches!(e, Error::MissingExecutable) {
                eprintln!("Run `prun --help` for usage.");
            }
            ExitCode::FAILURE
        }
    }
}
