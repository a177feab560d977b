// src/main.rs
use clap::Parser;
use std::process::ExitCode;

use dirtally::cli::{self, Args};

fn main() -> ExitCode {
    match Args::try_parse() {
        Ok(args) => cli::run(&args),
        Err(err) => cli::report_parse_error(&err),
    }
}
