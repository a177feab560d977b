// src/cli.rs
use clap::Parser;
use clap::error::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::core::plot::{MAX_PLOT_CATEGORIES, render_bar_chart};
use crate::core::scanner::pattern::Pattern;
use crate::core::scanner::traverse_directories;
use crate::models::CountMap;
use crate::utils::format_counts;

pub const USAGE_MESSAGE: &str =
    "Please provide a Root Directory and Filename RegEx as arguments";
pub const TOO_MANY_ARGS_MESSAGE: &str =
    "The script only supports 3 arguments. Please check your inputs and ensure there are not any spaces";
pub const INVALID_DIRECTORY_MESSAGE: &str = "This is not a valid directory name";
pub const INVALID_PATTERN_MESSAGE: &str = "Your Filename RegEx is invalid!";
pub const NO_DATA_MESSAGE: &str = "No Data to plot!";
pub const NO_MATCHES_MESSAGE: &str = "No matches found";

/// Where the rendered chart lands, relative to the working directory.
pub const PLOT_FILE: &str = "counts.png";

/// Exit codes, one per failure class. The soft plotting outcomes (no data,
/// too many directories) are reported conditions, not failures, and exit 0.
pub mod exit_code {
    pub const USAGE: u8 = 2;
    pub const INVALID_DIRECTORY: u8 = 3;
    pub const INVALID_PATTERN: u8 = 4;
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root directory to scan
    pub root_dir: PathBuf,

    /// Regular expression tested against each base filename, anchored at
    /// the start of the name
    pub pattern: String,

    /// Pass "true" (case-insensitive) to render the counts as a bar chart
    pub plot: Option<String>,
}

impl Args {
    /// The third argument requests plotting only when it equals "true",
    /// compared case-insensitively. Any other value disables plotting.
    #[must_use]
    pub fn plot_requested(&self) -> bool {
        self.plot
            .as_deref()
            .is_some_and(|flag| flag.eq_ignore_ascii_case("true"))
    }
}

/// Maps a clap parse failure onto the user-facing argument-count messages.
#[must_use]
pub fn report_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ErrorKind::MissingRequiredArgument => {
            println!("{USAGE_MESSAGE}");
            ExitCode::from(exit_code::USAGE)
        }
        _ => {
            println!("{TOO_MANY_ARGS_MESSAGE}");
            ExitCode::from(exit_code::USAGE)
        }
    }
}

/// Validates the arguments, runs the scan, prints the counts and, when
/// requested, renders the bar chart.
#[must_use]
pub fn run(args: &Args) -> ExitCode {
    if !args.root_dir.exists() {
        println!("{INVALID_DIRECTORY_MESSAGE}");
        return ExitCode::from(exit_code::INVALID_DIRECTORY);
    }

    let Ok(pattern) = Pattern::compile(&args.pattern) else {
        println!("{INVALID_PATTERN_MESSAGE}");
        return ExitCode::from(exit_code::INVALID_PATTERN);
    };

    let counts = match traverse_directories(&args.root_dir, &pattern) {
        Ok(counts) => counts,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    // Always report the result, even when nothing matched
    if counts.is_empty() {
        println!("{NO_MATCHES_MESSAGE}");
    } else {
        print!("{}", format_counts(&counts));
    }

    if args.plot_requested() {
        return plot(&counts);
    }

    ExitCode::SUCCESS
}

fn plot(counts: &CountMap) -> ExitCode {
    if counts.is_empty() {
        println!("{NO_DATA_MESSAGE}");
        return ExitCode::SUCCESS;
    }
    if counts.len() > MAX_PLOT_CATEGORIES {
        println!(
            "Data will not be plotted for searches containing more than {MAX_PLOT_CATEGORIES} subdirectories"
        );
        return ExitCode::SUCCESS;
    }

    let output = Path::new(PLOT_FILE);
    match render_bar_chart(counts, output) {
        Ok(()) => {
            println!("Bar chart saved to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
