//! Picrox - command-line tool for generating and rendering nonogram puzzles

use std::process::ExitCode;

use picrox::cli;

fn main() -> ExitCode {
    cli::run()
}
