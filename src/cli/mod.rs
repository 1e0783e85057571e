//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod list;
mod new;
mod palette;
mod show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, Config};

// Re-export subcommand types used in Commands enum
pub use palette::PaletteAction;

/// Exit codes per Picrox convention
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Picrox - color nonogram puzzles in the terminal
#[derive(Parser)]
#[command(name = "pcx")]
#[command(about = "Picrox - generate, inspect and render color nonogram puzzles")]
#[command(version)]
pub struct Cli {
    /// Path to picrox.toml (default: discovered by walking up from the
    /// working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a randomized puzzle file
    New {
        /// Board rows, 5-25 (default from config)
        #[arg(long)]
        rows: Option<usize>,

        /// Board columns, 5-25 (default from config)
        #[arg(long)]
        cols: Option<usize>,

        /// Palette preset size, 1-3 (default from config)
        #[arg(long, conflicts_with = "palette")]
        colors: Option<u8>,

        /// Use a palette file instead of a preset
        #[arg(long)]
        palette: Option<PathBuf>,

        /// Random seed (default: derived from the clock)
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (default: <puzzle_dir>/puzzle_<rows>x<cols>_<seed>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a puzzle file in the terminal
    Show {
        /// Puzzle file to render
        input: PathBuf,

        /// Render the player view: blank cells under the clue keys, with
        /// empty lines crossed out
        #[arg(long)]
        clues: bool,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },
    /// Validate a puzzle file and report its statistics
    Check {
        /// Puzzle file to validate
        input: PathBuf,
    },
    /// List puzzle and palette files in the configured directories
    List,
    /// Create and inspect palette files
    Palette {
        #[command(subcommand)]
        action: PaletteAction,
    },
}

/// Parse arguments, load configuration, and dispatch to a subcommand.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config: Config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match cli.command {
        Commands::New { rows, cols, colors, palette, seed, output } => new::run_new(
            &config,
            rows,
            cols,
            colors,
            palette.as_deref(),
            seed,
            output.as_deref(),
        ),
        Commands::Show { input, clues, no_color } => show::run_show(&input, clues, no_color),
        Commands::Check { input } => check::run_check(&input),
        Commands::List => list::run_list(&config),
        Commands::Palette { action } => palette::run_palette(&config, action),
    }
}
