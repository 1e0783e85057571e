//! `pcx new`: generate a randomized puzzle file.

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Config;
use crate::models::{Board, Palette};
use crate::puzzle::{load_palette, save_puzzle, with_extension, FILE_EXTENSION};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Board dimension bounds for generated puzzles.
const MIN_DIMENSION: usize = 5;
const MAX_DIMENSION: usize = 25;

/// Execute the new command
#[allow(clippy::too_many_arguments)]
pub fn run_new(
    config: &Config,
    rows: Option<usize>,
    cols: Option<usize>,
    colors: Option<u8>,
    palette_path: Option<&Path>,
    seed: Option<u64>,
    output: Option<&Path>,
) -> ExitCode {
    let rows = rows.unwrap_or(config.new_game.rows);
    let cols = cols.unwrap_or(config.new_game.cols);
    for (name, value) in [("rows", rows), ("cols", cols)] {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
            eprintln!(
                "Error: {} must be between {} and {}, got {}",
                name, MIN_DIMENSION, MAX_DIMENSION, value
            );
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    }

    let palette = match palette_path {
        Some(path) => match load_palette(path) {
            Ok(palette) => palette,
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
        None => {
            let colors = colors.unwrap_or(config.new_game.colors);
            match Palette::preset(colors) {
                Some(palette) => palette,
                None => {
                    eprintln!("Error: colors must be between 1 and 3, got {}", colors);
                    return ExitCode::from(EXIT_INVALID_ARGS);
                }
            }
        }
    };

    let seed = seed.unwrap_or_else(clock_seed);
    let mut board = Board::new(rows, cols, palette);
    board.randomize(seed);

    let path = match output {
        Some(path) => with_extension(path),
        None => config
            .puzzle_dir
            .join(format!("puzzle_{}x{}_{}.{}", rows, cols, seed, FILE_EXTENSION)),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Error: cannot create {}: {}", parent.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    match save_puzzle(&path, &board) {
        Ok(()) => {
            println!("Wrote {}x{} puzzle (seed {}) to {}", rows, cols, seed, path.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}: {}", path.display(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Seed for when none was given: nanoseconds since the epoch.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
