//! `pcx check`: validate a puzzle file and report statistics.

use std::path::Path;
use std::process::ExitCode;

use crate::color::format_rgb;
use crate::key::Axis;
use crate::puzzle::load_puzzle;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the check command
///
/// Loading performs the full shape validation (dimensions, row lengths,
/// palette size, cell ranges); a valid file gets a statistics report.
pub fn run_check(input: &Path) -> ExitCode {
    let board = match load_puzzle(input) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: {}: {}", input.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (rows, cols) = board.dimensions();
    let total = rows * cols;
    let mut color_counts = vec![0usize; board.palette().size() as usize + 1];
    for (_, value) in board.cells().iter() {
        color_counts[value as usize] += 1;
    }
    let filled = total - color_counts[0];
    let empty_rows =
        board.keys(Axis::Row).iter().filter(|key| key[0].is_empty_line()).count();
    let empty_cols =
        board.keys(Axis::Column).iter().filter(|key| key[0].is_empty_line()).count();

    println!("{}: OK", input.display());
    println!("  dimensions: {} rows x {} columns", rows, cols);
    println!("  palette:    {} colors", board.palette().size());
    println!(
        "  filled:     {}/{} cells ({:.0}%)",
        filled,
        total,
        filled as f64 / total as f64 * 100.0
    );
    for (index, count) in color_counts.iter().enumerate().skip(1) {
        let rgb = board
            .palette()
            .color(index as u8)
            .map(format_rgb)
            .unwrap_or_else(|_| "???".to_string());
        println!("    color {} ({}): {} cells", index, rgb, count);
    }
    if empty_rows + empty_cols > 0 {
        println!("  empty lines: {} rows, {} columns", empty_rows, empty_cols);
    }

    ExitCode::from(EXIT_SUCCESS)
}
