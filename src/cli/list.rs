//! `pcx list`: list puzzle and palette files in the configured directories.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;

use crate::config::Config;
use crate::puzzle::FILE_EXTENSION;

use super::EXIT_SUCCESS;

/// Find all puzzle/palette files directly inside a directory, sorted.
pub fn find_puzzle_files(dir: &Path) -> Vec<PathBuf> {
    let pattern = format!("{}/*.{}", dir.display(), FILE_EXTENSION);
    let mut files: Vec<PathBuf> = match glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

/// Execute the list command
pub fn run_list(config: &Config) -> ExitCode {
    print_section("Puzzles", &config.puzzle_dir);
    print_section("Palettes", &config.palette_dir);
    ExitCode::from(EXIT_SUCCESS)
}

fn print_section(title: &str, dir: &Path) {
    println!("{} in {}:", title, dir.display());
    let files = find_puzzle_files(dir);
    if files.is_empty() {
        println!("  (none)");
    }
    for file in files {
        match file.file_name().and_then(|n| n.to_str()) {
            Some(name) => println!("  {}", name),
            None => println!("  {}", file.display()),
        }
    }
}
