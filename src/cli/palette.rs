//! `pcx palette`: create and inspect palette files.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Subcommand;
use regex::Regex;

use crate::color::{format_rgb, parse_rgb};
use crate::config::Config;
use crate::models::{Palette, Rgb};
use crate::puzzle::{load_palette, save_palette, FILE_EXTENSION};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Most paint colors a created palette may hold.
const MAX_COLORS: usize = 5;

/// Palette names: letters, digits, underscores, and spaces.
const NAME_PATTERN: &str = "^[a-zA-Z0-9_ ]+$";

#[derive(Subcommand)]
pub enum PaletteAction {
    /// Create a palette file in the configured palette directory
    New {
        /// Palette name (letters, digits, underscores, spaces; spaces are
        /// saved as underscores)
        name: String,

        /// Comma-separated paint colors, e.g. "#E65050,#A0DCDC" (max 5)
        #[arg(long)]
        colors: String,

        /// Unpainted-cell color
        #[arg(long)]
        empty: Option<String>,

        /// Board background color
        #[arg(long)]
        background: Option<String>,

        /// Cross-mark color
        #[arg(long)]
        marking: Option<String>,
    },
    /// Print the colors of a palette file
    Show {
        /// Palette file to print
        input: PathBuf,
    },
}

/// Execute the palette command
pub fn run_palette(config: &Config, action: PaletteAction) -> ExitCode {
    match action {
        PaletteAction::New { name, colors, empty, background, marking } => {
            run_new(config, &name, &colors, empty.as_deref(), background.as_deref(), marking.as_deref())
        }
        PaletteAction::Show { input } => run_show(&input),
    }
}

fn run_new(
    config: &Config,
    name: &str,
    colors: &str,
    empty: Option<&str>,
    background: Option<&str>,
    marking: Option<&str>,
) -> ExitCode {
    let validator = match Regex::new(NAME_PATTERN) {
        Ok(regex) => regex,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    if !validator.is_match(name) {
        eprintln!("Error: invalid palette name {:?} (allowed: letters, digits, '_', ' ')", name);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let mut paints = Vec::new();
    for text in colors.split(',') {
        match parse_rgb(text.trim()) {
            Ok(rgb) => paints.push(rgb),
            Err(e) => {
                eprintln!("Error: color {:?}: {}", text.trim(), e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    }
    if paints.len() > MAX_COLORS {
        eprintln!("Error: at most {} colors, got {}", MAX_COLORS, paints.len());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let mut auxiliaries = [
        (empty, Palette::DEFAULT_EMPTY),
        (background, Palette::DEFAULT_BACKGROUND),
        (marking, Palette::DEFAULT_MARKING),
    ];
    for (text, rgb) in auxiliaries.iter_mut() {
        if let Some(text) = text {
            match parse_rgb(text.trim()) {
                Ok(parsed) => *rgb = parsed,
                Err(e) => {
                    eprintln!("Error: color {:?}: {}", text.trim(), e);
                    return ExitCode::from(EXIT_INVALID_ARGS);
                }
            }
        }
    }
    let [(_, empty), (_, background), (_, marking)] = auxiliaries;

    let palette = match Palette::with_auxiliaries(paints, empty, background, marking) {
        Ok(palette) => palette,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    if let Err(e) = fs::create_dir_all(&config.palette_dir) {
        eprintln!("Error: cannot create {}: {}", config.palette_dir.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    let file_name = format!("{}.{}", name.replace(' ', "_"), FILE_EXTENSION);
    let path = config.palette_dir.join(file_name);
    match save_palette(&path, &palette) {
        Ok(()) => {
            println!("Wrote {} color palette to {}", palette.size(), path.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}: {}", path.display(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_show(input: &std::path::Path) -> ExitCode {
    let palette = match load_palette(input) {
        Ok(palette) => palette,
        Err(e) => {
            eprintln!("Error: {}: {}", input.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    println!("{}: {} colors", input.display(), palette.size());
    for (index, &rgb) in palette.paint_colors().iter().enumerate() {
        println!("  color {}: {}", index + 1, format_rgb(rgb));
    }
    print_auxiliary("empty", palette.empty_color());
    print_auxiliary("background", palette.background_color());
    print_auxiliary("marking", palette.marking_color());
    ExitCode::from(EXIT_SUCCESS)
}

fn print_auxiliary(name: &str, rgb: Rgb) {
    println!("  {}: {}", name, format_rgb(rgb));
}
