//! Picrox - color nonogram ("picross") puzzle engine
//!
//! This library provides functionality to:
//! - Model puzzle boards, palettes, and clue keys
//! - Drive the interactive drag-paint state machine with undo-on-retreat
//! - Persist puzzles and palettes as JSON files
//! - Render boards and clue keys in the terminal

pub mod cli;
pub mod color;
pub mod config;
pub mod drag;
pub mod game;
pub mod grid;
pub mod key;
pub mod models;
pub mod puzzle;
pub mod terminal;
