//! Core puzzle data models.
//!
//! A [`Board`] is a grid of palette indices with its [`Palette`]; a
//! [`CrossGrid`] carries the player's "this cell stays empty" marks.

mod board;
mod palette;

pub use board::{Board, BoardError, CrossGrid};
pub use palette::{Palette, PaletteError, Rgb};
