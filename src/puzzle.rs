//! Puzzle and palette file persistence.
//!
//! A puzzle file is a JSON document with exactly three keys: `dimensions`
//! (`[rows, columns]`), `rows` (the cell grid), and `palette`. A palette
//! file is the palette sub-object as a top-level document. Both use the
//! `json` extension.
//!
//! The file-representation structs here mirror the on-disk shape
//! field-for-field; converting them into [`Board`]/[`Palette`] validates
//! dimensions, row lengths, palette size, and cell ranges. Writers emit
//! pretty-printed JSON.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Board, Palette, PaletteError, Rgb};

/// File extension for puzzle and palette files.
pub const FILE_EXTENSION: &str = "json";

/// Error type for puzzle/palette load and save failures
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PuzzleError {
    /// File I/O error
    #[error("failed to read or write puzzle file: {0}")]
    Io(#[from] std::io::Error),
    /// JSON syntax error or missing/mistyped field
    #[error("malformed puzzle file: {0}")]
    Json(#[from] serde_json::Error),
    /// Declared dimensions include a zero
    #[error("puzzle dimensions {rows}x{cols} are empty")]
    EmptyDimensions { rows: usize, cols: usize },
    /// `rows` does not hold exactly `dimensions[0]` rows
    #[error("puzzle declares {expected} rows but contains {found}")]
    RowCountMismatch { expected: usize, found: usize },
    /// A row does not hold exactly `dimensions[1]` cells
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLengthMismatch { row: usize, expected: usize, found: usize },
    /// Palette with no colors or more than 255
    #[error(transparent)]
    Palette(#[from] PaletteError),
    /// A cell value addresses past the palette
    #[error("cell ({row}, {col}) holds {value}, past the palette of {size} colors")]
    CellOutOfRange { row: usize, col: usize, value: u8, size: u8 },
}

/// On-disk shape of a palette: the four documented fields, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteFile {
    pub colors: Vec<Rgb>,
    pub empty_color: Rgb,
    pub background_color: Rgb,
    pub marking_color: Rgb,
}

impl PaletteFile {
    /// Validate and convert into a [`Palette`].
    pub fn into_palette(self) -> Result<Palette, PuzzleError> {
        let palette = Palette::with_auxiliaries(
            self.colors,
            self.empty_color,
            self.background_color,
            self.marking_color,
        )?;
        Ok(palette)
    }
}

impl From<&Palette> for PaletteFile {
    fn from(palette: &Palette) -> Self {
        Self {
            colors: palette.paint_colors().to_vec(),
            empty_color: palette.empty_color(),
            background_color: palette.background_color(),
            marking_color: palette.marking_color(),
        }
    }
}

/// On-disk shape of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleFile {
    /// `[rows, columns]`.
    pub dimensions: (usize, usize),
    /// Cell grid, row by row; values `0..=palette size`.
    pub rows: Vec<Vec<u8>>,
    pub palette: PaletteFile,
}

impl PuzzleFile {
    /// Validate and convert into a [`Board`].
    ///
    /// The palette is reconstructed first, then the board shell, then each
    /// row is checked against the declared dimensions and the cells against
    /// the palette size.
    pub fn into_board(self) -> Result<Board, PuzzleError> {
        let (rows, cols) = self.dimensions;
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::EmptyDimensions { rows, cols });
        }
        let palette = self.palette.into_palette()?;
        if self.rows.len() != rows {
            return Err(PuzzleError::RowCountMismatch { expected: rows, found: self.rows.len() });
        }

        let size = palette.size();
        let mut board = Board::new(rows, cols, palette);
        for (row_index, row) in self.rows.iter().enumerate() {
            if row.len() != cols {
                return Err(PuzzleError::RowLengthMismatch {
                    row: row_index,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (col_index, &value) in row.iter().enumerate() {
                if value > size {
                    return Err(PuzzleError::CellOutOfRange {
                        row: row_index,
                        col: col_index,
                        value,
                        size,
                    });
                }
                board.set(row_index, col_index, value).map_err(|_| {
                    PuzzleError::CellOutOfRange { row: row_index, col: col_index, value, size }
                })?;
            }
        }
        Ok(board)
    }
}

impl From<&Board> for PuzzleFile {
    fn from(board: &Board) -> Self {
        Self {
            dimensions: board.dimensions(),
            rows: board.cells().row_slices().map(<[u8]>::to_vec).collect(),
            palette: PaletteFile::from(board.palette()),
        }
    }
}

/// Read a puzzle from a JSON stream.
///
/// # Errors
///
/// Returns [`PuzzleError`] on I/O failure, JSON syntax/shape errors, or any
/// dimension, palette, or cell-range violation. Nothing is partially
/// applied on failure.
pub fn read_puzzle<R: Read>(reader: R) -> Result<Board, PuzzleError> {
    let file: PuzzleFile = serde_json::from_reader(reader)?;
    file.into_board()
}

/// Write a puzzle as pretty-printed JSON.
pub fn write_puzzle<W: Write>(writer: W, board: &Board) -> Result<(), PuzzleError> {
    serde_json::to_writer_pretty(writer, &PuzzleFile::from(board))?;
    Ok(())
}

/// Read a palette from a JSON stream.
pub fn read_palette<R: Read>(reader: R) -> Result<Palette, PuzzleError> {
    let file: PaletteFile = serde_json::from_reader(reader)?;
    file.into_palette()
}

/// Write a palette as pretty-printed JSON.
pub fn write_palette<W: Write>(writer: W, palette: &Palette) -> Result<(), PuzzleError> {
    serde_json::to_writer_pretty(writer, &PaletteFile::from(palette))?;
    Ok(())
}

/// Read a puzzle from a file on disk.
pub fn load_puzzle(path: &Path) -> Result<Board, PuzzleError> {
    read_puzzle(std::fs::File::open(path)?)
}

/// Write a puzzle to a file on disk, truncating any existing file.
pub fn save_puzzle(path: &Path, board: &Board) -> Result<(), PuzzleError> {
    write_puzzle(std::fs::File::create(path)?, board)
}

/// Read a palette from a file on disk.
pub fn load_palette(path: &Path) -> Result<Palette, PuzzleError> {
    read_palette(std::fs::File::open(path)?)
}

/// Write a palette to a file on disk, truncating any existing file.
pub fn save_palette(path: &Path, palette: &Palette) -> Result<(), PuzzleError> {
    write_palette(std::fs::File::create(path)?, palette)
}

/// Whether a path carries the puzzle/palette file extension.
pub fn is_puzzle_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(FILE_EXTENSION)
}

/// Append the `json` extension unless the path already carries it.
pub fn with_extension(path: &Path) -> PathBuf {
    if is_puzzle_file(path) {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(FILE_EXTENSION);
        PathBuf::from(name)
    }
}
