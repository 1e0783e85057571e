//! The puzzle board: a grid of palette indices.

use thiserror::Error;

use super::palette::Palette;
use crate::grid::{Grid, GridError};
use crate::key::{derive_key, Axis, KeyIsland};

/// A board's companion grid of cross marks ("this cell stays empty" notes).
pub type CrossGrid = Grid<bool>;

/// Error type for board access failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Row/column outside the board
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Cell value outside `[0, palette.size]`
    #[error("color index {value} is invalid for a palette of {size} colors")]
    InvalidColorIndex { value: u8, size: u8 },
}

/// A rectangular grid of color indices with its palette.
///
/// Cell value 0 means "empty"; values `1..=palette.size()` are 1-based
/// paint indices. Dimensions are fixed at construction and should both be
/// at least 1.
///
/// # Examples
///
/// ```
/// use picrox::models::{Board, Palette};
///
/// let mut board = Board::new(2, 3, Palette::default());
/// assert!(board.cells().iter().all(|(_, v)| v == 0));
/// board.set(0, 0, 1).unwrap();
/// assert!(board.set(0, 0, 2).is_err()); // palette has one color
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid<u8>,
    palette: Palette,
}

impl Board {
    /// Create an all-empty board of `rows` x `cols` cells.
    pub fn new(rows: usize, cols: usize, palette: Palette) -> Self {
        Self { cells: Grid::new(rows, cols, 0), palette }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    /// `(rows, cols)` pair.
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dimensions()
    }

    /// The board's palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Read-only view of the cell grid.
    pub fn cells(&self) -> &Grid<u8> {
        &self.cells
    }

    /// Read the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] (wrapped) for coordinates
    /// outside the board.
    pub fn get(&self, row: usize, col: usize) -> Result<u8, BoardError> {
        Ok(self.cells.get(row, col)?)
    }

    /// Write the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidColorIndex`] if
    /// `value > palette.size()`, or the bounds error for bad coordinates.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<(), BoardError> {
        if value > self.palette.size() {
            return Err(BoardError::InvalidColorIndex { value, size: self.palette.size() });
        }
        self.cells.set(row, col, value)?;
        Ok(())
    }

    /// Fill every cell with a seed-derived uniform value in
    /// `[0, palette.size]`.
    ///
    /// The upper bound is inclusive: `palette.size` is itself a valid
    /// 1-based paint index (the last color), so randomized boards use the
    /// whole palette. Deterministic for a given seed.
    pub fn randomize(&mut self, seed: u64) {
        let bound = u64::from(self.palette.size()) + 1;
        self.cells.fill_with(|row, col| (position_hash(seed, row, col) % bound) as u8);
    }

    /// Derive the clue key for one row or column.
    ///
    /// # Errors
    ///
    /// Returns the bounds error if `index` is outside the axis.
    pub fn axis_key(&self, index: usize, axis: Axis) -> Result<Vec<KeyIsland>, BoardError> {
        let key = match axis {
            Axis::Row => derive_key(self.cells.row(index)?),
            Axis::Column => derive_key(self.cells.column(index)?),
        };
        Ok(key)
    }

    /// Derive the clue keys for every line along `axis`, in order.
    pub fn keys(&self, axis: Axis) -> Vec<Vec<KeyIsland>> {
        match axis {
            Axis::Row => {
                self.cells.row_slices().map(|row| derive_key(row.iter().copied())).collect()
            }
            Axis::Column => (0..self.cols())
                .map(|col| {
                    // col < cols, so the stride is non-zero
                    derive_key(self.cells.as_slice().iter().copied().skip(col).step_by(self.cols()))
                })
                .collect(),
        }
    }

    /// Structural equality of the cell grids; the completion predicate.
    ///
    /// Palettes are not compared, only dimensions and cell values.
    pub fn matches(&self, other: &Board) -> bool {
        self.cells == other.cells
    }
}

/// Splitmix64-style position hash: one well-mixed value per (seed, cell).
fn position_hash(seed: u64, row: usize, col: usize) -> u64 {
    let mut hash = seed;
    hash ^= (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    hash ^= (col as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    hash = hash.wrapping_mul(0x94D0_49BB_1331_11EB);
    hash ^= hash >> 30;
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_board_is_all_zero() {
        for (rows, cols, colors) in [(1, 1, 1), (3, 5, 2), (15, 10, 3), (25, 25, 1)] {
            let palette = Palette::new(vec![[0, 0, 0]; colors]).unwrap();
            let board = Board::new(rows, cols, palette);
            assert_eq!(board.dimensions(), (rows, cols));
            assert!(board.cells().iter().all(|(_, v)| v == 0));
        }
    }

    #[test]
    fn test_set_validates_value_range() {
        let palette = Palette::new(vec![[1, 1, 1], [2, 2, 2]]).unwrap();
        let mut board = Board::new(2, 2, palette);
        board.set(0, 0, 0).unwrap();
        board.set(0, 0, 1).unwrap();
        board.set(0, 0, 2).unwrap(); // value == size is valid
        assert_eq!(
            board.set(0, 0, 3),
            Err(BoardError::InvalidColorIndex { value: 3, size: 2 })
        );
    }

    #[test]
    fn test_set_validates_bounds() {
        let mut board = Board::new(2, 2, Palette::default());
        assert!(matches!(board.set(2, 0, 1), Err(BoardError::Grid(_))));
        assert!(matches!(board.get(0, 2), Err(BoardError::Grid(_))));
    }

    #[test]
    fn test_randomize_is_deterministic_per_seed() {
        let palette = Palette::preset(3).unwrap();
        let mut a = Board::new(10, 10, palette.clone());
        let mut b = Board::new(10, 10, palette.clone());
        a.randomize(42);
        b.randomize(42);
        assert!(a.matches(&b));

        let mut c = Board::new(10, 10, palette);
        c.randomize(43);
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_randomize_range_is_inclusive() {
        let palette = Palette::default(); // size 1
        let mut board = Board::new(15, 10, palette);
        board.randomize(7);
        let values: Vec<u8> = board.cells().iter().map(|(_, v)| v).collect();
        assert!(values.iter().all(|&v| v <= 1));
        // 150 cells make both bounds all but certain to appear
        assert!(values.contains(&0));
        assert!(values.contains(&1));

        let palette = Palette::preset(3).unwrap();
        let mut board = Board::new(15, 10, palette);
        board.randomize(7);
        let values: Vec<u8> = board.cells().iter().map(|(_, v)| v).collect();
        assert!(values.iter().all(|&v| v <= 3));
        assert!(values.contains(&3)); // the inclusive upper bound
    }

    #[test]
    fn test_axis_key_row_and_column() {
        let palette = Palette::preset(3).unwrap();
        let mut board = Board::new(3, 4, palette);
        // row 1: [2, 2, 0, 3]
        board.set(1, 0, 2).unwrap();
        board.set(1, 1, 2).unwrap();
        board.set(1, 3, 3).unwrap();
        assert_eq!(
            board.axis_key(1, Axis::Row).unwrap(),
            vec![
                KeyIsland { color_index: 2, length: 2 },
                KeyIsland { color_index: 3, length: 1 },
            ]
        );
        // column 0: [0, 2, 0]
        assert_eq!(
            board.axis_key(0, Axis::Column).unwrap(),
            vec![KeyIsland { color_index: 2, length: 1 }]
        );
        // column 2 is empty
        assert_eq!(
            board.axis_key(2, Axis::Column).unwrap(),
            vec![KeyIsland::empty_line()]
        );
        assert!(board.axis_key(3, Axis::Row).is_err());
        assert!(board.axis_key(4, Axis::Column).is_err());
    }

    #[test]
    fn test_keys_cover_every_line_in_order() {
        let mut board = Board::new(2, 3, Palette::default());
        board.set(0, 0, 1).unwrap();
        board.set(1, 2, 1).unwrap();
        let row_keys = board.keys(Axis::Row);
        assert_eq!(row_keys.len(), 2);
        assert_eq!(row_keys[0], vec![KeyIsland { color_index: 1, length: 1 }]);
        let col_keys = board.keys(Axis::Column);
        assert_eq!(col_keys.len(), 3);
        assert!(col_keys[1][0].is_empty_line());
    }

    #[test]
    fn test_matches_ignores_palette() {
        let mut a = Board::new(2, 2, Palette::default());
        let mut b = Board::new(2, 2, Palette::preset(1).unwrap());
        assert!(a.matches(&b));
        a.set(0, 0, 1).unwrap();
        assert!(!a.matches(&b));
        b.set(0, 0, 1).unwrap();
        assert!(a.matches(&b));
    }

    #[test]
    fn test_matches_requires_same_dimensions() {
        let a = Board::new(2, 3, Palette::default());
        let b = Board::new(3, 2, Palette::default());
        assert!(!a.matches(&b));
    }
}
