//! Generic 2D grid container.
//!
//! One bounds-checked rectangular container backs every grid in the crate:
//! `Grid<u8>` stores board cell values and `Grid<bool>` stores cross marks.
//! Dimensions are fixed at construction and cells are stored row-major.

use thiserror::Error;

/// Error type for grid access failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Row/column access outside the grid bounds
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    IndexOutOfRange { row: usize, col: usize, rows: usize, cols: usize },
}

/// A fixed-size rectangular grid of cells, stored row-major.
///
/// Rows and columns are zero-indexed. Both dimensions should be at least 1;
/// a degenerate empty grid is representable but every cell access on it
/// fails with [`GridError::IndexOutOfRange`].
///
/// # Examples
///
/// ```
/// use picrox::grid::Grid;
///
/// let mut grid = Grid::new(2, 3, 0u8);
/// assert_eq!(grid.dimensions(), (2, 3));
/// grid.set(1, 2, 7).unwrap();
/// assert_eq!(grid.get(1, 2), Ok(7));
/// assert!(grid.get(2, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid of `rows` x `cols` cells, every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self { rows, cols, cells: vec![fill; rows * cols] }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` pair.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Read the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if either coordinate is
    /// outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<T, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row * self.cols + col])
    }

    /// Write the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if either coordinate is
    /// outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.cells[row * self.cols + col] = value;
        Ok(())
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Set every cell to `f(row, col)`, visiting cells row-major.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize) -> T) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(i / self.cols, i % self.cols);
        }
    }

    /// Iterate one row left to right.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `row >= rows`.
    pub fn row(&self, row: usize) -> Result<impl Iterator<Item = T> + '_, GridError> {
        if row >= self.rows {
            return Err(GridError::IndexOutOfRange {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = row * self.cols;
        Ok(self.cells[start..start + self.cols].iter().copied())
    }

    /// Iterate one column top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `col >= cols`.
    pub fn column(&self, col: usize) -> Result<impl Iterator<Item = T> + '_, GridError> {
        if col >= self.cols {
            return Err(GridError::IndexOutOfRange {
                row: 0,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells.iter().copied().skip(col).step_by(self.cols))
    }

    /// Iterate all rows top to bottom as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| {
            let start = row * self.cols;
            &self.cells[start..start + self.cols]
        })
    }

    /// Iterate all cells row-major as `((row, col), value)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        let cols = self.cols;
        self.cells.iter().copied().enumerate().map(move |(i, v)| ((i / cols, i % cols), v))
    }

    /// Flat row-major view of the cells.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}
