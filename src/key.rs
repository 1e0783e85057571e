//! Run-length key derivation for puzzle clues.
//!
//! A "key" is the ordered list of islands for one row or column: each island
//! is a maximal run of identical non-zero cell values. Keys are what a
//! nonogram displays next to each line.
//!
//! A line with no filled cells derives the sentinel
//! `KeyIsland { color_index: 1, length: 0 }` instead of an empty list;
//! callers treat `length == 0` as "this whole line stays empty" (it drives
//! auto-crossing, see [`crate::game`]).

/// The two grid axes a key can be derived along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A horizontal line of cells (varying column).
    Row,
    /// A vertical line of cells (varying row).
    Column,
}

/// One clue island: a run of `length` cells painted with `color_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyIsland {
    /// Paint index of the run, 1-based. Index 1 with `length == 0` is the
    /// empty-line sentinel, not a real run.
    pub color_index: u8,
    /// Number of contiguous cells in the run.
    pub length: usize,
}

impl KeyIsland {
    /// The sentinel returned for a line with no filled cells.
    pub const fn empty_line() -> Self {
        Self { color_index: 1, length: 0 }
    }

    /// Whether this island is the empty-line sentinel.
    pub const fn is_empty_line(&self) -> bool {
        self.length == 0
    }
}

/// Derive the clue key for one line of cell values.
///
/// Walks the line once, closing an island whenever the run value changes.
/// Runs of zero (empty) cells produce no island. A line with no non-zero
/// cells yields exactly `[KeyIsland::empty_line()]`.
///
/// # Examples
///
/// ```
/// use picrox::key::{derive_key, KeyIsland};
///
/// let key = derive_key([2, 2, 0, 3, 3, 3]);
/// assert_eq!(
///     key,
///     vec![
///         KeyIsland { color_index: 2, length: 2 },
///         KeyIsland { color_index: 3, length: 3 },
///     ]
/// );
///
/// assert_eq!(derive_key([0, 0, 0]), vec![KeyIsland::empty_line()]);
/// ```
pub fn derive_key<I>(line: I) -> Vec<KeyIsland>
where
    I: IntoIterator<Item = u8>,
{
    let mut key = Vec::new();
    let mut run_value = 0u8;
    let mut run_length = 0usize;

    for value in line {
        if value == run_value {
            run_length += 1;
        } else {
            if run_value != 0 {
                key.push(KeyIsland { color_index: run_value, length: run_length });
            }
            run_value = value;
            run_length = 1;
        }
    }
    // The final run never sees a value change inside the loop.
    if run_value != 0 && run_length > 0 {
        key.push(KeyIsland { color_index: run_value, length: run_length });
    }

    if key.is_empty() {
        key.push(KeyIsland::empty_line());
    }
    key
}
