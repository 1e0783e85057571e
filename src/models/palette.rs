//! Paint palettes.
//!
//! A palette is an ordered list of paint colors plus three fixed auxiliary
//! colors: the look of an unpainted cell (`empty_color`), the board
//! surround (`background_color`), and the cross-mark tint (`marking_color`).
//!
//! Board cells store palette indices, not colors: value 0 is always
//! "empty", value `i` (1-based) addresses the `i`-th paint color.

use thiserror::Error;

/// An RGB color triple, serialized as a `[r, g, b]` array.
pub type Rgb = [u8; 3];

/// Error type for palette construction and lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Constructed with no paint colors
    #[error("a palette needs at least one paint color")]
    Empty,
    /// Constructed with more colors than a cell value can address
    #[error("palette has {0} colors, the maximum is 255")]
    TooManyColors(usize),
    /// Color lookup past the last paint color
    #[error("color index {index} exceeds palette size {size}")]
    IndexOutOfRange { index: u8, size: u8 },
}

/// An immutable paint palette.
///
/// # Examples
///
/// ```
/// use picrox::models::Palette;
///
/// let palette = Palette::new(vec![[10, 20, 30], [40, 50, 60]]).unwrap();
/// assert_eq!(palette.size(), 2);
/// assert_eq!(palette.color(0), Ok(Palette::DEFAULT_EMPTY));
/// assert_eq!(palette.color(1), Ok([10, 20, 30]));
/// assert_eq!(palette.color(2), Ok([40, 50, 60]));
/// assert!(palette.color(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
    empty_color: Rgb,
    background_color: Rgb,
    marking_color: Rgb,
}

impl Palette {
    /// Paint color of the default single-color palette.
    pub const DEFAULT_PAINT: Rgb = [40, 40, 40];
    /// Default color of unpainted cells.
    pub const DEFAULT_EMPTY: Rgb = [220, 220, 220];
    /// Default board background color.
    pub const DEFAULT_BACKGROUND: Rgb = [240, 240, 240];
    /// Default cross-mark color.
    pub const DEFAULT_MARKING: Rgb = [230, 100, 100];

    /// Most paint colors a palette can hold (cell values are `u8`).
    pub const MAX_COLORS: usize = u8::MAX as usize;

    /// Create a palette from paint colors, with the default auxiliary
    /// colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] for an empty color list and
    /// [`PaletteError::TooManyColors`] past [`Palette::MAX_COLORS`].
    pub fn new(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        Self::with_auxiliaries(
            colors,
            Self::DEFAULT_EMPTY,
            Self::DEFAULT_BACKGROUND,
            Self::DEFAULT_MARKING,
        )
    }

    /// Create a palette with explicit auxiliary colors.
    ///
    /// # Errors
    ///
    /// Same validation as [`Palette::new`].
    pub fn with_auxiliaries(
        colors: Vec<Rgb>,
        empty_color: Rgb,
        background_color: Rgb,
        marking_color: Rgb,
    ) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() > Self::MAX_COLORS {
            return Err(PaletteError::TooManyColors(colors.len()));
        }
        Ok(Self { colors, empty_color, background_color, marking_color })
    }

    /// The built-in new-game color sets: 1, 2 or 3 paint colors.
    ///
    /// Returns `None` for any other count.
    pub fn preset(count: u8) -> Option<Self> {
        let colors: Vec<Rgb> = match count {
            1 => vec![Self::DEFAULT_PAINT],
            2 => vec![[230, 80, 80], [160, 220, 220]],
            3 => vec![[132, 45, 106], [38, 111, 97], [174, 151, 60]],
            _ => return None,
        };
        Self::new(colors).ok()
    }

    /// Number of paint colors (at least 1).
    pub fn size(&self) -> u8 {
        self.colors.len() as u8
    }

    /// Resolve a cell value to a color: 0 is the empty color, `i` is the
    /// `i`-th paint color (1-based).
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::IndexOutOfRange`] if `index > size`.
    pub fn color(&self, index: u8) -> Result<Rgb, PaletteError> {
        if index == 0 {
            return Ok(self.empty_color);
        }
        self.colors
            .get(index as usize - 1)
            .copied()
            .ok_or(PaletteError::IndexOutOfRange { index, size: self.size() })
    }

    /// The ordered paint colors.
    pub fn paint_colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color of unpainted cells.
    pub fn empty_color(&self) -> Rgb {
        self.empty_color
    }

    /// Board background color.
    pub fn background_color(&self) -> Rgb {
        self.background_color
    }

    /// Cross-mark color.
    pub fn marking_color(&self) -> Rgb {
        self.marking_color
    }
}

impl Default for Palette {
    /// The classic single-color palette: dark paint on light grey.
    fn default() -> Self {
        Self {
            colors: vec![Self::DEFAULT_PAINT],
            empty_color: Self::DEFAULT_EMPTY,
            background_color: Self::DEFAULT_BACKGROUND,
            marking_color: Self::DEFAULT_MARKING,
        }
    }
}
