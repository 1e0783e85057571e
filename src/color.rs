//! Hex color parsing for palette creation.
//!
//! Palette files store colors as RGB triples; the CLI accepts them as
//! `#RRGGBB` strings. Only the six-digit form is supported.

use thiserror::Error;

use crate::models::Rgb;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Wrong number of hex digits after the '#'
    #[error("invalid color length {0}, expected 6 hex digits")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Parse a `#RRGGBB` color string into an RGB triple.
///
/// Hex digits may be either case.
///
/// # Examples
///
/// ```
/// use picrox::color::parse_rgb;
///
/// assert_eq!(parse_rgb("#FF0000"), Ok([255, 0, 0]));
/// assert_eq!(parse_rgb("#28286e"), Ok([40, 40, 110]));
/// assert!(parse_rgb("#F00").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ColorError`] if the input is empty, lacks the leading `#`,
/// has the wrong length, or contains non-hex characters.
pub fn parse_rgb(s: &str) -> Result<Rgb, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let Some(hex) = s.strip_prefix('#') else {
        return Err(ColorError::MissingHash);
    };
    // Count characters, not bytes: a multibyte char must not slip past the
    // length check and then fail as a length error.
    let digits: Vec<char> = hex.chars().collect();
    if digits.len() != 6 {
        return Err(ColorError::InvalidLength(digits.len()));
    }

    let r = parse_hex_pair(digits[0], digits[1])?;
    let g = parse_hex_pair(digits[2], digits[3])?;
    let b = parse_hex_pair(digits[4], digits[5])?;
    Ok([r, g, b])
}

/// Format an RGB triple as an uppercase `#RRGGBB` string.
pub fn format_rgb(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}

/// Combine two hex digits into a byte (0-255)
fn parse_hex_pair(high: char, low: char) -> Result<u8, ColorError> {
    Ok(parse_hex_digit(high)? * 16 + parse_hex_digit(low)?)
}
