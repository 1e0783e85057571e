//! Terminal rendering for boards and clue keys.
//!
//! Renders a board as a grid of two-character cells with 24-bit ANSI
//! background colors, column keys stacked above the grid, and row keys in a
//! left gutter. Each key number is printed in its island's color; the
//! empty-line sentinel prints `0`. Crossed cells show `><` in the palette's
//! marking color over the empty color.
//!
//! A plain renderer covers terminals without color support: paint indices
//! print as digits (then letters), empty cells as `.`, crossed cells as `x`.

use crate::game::Game;
use crate::key::{Axis, KeyIsland};
use crate::models::{Board, CrossGrid, Rgb};

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert an RGB triple to an ANSI 24-bit background escape sequence.
///
/// # Examples
///
/// ```
/// use picrox::terminal::color_to_ansi_bg;
///
/// assert_eq!(color_to_ansi_bg([255, 0, 0]), "\x1b[48;2;255;0;0m");
/// ```
pub fn color_to_ansi_bg(rgb: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", rgb[0], rgb[1], rgb[2])
}

/// Convert an RGB triple to an ANSI 24-bit foreground escape sequence.
pub fn color_to_ansi_fg(rgb: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", rgb[0], rgb[1], rgb[2])
}

/// Render a board with ANSI colors, keys derived from its own cells.
///
/// `cross` adds `><` marks over crossed cells; pass `None` when rendering a
/// bare board (e.g. a solution preview).
pub fn render_board_ansi(board: &Board, cross: Option<&CrossGrid>) -> String {
    render(board, board, cross, true)
}

/// Render a board as plain text, keys derived from its own cells.
pub fn render_board_plain(board: &Board, cross: Option<&CrossGrid>) -> String {
    render(board, board, cross, false)
}

/// Render the player view of a session with ANSI colors: the player's
/// cells and crosses under the solution's clue keys.
pub fn render_game_ansi(game: &Game) -> String {
    render(game.player(), game.solution(), Some(game.cross()), true)
}

/// Render the player view of a session as plain text.
pub fn render_game_plain(game: &Game) -> String {
    render(game.player(), game.solution(), Some(game.cross()), false)
}

/// The text symbol for a cell value in plain mode: `.` for empty, digits
/// 1-9, then letters for larger palettes.
fn plain_symbol(value: u8) -> char {
    match value {
        0 => '.',
        1..=9 => (b'0' + value) as char,
        10..=35 => (b'a' + value - 10) as char,
        _ => '#',
    }
}

/// One key number plus the island color it prints in; the empty-line
/// sentinel carries no color.
fn key_labels(key: &[KeyIsland]) -> Vec<(String, Option<u8>)> {
    key.iter()
        .map(|island| {
            if island.is_empty_line() {
                ("0".to_string(), None)
            } else {
                (island.length.to_string(), Some(island.color_index))
            }
        })
        .collect()
}

fn push_label(out: &mut String, board: &Board, text: &str, color_index: Option<u8>, colored: bool) {
    match color_index.filter(|_| colored).and_then(|i| board.palette().color(i).ok()) {
        Some(rgb) => {
            out.push_str(&color_to_ansi_fg(rgb));
            out.push_str(text);
            out.push_str(ANSI_RESET);
        }
        None => out.push_str(text),
    }
}

/// `board` supplies the cells, `key_source` the clue keys; both share
/// dimensions and palette.
fn render(board: &Board, key_source: &Board, cross: Option<&CrossGrid>, colored: bool) -> String {
    let (rows, cols) = board.dimensions();
    let palette = board.palette();
    let row_keys: Vec<_> = key_source.keys(Axis::Row).iter().map(|k| key_labels(k)).collect();
    let col_keys: Vec<_> = key_source.keys(Axis::Column).iter().map(|k| key_labels(k)).collect();

    // Row keys go in a left gutter sized to the widest key line.
    let gutter = row_keys
        .iter()
        .map(|labels| labels.iter().map(|(t, _)| t.len() + 1).sum::<usize>())
        .max()
        .unwrap_or(0);
    let key_height = col_keys.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = String::new();

    // Column keys, stacked above the grid and bottom-aligned.
    for level in 0..key_height {
        out.push_str(&" ".repeat(gutter));
        for key in &col_keys {
            // Bottom-aligned: shorter keys leave their upper levels blank.
            let offset = key_height - key.len();
            match level.checked_sub(offset).and_then(|i| key.get(i)) {
                Some((text, color_index)) => {
                    let pad = 2usize.saturating_sub(text.len());
                    out.push_str(&" ".repeat(pad));
                    push_label(&mut out, board, text, *color_index, colored);
                }
                None => out.push_str("  "),
            }
        }
        out.push('\n');
    }

    // Grid rows with the key gutter on the left.
    for row in 0..rows {
        let labels = &row_keys[row];
        let used: usize = labels.iter().map(|(t, _)| t.len() + 1).sum();
        out.push_str(&" ".repeat(gutter - used));
        for (text, color_index) in labels {
            push_label(&mut out, board, text, *color_index, colored);
            out.push(' ');
        }

        for col in 0..cols {
            let value = board.get(row, col).unwrap_or(0);
            let crossed = cross.map_or(false, |c| c.get(row, col).unwrap_or(false));
            if colored {
                if crossed {
                    out.push_str(&color_to_ansi_bg(palette.empty_color()));
                    out.push_str(&color_to_ansi_fg(palette.marking_color()));
                    out.push_str("><");
                } else {
                    let rgb = palette.color(value).unwrap_or(palette.empty_color());
                    out.push_str(&color_to_ansi_bg(rgb));
                    out.push_str("  ");
                }
                out.push_str(ANSI_RESET);
            } else if crossed {
                out.push_str(" x");
            } else {
                out.push(' ');
                out.push(plain_symbol(value));
            }
        }
        out.push('\n');
    }

    out
}
