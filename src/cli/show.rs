//! `pcx show`: render a puzzle file in the terminal.

use std::path::Path;
use std::process::ExitCode;

use crate::game::Game;
use crate::puzzle::load_puzzle;
use crate::terminal::{
    render_board_ansi, render_board_plain, render_game_ansi, render_game_plain,
};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the show command
pub fn run_show(input: &Path, clues: bool, no_color: bool) -> ExitCode {
    let board = match load_puzzle(input) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: {}: {}", input.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let colored = !no_color && atty::is(atty::Stream::Stdout);
    let output = if clues {
        // Player view: a fresh session shows the keys, a blank board, and
        // the auto-crossed empty lines.
        let game = Game::new(board);
        if colored {
            render_game_ansi(&game)
        } else {
            render_game_plain(&game)
        }
    } else if colored {
        render_board_ansi(&board, None)
    } else {
        render_board_plain(&board, None)
    };

    print!("{}", output);
    ExitCode::from(EXIT_SUCCESS)
}
