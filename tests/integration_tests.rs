//! Integration tests for the pcx CLI and the library game flow
//!
//! These tests verify end-to-end behavior: playing a session through the
//! library API, round-tripping puzzle files on disk, and running the built
//! binary against generated files.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

use picrox::drag::Point;
use picrox::game::{Game, PointerButton};
use picrox::models::{Board, Palette};
use picrox::puzzle::{load_puzzle, save_puzzle};

/// Run the pcx binary with the given arguments in `dir`.
fn run_pcx(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pcx"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to execute pcx")
}

/// Center of cell (row, col) under the default 18px metrics.
fn center(row: usize, col: usize) -> Point {
    Point::new(col as f32 * 18.0 + 9.0, row as f32 * 18.0 + 9.0)
}

#[test]
fn test_play_a_session_to_completion() {
    // Solution: a 5x5 plus sign in color 1 (no empty lines).
    let mut solution = Board::new(5, 5, Palette::default());
    for i in 0..5 {
        solution.set(2, i, 1).unwrap();
        solution.set(i, 2, 1).unwrap();
    }
    let mut game = Game::new(solution);

    // Drag the horizontal bar.
    assert!(game.pointer_down(center(2, 0), PointerButton::Paint).unwrap());
    for col in 1..5 {
        game.pointer_move(center(2, col)).unwrap();
    }
    assert!(!game.pointer_up().unwrap());

    // Drag the upper half of the vertical bar.
    assert!(game.pointer_down(center(0, 2), PointerButton::Paint).unwrap());
    game.pointer_move(center(1, 2)).unwrap();
    assert!(!game.pointer_up().unwrap());

    // Cross a cell as a note, then finish the lower half.
    assert!(game.pointer_down(center(4, 0), PointerButton::Cross).unwrap());
    assert!(!game.pointer_up().unwrap());
    assert!(game.cross().get(4, 0).unwrap());

    assert!(game.pointer_down(center(3, 2), PointerButton::Paint).unwrap());
    game.pointer_move(center(4, 2)).unwrap();
    assert!(game.pointer_up().unwrap());

    assert!(game.is_complete());
    assert!(game.player().matches(game.solution()));
    // Completion clears the note crosses and freezes the session.
    assert!(!game.cross().get(4, 0).unwrap());
    assert!(!game.pointer_down(center(0, 0), PointerButton::Paint).unwrap());
}

#[test]
fn test_save_and_load_round_trip_on_disk() {
    let temp = TempDir::new().expect("should create temp dir");
    let path = temp.path().join("saved.json");

    let mut board = Board::new(6, 8, Palette::preset(3).unwrap());
    board.randomize(99);
    save_puzzle(&path, &board).expect("should save puzzle");

    let loaded = load_puzzle(&path).expect("should load puzzle");
    assert!(loaded.matches(&board));
    assert_eq!(loaded.palette(), board.palette());
}

#[test]
fn test_cli_new_check_show_flow() {
    let temp = TempDir::new().expect("should create temp dir");

    let new = run_pcx(
        temp.path(),
        &["new", "--rows", "5", "--cols", "10", "--colors", "2", "--seed", "7", "-o", "puzzle.json"],
    );
    assert!(new.status.success(), "new failed: {}", String::from_utf8_lossy(&new.stderr));
    assert!(temp.path().join("puzzle.json").exists());

    let check = run_pcx(temp.path(), &["check", "puzzle.json"]);
    assert!(check.status.success(), "check failed: {}", String::from_utf8_lossy(&check.stderr));
    let stdout = String::from_utf8_lossy(&check.stdout);
    assert!(stdout.contains("OK"));
    assert!(stdout.contains("5 rows x 10 columns"));
    assert!(stdout.contains("2 colors"));

    let show = run_pcx(temp.path(), &["show", "puzzle.json", "--no-color"]);
    assert!(show.status.success());
    let rendered = String::from_utf8_lossy(&show.stdout);
    assert!(!rendered.is_empty());
    assert!(!rendered.contains('\x1b'));

    let clues = run_pcx(temp.path(), &["show", "puzzle.json", "--clues", "--no-color"]);
    assert!(clues.status.success());
    // The player view never shows painted cells.
    let clue_view = String::from_utf8_lossy(&clues.stdout);
    let grid_lines: Vec<&str> = clue_view.lines().rev().take(5).collect();
    assert!(grid_lines.iter().all(|line| !line.ends_with('1') && !line.ends_with('2')));
}

#[test]
fn test_cli_new_is_deterministic_per_seed() {
    let temp = TempDir::new().expect("should create temp dir");
    for name in ["a.json", "b.json"] {
        let output = run_pcx(
            temp.path(),
            &["new", "--rows", "5", "--cols", "5", "--seed", "42", "-o", name],
        );
        assert!(output.status.success());
    }
    let a = load_puzzle(&temp.path().join("a.json")).expect("should load");
    let b = load_puzzle(&temp.path().join("b.json")).expect("should load");
    assert!(a.matches(&b));
}

#[test]
fn test_cli_new_uses_config_directories() {
    let temp = TempDir::new().expect("should create temp dir");
    fs::write(
        temp.path().join("picrox.toml"),
        "puzzle_dir = \"my_puzzles\"\n\n[new_game]\nrows = 5\ncols = 5\ncolors = 1\n",
    )
    .expect("should write config");

    let output = run_pcx(temp.path(), &["new", "--seed", "3"]);
    assert!(output.status.success(), "new failed: {}", String::from_utf8_lossy(&output.stderr));
    assert!(temp.path().join("my_puzzles").join("puzzle_5x5_3.json").exists());

    let list = run_pcx(temp.path(), &["list"]);
    assert!(list.status.success());
    let stdout = String::from_utf8_lossy(&list.stdout);
    assert!(stdout.contains("puzzle_5x5_3.json"));
}

#[test]
fn test_cli_new_rejects_out_of_range_dimensions() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = run_pcx(temp.path(), &["new", "--rows", "3", "--cols", "5"]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_pcx(temp.path(), &["new", "--rows", "5", "--cols", "26"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_check_rejects_malformed_file() {
    let temp = TempDir::new().expect("should create temp dir");
    let path = temp.path().join("broken.json");

    // Row length does not match the declared dimensions.
    fs::write(
        &path,
        r#"{
            "dimensions": [2, 2],
            "rows": [[1, 0], [0]],
            "palette": {
                "colors": [[40, 40, 40]],
                "empty_color": [220, 220, 220],
                "background_color": [240, 240, 240],
                "marking_color": [230, 100, 100]
            }
        }"#,
    )
    .expect("should write file");

    let output = run_pcx(temp.path(), &["check", "broken.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("row 1"));

    fs::write(&path, "not json at all").expect("should write file");
    let output = run_pcx(temp.path(), &["check", "broken.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_palette_create_and_reuse() {
    let temp = TempDir::new().expect("should create temp dir");

    let output = run_pcx(
        temp.path(),
        &["palette", "new", "sea breeze", "--colors", "#E65050,#A0DCDC", "--marking", "#101010"],
    );
    assert!(output.status.success(), "palette failed: {}", String::from_utf8_lossy(&output.stderr));
    let path = temp.path().join("palettes").join("sea_breeze.json");
    assert!(path.exists());

    let show = run_pcx(temp.path(), &["palette", "show", "palettes/sea_breeze.json"]);
    assert!(show.status.success());
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(stdout.contains("#E65050"));
    assert!(stdout.contains("#A0DCDC"));
    assert!(stdout.contains("#101010"));

    // The created palette drives puzzle generation.
    let new = run_pcx(
        temp.path(),
        &[
            "new",
            "--rows",
            "5",
            "--cols",
            "5",
            "--palette",
            "palettes/sea_breeze.json",
            "--seed",
            "1",
            "-o",
            "with_palette.json",
        ],
    );
    assert!(new.status.success());
    let board = load_puzzle(&temp.path().join("with_palette.json")).expect("should load");
    assert_eq!(board.palette().size(), 2);
    assert_eq!(board.palette().paint_colors()[0], [230, 80, 80]);
}

#[test]
fn test_cli_palette_rejects_bad_input() {
    let temp = TempDir::new().expect("should create temp dir");

    let output = run_pcx(temp.path(), &["palette", "new", "bad/name", "--colors", "#FFFFFF"]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_pcx(temp.path(), &["palette", "new", "ok", "--colors", "red"]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_pcx(
        temp.path(),
        &["palette", "new", "ok", "--colors", "#000000,#000001,#000002,#000003,#000004,#000005"],
    );
    assert_eq!(output.status.code(), Some(2));
}
