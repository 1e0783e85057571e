//! Configuration loading and discovery for `picrox.toml`
//!
//! A config file sets the puzzle and palette directories plus the new-game
//! defaults. Discovery walks up from the working directory, falling back to
//! `$XDG_CONFIG_HOME/picrox/picrox.toml`. No config file means defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Name of the config file.
pub const CONFIG_FILE: &str = "picrox.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("failed to parse picrox.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// New-game defaults: the initial 15x10 single-color board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewGameConfig {
    /// Board rows.
    pub rows: usize,
    /// Board columns.
    pub cols: usize,
    /// Palette preset size (1..=3).
    pub colors: u8,
}

impl Default for NewGameConfig {
    fn default() -> Self {
        Self { rows: 15, cols: 10, colors: 1 }
    }
}

/// Parsed `picrox.toml`. Every field is optional in the file.
///
/// ```toml
/// puzzle_dir = "puzzles"
/// palette_dir = "palettes"
///
/// [new_game]
/// rows = 15
/// cols = 10
/// colors = 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for saved puzzles.
    pub puzzle_dir: PathBuf,
    /// Directory for saved palettes.
    pub palette_dir: PathBuf,
    /// Defaults for `pcx new`.
    pub new_game: NewGameConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            puzzle_dir: PathBuf::from("puzzles"),
            palette_dir: PathBuf::from("palettes"),
            new_game: NewGameConfig::default(),
        }
    }
}

/// Find picrox.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from the current directory looking for picrox.toml
/// 2. Check `$XDG_CONFIG_HOME/picrox/picrox.toml` (or
///    `~/.config/picrox/picrox.toml`)
///
/// Returns `None` if no config file is found.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }
    find_xdg_config()
}

/// Find picrox.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("picrox").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find picrox.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a picrox.toml file.
///
/// If a path is provided, loads from that file. Otherwise uses
/// [`find_config`] to locate one; no file found means defaults.
///
/// # Errors
///
/// Returns [`ConfigError`] if an existing file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(Config::default()),
    }
}

fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Resolve a path relative to the directory holding the config file.
///
/// Absolute paths come back unchanged; relative ones are joined onto the
/// config root.
pub fn resolve_path(config_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        config_root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.puzzle_dir, PathBuf::from("puzzles"));
        assert_eq!(config.palette_dir, PathBuf::from("palettes"));
        assert_eq!(config.new_game, NewGameConfig { rows: 15, cols: 10, colors: 1 });
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(b"puzzle_dir = \"p\"")
            .expect("should write config content");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        File::create(&config_path).expect("should create config file");

        let subdir = temp.path().join("puzzles").join("seasonal");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        assert_eq!(find_config_from(temp.path().to_path_buf()), None);
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(
                br#"
puzzle_dir = "my_puzzles"
palette_dir = "my_palettes"

[new_game]
rows = 25
cols = 20
colors = 3
"#,
            )
            .expect("should write config content");

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.puzzle_dir, PathBuf::from("my_puzzles"));
        assert_eq!(config.palette_dir, PathBuf::from("my_palettes"));
        assert_eq!(config.new_game, NewGameConfig { rows: 25, cols: 20, colors: 3 });
    }

    #[test]
    fn test_absent_fields_fall_back_to_defaults() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(b"puzzle_dir = \"elsewhere\"\n")
            .expect("should write config content");

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.puzzle_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.palette_dir, PathBuf::from("palettes"));
        assert_eq!(config.new_game, NewGameConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_toml_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(b"this is not valid toml {{{")
            .expect("should write invalid config");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_resolve_path() {
        let root = Path::new("/project");
        assert_eq!(resolve_path(root, Path::new("/other/path")), PathBuf::from("/other/path"));
        assert_eq!(resolve_path(root, Path::new("puzzles")), PathBuf::from("/project/puzzles"));
    }
}
