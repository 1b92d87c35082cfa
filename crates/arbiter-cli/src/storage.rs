//! JSON save files for games in progress.
//!
//! A save is the engine snapshot serialized as pretty-printed JSON,
//! so saved games survive upgrades that do not touch the snapshot
//! shape and can be inspected by hand.

use arbiter_engine::{Game, GameSnapshot};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from reading or writing save files.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access save file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode or decode saved game: {0}")]
    Format(#[from] serde_json::Error),
}

/// Writes the game to a JSON save file, replacing any existing file.
///
/// # Arguments
///
/// * `path` - The filesystem path the save is written to.
/// * `game` - The game to save.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Example
///
/// ```ignore
/// storage::save_game("arbiter_save.json", &game)?;
/// let resumed = storage::load_game("arbiter_save.json")?;
/// ```
pub fn save_game<P: AsRef<Path>>(path: P, game: &Game) -> Result<(), StorageError> {
    let text = serde_json::to_string_pretty(&game.snapshot())?;
    fs::write(path, text)?;
    Ok(())
}

/// Reads a game back from a JSON save file.
///
/// # Arguments
///
/// * `path` - The filesystem path of an existing save.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a
/// valid saved game.
pub fn load_game<P: AsRef<Path>>(path: P) -> Result<Game, StorageError> {
    let text = fs::read_to_string(path)?;
    let snapshot: GameSnapshot = serde_json::from_str(&text)?;
    Ok(Game::from_snapshot(&snapshot))
}
