//! JSON save-file store.
//!
//! The save file is a single JSON object with exactly three top-level
//! fields (`heroes`, `inventory`, `base_status`), the serde shape of
//! [`GameState`]. Writes go through a temp file plus atomic rename so a
//! crash mid-save never leaves a truncated file behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use game_core::GameState;

/// Persistence failures that are actual errors.
///
/// A missing or malformed save file is deliberately NOT here: both degrade
/// to a default state and are reported through [`LoadSource`] instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("save file I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("save file serialization error: {0}")]
    Serialization(String),
}

/// Where a loaded state came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from an existing save file.
    Loaded,
    /// No save file existed; this is a fresh default state.
    NotFound,
    /// The file existed but was unreadable as a game state; reset to default.
    Corrupt,
}

/// A load result: the state to use plus how it was obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedState {
    pub state: GameState,
    pub source: LoadSource,
}

/// File-backed store for one save slot.
#[derive(Debug)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the save slot.
    ///
    /// Missing file and malformed content both yield a default state with
    /// the matching [`LoadSource`]; neither escapes as an error. Any other
    /// I/O failure is returned as [`StoreError::Io`].
    pub fn load(&self) -> Result<LoadedState, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("no save file at {}, starting fresh", self.path.display());
                return Ok(LoadedState {
                    state: GameState::default(),
                    source: LoadSource::NotFound,
                });
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        match serde_json::from_str::<GameState>(&content) {
            Ok(state) => match state.validate() {
                Ok(()) => {
                    tracing::debug!("loaded game state from {}", self.path.display());
                    Ok(LoadedState {
                        state,
                        source: LoadSource::Loaded,
                    })
                }
                Err(violation) => {
                    tracing::warn!(
                        error = %violation,
                        "save file at {} violates state invariants, resetting",
                        self.path.display()
                    );
                    Ok(LoadedState {
                        state: GameState::default(),
                        source: LoadSource::Corrupt,
                    })
                }
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "save file at {} is not valid JSON, resetting",
                    self.path.display()
                );
                Ok(LoadedState {
                    state: GameState::default(),
                    source: LoadSource::Corrupt,
                })
            }
        }
    }

    /// Writes the state to the save slot, replacing any previous content.
    ///
    /// Never mutates in-memory state, so a failed save needs no rollback.
    pub fn save(&self, state: &GameState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("saved game state to {}", self.path.display());
        Ok(())
    }
}
