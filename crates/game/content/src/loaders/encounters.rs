//! Encounter book loader.

use std::path::Path;

use game_core::EncounterDef;
use serde::{Deserialize, Serialize};

use crate::builtin::EncounterBook;
use crate::loaders::{LoadResult, read_file};

/// Encounter list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterFile {
    pub encounters: Vec<EncounterDef>,
}

/// Loader for encounter definitions from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    /// Load an encounter book from a RON file.
    pub fn load(path: &Path) -> LoadResult<EncounterBook> {
        let content = read_file(path)?;
        let file: EncounterFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter RON: {}", e))?;

        Ok(EncounterBook::new(file.encounters))
    }
}
