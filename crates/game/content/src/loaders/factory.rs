//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use crate::builtin::{BalanceTables, EncounterBook, GameContent, ItemCatalog};
use crate::loaders::{EncounterLoader, ItemLoader, LoadResult, TablesLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── items.ron
/// ├── encounters.ron
/// └── tables.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load the encounter book from `encounters.ron`.
    pub fn load_encounters(&self) -> LoadResult<EncounterBook> {
        EncounterLoader::load(&self.data_dir.join("encounters.ron"))
    }

    /// Load balance tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<BalanceTables> {
        TablesLoader::load(&self.data_dir.join("tables.ron"))
    }

    /// Load the complete content set from the data directory.
    pub fn load_all(&self) -> LoadResult<GameContent> {
        Ok(GameContent {
            items: self.load_items()?,
            encounters: self.load_encounters()?,
            tables: self.load_tables()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_points_at_its_data_dir() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
