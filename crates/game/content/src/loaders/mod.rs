//! Content loaders for reading game data from RON files.
//!
//! Loaders convert data files into the oracle implementations defined in
//! [`crate::builtin`], so a data directory can override any part of the
//! built-in content.

mod encounters;
mod factory;
mod items;
mod tables;

pub use encounters::EncounterLoader;
pub use factory::ContentFactory;
pub use items::ItemLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
