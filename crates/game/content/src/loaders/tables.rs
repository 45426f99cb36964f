//! Balance tables loader.

use std::path::Path;

use crate::builtin::BalanceTables;
use crate::loaders::{LoadResult, read_file};

/// Loader for balance tables from RON files.
///
/// The file deserializes straight into [`BalanceTables`]; omitted sections
/// fall back to empty via `serde(default)`.
pub struct TablesLoader;

impl TablesLoader {
    /// Load balance tables from a RON file.
    pub fn load(path: &Path) -> LoadResult<BalanceTables> {
        let content = read_file(path)?;
        let tables: BalanceTables = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse balance tables RON: {}", e))?;

        Ok(tables)
    }
}
