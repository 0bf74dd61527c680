//! Loading raw bridge exports and normalizing them into records.

mod normalize;
mod reader;

pub use normalize::{normalize, normalize_row, parse_spans};
pub use reader::{load_rows, read_rows};

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::PolicyConfig;
use crate::inventory::BridgeInventory;

/// Read, normalize and index a bridge CSV export in one go.
pub fn load_inventory(path: &Path, config: PolicyConfig) -> Result<BridgeInventory> {
    let rows = load_rows(path)?;
    let records = normalize(&rows)
        .with_context(|| format!("Failed to normalize {}", path.display()))?;
    Ok(BridgeInventory::with_config(records, config))
}
