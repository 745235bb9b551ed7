use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::models::{Cd, Inventory};

use super::connection::{open_for_write, read_data_file};

/// Replace the in-memory inventory with the contents of `path`.
///
/// The table is cleared before the file is touched, so on failure the caller
/// is left with an empty inventory and should treat the error as fatal.
/// Records are trusted as stored; no id range check happens here. Decoding
/// works on the bytes already read, so length prefixes larger than the file
/// fail as errors instead of being allocated up front.
pub fn load_inventory(path: &Path, inventory: &mut Inventory) -> Result<()> {
    inventory.clear();
    let bytes = read_data_file(path)?;
    let records: Vec<Cd> = bincode::deserialize(&bytes)
        .with_context(|| format!("failed to decode inventory from {}", path.display()))?;

    info!("loaded {} CDs from {}", records.len(), path.display());
    inventory.replace(records);
    Ok(())
}

/// Write the entire inventory to `path` in one pass, overwriting whatever was
/// there before.
pub fn save_inventory(path: &Path, inventory: &Inventory) -> Result<()> {
    let mut writer = open_for_write(path)?;
    bincode::serialize_into(&mut writer, inventory.records())
        .with_context(|| format!("failed to encode inventory to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;

    debug!("wrote {} CDs to {}", inventory.len(), path.display());
    Ok(())
}
