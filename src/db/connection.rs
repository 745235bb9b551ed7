use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Binary data file name, resolved against the working directory.
pub const DATA_FILE_NAME: &str = "CDInventory.dat";

/// Path to the inventory file used when nothing else is specified.
pub fn default_data_path() -> PathBuf {
    PathBuf::from(DATA_FILE_NAME)
}

/// Read the whole data file into memory. A missing file is reported with a
/// hint to create it first, since the program never bootstraps an empty
/// inventory.
pub(crate) fn read_data_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .with_context(|| format!("You need to create a {} file first!", path.display()))
}

/// Open the data file for a full rewrite, creating it when absent and
/// truncating any previous content.
pub(crate) fn open_for_write(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("{} could not be opened for writing", path.display()))?;
    Ok(BufWriter::new(file))
}
