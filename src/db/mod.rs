//! Persistence for the inventory: one binary file, read and written whole.

mod connection;
mod inventory;

pub use connection::{default_data_path, DATA_FILE_NAME};
pub use inventory::{load_inventory, save_inventory};
