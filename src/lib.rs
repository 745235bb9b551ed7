//! Core library surface for the CD inventory console application.
//!
//! The binary only wires logging and the default data file to [`run_app`];
//! everything else lives here so it can be driven from tests with an
//! in-memory console.
pub mod db;
pub mod models;
pub mod ui;

/// Whole-file persistence of the inventory.
pub use db::{default_data_path, load_inventory, save_inventory, DATA_FILE_NAME};

/// The record type and the ordered table that holds them.
pub use models::{Cd, Inventory};

/// The interactive application entry point and state container.
pub use ui::{run_app, App, Command, Console};
