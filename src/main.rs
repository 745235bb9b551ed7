//! Binary entry point: bring up logging, load the inventory file from the
//! working directory, and run the menu loop until the user exits.
use cd_inventory::{default_data_path, run_app};
use env_logger::Env;

/// A missing or unreadable data file, or a failed save, is returned from here
/// so the process prints the error chain and exits non-zero.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    run_app(default_data_path())
}
