//! Plain-text console front-end: a menu loop over stdin/stdout that reads one
//! command at a time and renders the inventory as tab-separated rows.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use forms::{parse_id, parse_new_id, require_text, CdForm, FieldError, MAX_CD_ID, MIN_CD_ID};
pub use screens::Command;
pub use terminal::{run_app, stdio_console, Console, StatusKind};
