use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};

use crate::db::{load_inventory, save_inventory};
use crate::models::{Cd, Inventory};

use super::forms::{parse_id, CdForm};
use super::helpers::confirms;
use super::screens::Command;
use super::terminal::{Console, StatusKind};

/// Session state: the console, the inventory table, and the file it mirrors.
/// The app owns the inventory outright; persistence and rendering only ever
/// borrow it.
pub struct App<R, W> {
    console: Console<R, W>,
    inventory: Inventory,
    data_file: PathBuf,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Load the inventory from `data_file` before any menu is shown. A load
    /// failure is returned to the caller and ends the session.
    pub fn start(console: Console<R, W>, data_file: PathBuf) -> Result<Self> {
        let mut inventory = Inventory::new();
        load_inventory(&data_file, &mut inventory)?;
        Ok(Self {
            console,
            inventory,
            data_file,
        })
    }

    /// Show the menu and dispatch commands until the user exits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.print_menu()?;
            let command = self.console.read_command()?;
            if self.handle_command(command)? {
                info!("exiting with {} CDs in memory", self.inventory.len());
                return Ok(());
            }
        }
    }

    /// Execute one command. Returns `true` when the session should end.
    pub fn handle_command(&mut self, command: Command) -> Result<bool> {
        debug!("dispatching {command:?}");
        match command {
            Command::Exit => return Ok(true),
            Command::Load => self.reload()?,
            Command::Add => {
                let form = self.console.prompt_new_record()?;
                self.add_from_form(&form)?;
            }
            Command::Display => self.console.show_inventory(&self.inventory)?,
            Command::Delete => self.delete_prompt()?,
            Command::Save => self.save()?,
        }
        Ok(false)
    }

    /// Add a validated entry and show the updated table. A form that does not
    /// validate is reported and nothing is added.
    pub fn add_from_form(&mut self, form: &CdForm) -> Result<()> {
        match form.parse_inputs() {
            Ok(cd) => self.add(cd),
            Err(err) => self.console.report_field_error(&err),
        }
    }

    fn add(&mut self, cd: Cd) -> Result<()> {
        debug!("adding CD {}", cd.id);
        self.inventory.add(cd);
        self.console.show_inventory(&self.inventory)
    }

    /// Remove the first CD with `id`, report the outcome, and show the table.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        match self.inventory.delete(id) {
            Some(cd) => {
                debug!("removed CD {} ({})", cd.id, cd.title);
                self.console.status("The CD was removed", StatusKind::Info)?;
            }
            None => {
                self.console.blank()?;
                self.console
                    .status("Could not find this CD!!!", StatusKind::Error)?;
                self.console.blank()?;
            }
        }
        self.console.show_inventory(&self.inventory)
    }

    fn delete_prompt(&mut self) -> Result<()> {
        self.console.show_inventory(&self.inventory)?;
        let answer = self
            .console
            .prompt("Which ID would you like to delete? ")?;
        match parse_id(&answer) {
            Ok(id) => self.delete(id),
            Err(err) => self.console.report_field_error(&err),
        }
    }

    fn reload(&mut self) -> Result<()> {
        self.console.line(
            "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.",
        )?;
        let answer = self.console.prompt(
            "type \"yes\" to continue and reload from file. otherwise reload will be canceled: ",
        )?;
        if confirms(&answer, "yes") {
            self.console.line("reloading...")?;
            load_inventory(&self.data_file, &mut self.inventory)?;
        } else {
            self.console.acknowledge(
                "canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.",
            )?;
        }
        self.console.show_inventory(&self.inventory)
    }

    fn save(&mut self) -> Result<()> {
        self.console.show_inventory(&self.inventory)?;
        let answer = self.console.prompt("Save this inventory to file? [y/n] ")?;
        if confirms(&answer, "y") {
            save_inventory(&self.data_file, &self.inventory)?;
            info!(
                "saved {} CDs to {}",
                self.inventory.len(),
                self.data_file.display()
            );
        } else {
            self.console.acknowledge(
                "The inventory was NOT saved to file. Press [ENTER] to return to the menu.",
            )?;
        }
        Ok(())
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }
}
