//! Fixed text screens: the main menu, the command key table, and the
//! inventory listing.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::models::Inventory;

use super::helpers::{rule, RULE_WIDTH};
use super::terminal::Console;

/// Menu commands, each bound to a single lowercase key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Load,
    Add,
    Display,
    Delete,
    Save,
    Exit,
}

impl Command {
    /// Every command in menu order.
    pub const ALL: [Command; 6] = [
        Command::Load,
        Command::Add,
        Command::Display,
        Command::Delete,
        Command::Save,
        Command::Exit,
    ];

    pub fn key(self) -> char {
        match self {
            Command::Load => 'l',
            Command::Add => 'a',
            Command::Display => 'i',
            Command::Delete => 'd',
            Command::Save => 's',
            Command::Exit => 'x',
        }
    }

    fn description(self) -> &'static str {
        match self {
            Command::Load => "load Inventory from file",
            Command::Add => "Add CD",
            Command::Display => "Display Current Inventory",
            Command::Delete => "delete CD from Inventory",
            Command::Save => "Save Inventory to file",
            Command::Exit => "exit",
        }
    }

    /// Match raw input against the key table, ignoring case and surrounding
    /// whitespace.
    pub fn parse(input: &str) -> Option<Command> {
        let normalized = input.trim().to_lowercase();
        let mut chars = normalized.chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Command::ALL.into_iter().find(|command| command.key() == key)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn print_menu(&mut self) -> Result<()> {
        self.line("Menu")?;
        self.blank()?;
        for command in Command::ALL {
            self.line(format!("[{}] {}", command.key(), command.description()))?;
        }
        self.blank()
    }

    /// Keep asking until the answer names one of the menu commands.
    pub fn read_command(&mut self) -> Result<Command> {
        let keys = Command::ALL.map(|command| command.key().to_string());
        let label = format!(
            "Which operation would you like to perform? [{} or {}]: ",
            keys[..keys.len() - 1].join(", "),
            keys[keys.len() - 1]
        );
        loop {
            let answer = self.prompt(&label)?;
            if let Some(command) = Command::parse(&answer) {
                self.blank()?;
                return Ok(command);
            }
        }
    }

    /// Header, one row per CD in table order, footer.
    pub fn show_inventory(&mut self, inventory: &Inventory) -> Result<()> {
        self.line("======= The Current Inventory: =======")?;
        self.line("ID\tCD Title (by: Artist)")?;
        self.blank()?;
        for cd in inventory.iter() {
            self.line(cd)?;
        }
        self.line(rule(RULE_WIDTH))
    }
}
