use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

use super::app::App;

/// Severity of a one-line status message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn color(self) -> Color {
        match self {
            StatusKind::Info => Color::Green,
            StatusKind::Error => Color::Red,
        }
    }
}

/// Line-oriented console over any reader/writer pair. The app only ever talks
/// to this type, which keeps scripted sessions in tests identical to real
/// terminal runs.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Plain-text console; colour is opt-in through [`Console::with_color`].
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Write one full line.
    pub fn line(&mut self, text: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write to console")
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    /// Write a status line, coloured by severity when the console allows it.
    pub fn status(&mut self, text: impl fmt::Display, kind: StatusKind) -> Result<()> {
        if self.color {
            let styled = text.to_string().with(kind.color());
            writeln!(self.output, "{styled}").context("failed to write to console")
        } else {
            self.line(text)
        }
    }

    /// Show `label` without a newline and block until the user submits a line.
    /// The returned text has its line terminator stripped but is otherwise raw.
    /// Bytes that are not valid UTF-8 become replacement characters, so the
    /// answer goes through normal validation instead of failing the read.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush console")?;

        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("failed to read console input")?;
        if read == 0 {
            return Err(anyhow!("console input closed while waiting for an answer"));
        }
        let mut buf = String::from_utf8_lossy(&raw).into_owned();
        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        Ok(buf)
    }

    /// Wait for an Enter keypress after showing `label`.
    pub fn acknowledge(&mut self, label: &str) -> Result<()> {
        self.prompt(label).map(|_| ())
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

/// Console bound to the process stdin/stdout. Colour follows whether stdout is
/// attached to a terminal so redirected output stays plain.
pub fn stdio_console() -> Console<StdinLock<'static>, Stdout> {
    let stdout = io::stdout();
    let color = stdout.is_tty();
    Console::new(io::stdin().lock(), stdout).with_color(color)
}

/// Load the inventory from `data_file` and drive the menu loop on stdio until
/// the user exits.
pub fn run_app(data_file: PathBuf) -> Result<()> {
    let mut app = App::start(stdio_console(), data_file)?;
    app.run()
}
