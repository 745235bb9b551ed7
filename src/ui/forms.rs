use std::io::{BufRead, Write};
use std::num::ParseIntError;

use anyhow::Result;
use log::debug;
use thiserror::Error;

use crate::models::Cd;

use super::helpers::field_error_details;
use super::terminal::{Console, StatusKind};

/// Smallest id accepted from the entry form.
pub const MIN_CD_ID: i64 = 1;
/// Largest id accepted from the entry form.
pub const MAX_CD_ID: i64 = 499;

/// Recoverable problems with a single typed-in value. The console reports
/// them and asks for the same field again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("That is not an Integer!")]
    NotAnInteger {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("CD ID must be greater than 0 and less than 500!")]
    OutOfRange(i64),

    #[error("You must enter {0}!")]
    Empty(&'static str),
}

/// Parse a raw id entry. Surrounding whitespace is ignored.
pub fn parse_id(raw: &str) -> Result<i64, FieldError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|source| FieldError::NotAnInteger {
            input: trimmed.to_string(),
            source,
        })
}

/// Parse an id for a new CD, enforcing the entry range.
pub fn parse_new_id(raw: &str) -> Result<i64, FieldError> {
    let id = parse_id(raw)?;
    if (MIN_CD_ID..=MAX_CD_ID).contains(&id) {
        Ok(id)
    } else {
        Err(FieldError::OutOfRange(id))
    }
}

/// Trim a text entry and reject it when nothing is left. `what` names the
/// field in the error, e.g. "a Title".
pub fn require_text(raw: &str, what: &'static str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(FieldError::Empty(what))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Raw answers collected for a new CD.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CdForm {
    pub id: String,
    pub title: String,
    pub artist: String,
}

impl CdForm {
    /// Validate every field and return the typed record ready for the
    /// inventory.
    pub fn parse_inputs(&self) -> Result<Cd, FieldError> {
        let id = parse_new_id(&self.id)?;
        let title = require_text(&self.title, "a Title")?;
        let artist = require_text(&self.artist, "an Artist")?;
        Ok(Cd { id, title, artist })
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Ask for id, title and artist in turn. Each field is re-prompted on its
    /// own until it validates; fields already accepted are kept.
    pub fn prompt_new_record(&mut self) -> Result<CdForm> {
        let id = self.prompt_field("Enter ID: ", parse_new_id)?;
        let title = self.prompt_field("What is the CDs title? ", |raw| {
            require_text(raw, "a Title")
        })?;
        let artist = self.prompt_field("What is the Artist's name? ", |raw| {
            require_text(raw, "an Artist")
        })?;

        Ok(CdForm {
            id: id.to_string(),
            title,
            artist,
        })
    }

    fn prompt_field<T>(
        &mut self,
        label: &str,
        validate: impl Fn(&str) -> Result<T, FieldError>,
    ) -> Result<T> {
        loop {
            let raw = self.prompt(label)?;
            match validate(&raw) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!("rejected input {raw:?}: {err}");
                    self.report_field_error(&err)?;
                }
            }
        }
    }

    /// Print a validation problem plus its underlying detail, if any.
    pub(crate) fn report_field_error(&mut self, err: &FieldError) -> Result<()> {
        self.blank()?;
        self.status(err, StatusKind::Error)?;
        if let Some(details) = field_error_details(err) {
            self.line(format!("Build in error info: {details}"))?;
        }
        Ok(())
    }
}
