//! Line-oriented interactive session over a [`BookingController`].

use std::io::Write as _;

use chrono::NaiveDate;
use client_core::BookingController;
use shared::{dates::parse_date, domain::BookingId};
use thiserror::Error;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use crate::render::render;

pub const HELP: &str = "\
commands:
  list                  reload bookings
  name <text>           set the name field
  start <date|->        set or clear the start date (YYYY-MM-DD)
  end <date|->          set or clear the end date
  create                submit the form as a new booking
  edit <id|#n>          load a booking into the form for editing
  save                  save the form onto the booking being edited
  cancel                stop editing
  delete <id|#n>        delete a booking
  show                  print the current view
  help                  print this text
  quit                  leave";

/// A booking addressed either by id or by its 1-based position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRef {
    Id(BookingId),
    Position(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Name(String),
    Start(Option<NaiveDate>),
    End(Option<NaiveDate>),
    Create,
    Edit(RowRef),
    Save,
    Cancel,
    Delete(RowRef),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid row number '{0}'")]
    InvalidRow(String),
    #[error("no listed booking matches '{0}'")]
    NoSuchBooking(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Render,
    Help,
    Quit,
}

fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, ShellError> {
    if raw == "-" {
        return Ok(None);
    }
    parse_date(raw)
        .map(Some)
        .map_err(|_| ShellError::InvalidDate(raw.to_string()))
}

fn parse_row_ref(command: &'static str, raw: &str) -> Result<RowRef, ShellError> {
    if raw.is_empty() {
        return Err(ShellError::MissingArgument(command));
    }
    match raw.strip_prefix('#') {
        Some(position) => position
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(RowRef::Position)
            .ok_or_else(|| ShellError::InvalidRow(raw.to_string())),
        None => Ok(RowRef::Id(BookingId::new(raw))),
    }
}

/// Blank lines parse to `None`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, ShellError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => ShellCommand::List,
        "name" => {
            if rest.is_empty() {
                return Err(ShellError::MissingArgument("name"));
            }
            ShellCommand::Name(rest.to_string())
        }
        "start" => {
            if rest.is_empty() {
                return Err(ShellError::MissingArgument("start"));
            }
            ShellCommand::Start(parse_optional_date(rest)?)
        }
        "end" => {
            if rest.is_empty() {
                return Err(ShellError::MissingArgument("end"));
            }
            ShellCommand::End(parse_optional_date(rest)?)
        }
        "create" => ShellCommand::Create,
        "edit" => ShellCommand::Edit(parse_row_ref("edit", rest)?),
        "save" => ShellCommand::Save,
        "cancel" => ShellCommand::Cancel,
        "delete" | "rm" => ShellCommand::Delete(parse_row_ref("delete", rest)?),
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(ShellError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

fn resolve(controller: &BookingController, row: RowRef) -> Result<BookingId, ShellError> {
    match row {
        RowRef::Id(id) => Ok(id),
        RowRef::Position(position) => {
            let bookings = controller.snapshot().bookings;
            position
                .checked_sub(1)
                .and_then(|index| bookings.get(index))
                .map(|booking| booking.id.clone())
                .ok_or_else(|| ShellError::NoSuchBooking(format!("#{position}")))
        }
    }
}

pub async fn execute(
    controller: &BookingController,
    command: ShellCommand,
) -> Result<Flow, ShellError> {
    match command {
        ShellCommand::List => controller.refresh().await,
        ShellCommand::Name(name) => controller.set_name(name),
        ShellCommand::Start(date) => controller.set_start_date(date),
        ShellCommand::End(date) => controller.set_end_date(date),
        ShellCommand::Create => controller.submit_create().await,
        ShellCommand::Edit(row) => {
            let id = resolve(controller, row)?;
            if !controller.begin_edit(&id) {
                return Err(ShellError::NoSuchBooking(id.to_string()));
            }
        }
        ShellCommand::Save => controller.submit_update().await,
        ShellCommand::Cancel => controller.cancel_edit(),
        ShellCommand::Delete(row) => {
            let id = resolve(controller, row)?;
            controller.delete(&id).await;
        }
        ShellCommand::Show => {}
        ShellCommand::Help => return Ok(Flow::Help),
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Render)
}

pub async fn run(controller: &BookingController) -> anyhow::Result<()> {
    controller.refresh().await;
    print!("{}", render(&controller.view()));
    println!("type 'help' for commands");

    let mut lines = BufReader::new(stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match execute(controller, command).await {
            Ok(Flow::Render) => print!("{}", render(&controller.view())),
            Ok(Flow::Help) => println!("{HELP}"),
            Ok(Flow::Quit) => break,
            Err(err) => println!("{err}"),
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
