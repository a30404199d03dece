//! One-shot subcommands run against a [`BookingController`].

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use client_core::BookingController;
use shared::{dates::parse_date, domain::BookingId};

use crate::{render::render, shell};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every booking
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = date_arg)]
        start: NaiveDate,
        #[arg(long, value_parser = date_arg)]
        end: NaiveDate,
    },
    /// Change fields of an existing booking; omitted fields keep their value
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = date_arg)]
        start: Option<NaiveDate>,
        #[arg(long, value_parser = date_arg)]
        end: Option<NaiveDate>,
    },
    Delete {
        id: String,
    },
    /// Interactive session (default)
    Shell,
}

fn date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// Prints the view and turns a visible error banner into a failing exit.
fn finish(controller: &BookingController) -> Result<()> {
    let view = controller.view();
    print!("{}", render(&view));
    if let Some(banner) = view.error_banner {
        bail!(banner);
    }
    Ok(())
}

pub async fn execute(controller: &BookingController, command: Command) -> Result<()> {
    match command {
        Command::Shell => shell::run(controller).await,
        Command::List => {
            controller.refresh().await;
            finish(controller)
        }
        Command::Create { name, start, end } => {
            controller.set_name(name);
            controller.set_start_date(Some(start));
            controller.set_end_date(Some(end));
            controller.submit_create().await;
            finish(controller)
        }
        Command::Update {
            id,
            name,
            start,
            end,
        } => {
            controller.refresh().await;
            let id = BookingId::new(id);
            if !controller.begin_edit(&id) {
                bail!("booking {id} is not listed by the service");
            }
            if let Some(name) = name {
                controller.set_name(name);
            }
            if let Some(start) = start {
                controller.set_start_date(Some(start));
            }
            if let Some(end) = end {
                controller.set_end_date(Some(end));
            }
            controller.submit_update().await;
            finish(controller)
        }
        Command::Delete { id } => {
            controller.delete(&BookingId::new(id)).await;
            finish(controller)
        }
    }
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
