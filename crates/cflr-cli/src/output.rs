//! Table and JSON rendering

use std::io::Write;

use anyhow::Result;
use cflr_core::{Connector, ConnectorStatus};
use colored::{ColoredString, Colorize};
use serde::Serialize;

const ID_HEADER: &str = "ID";
const DOMAIN_HEADER: &str = "Email Domain";
const STATUS_HEADER: &str = "Status";

/// Write a value as pretty-printed JSON
pub fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn status_cell(status: &ConnectorStatus, width: usize) -> ColoredString {
    let cell = format!("{:<width$}", status);
    match status {
        ConnectorStatus::Enabled => cell.green(),
        ConnectorStatus::Disabled => cell.red(),
        ConnectorStatus::Deleted | ConnectorStatus::Unknown(_) => cell.yellow(),
    }
}

/// Render connectors as an `ID | Email Domain | Status` table
pub fn render_table<W: Write>(out: &mut W, connectors: &[&Connector]) -> Result<()> {
    let id_width = connectors
        .iter()
        .map(|c| c.connector_id.chars().count())
        .max()
        .unwrap_or(0)
        .max(ID_HEADER.len());
    let domain_width = connectors
        .iter()
        .map(|c| c.email_domain.chars().count())
        .max()
        .unwrap_or(0)
        .max(DOMAIN_HEADER.len());
    let status_width = connectors
        .iter()
        .map(|c| c.connector_status.label().chars().count())
        .max()
        .unwrap_or(0)
        .max(STATUS_HEADER.len());

    let rule = format!(
        "{}-+-{}-+-{}",
        "-".repeat(id_width),
        "-".repeat(domain_width),
        "-".repeat(status_width)
    );

    writeln!(
        out,
        "{} | {} | {}",
        format!("{:<id_width$}", ID_HEADER).bold(),
        format!("{:<domain_width$}", DOMAIN_HEADER).bold(),
        format!("{:<status_width$}", STATUS_HEADER).bold(),
    )?;
    writeln!(out, "{}", rule)?;

    for connector in connectors {
        writeln!(
            out,
            "{} | {} | {}",
            format!("{:<id_width$}", connector.connector_id).cyan(),
            format!("{:<domain_width$}", connector.email_domain).magenta(),
            status_cell(&connector.connector_status, status_width),
        )?;
    }

    Ok(())
}
