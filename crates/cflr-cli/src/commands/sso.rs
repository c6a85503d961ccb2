//! Toggle configured SSO email domains

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use cflr_core::connectors::ensure_success;
use cflr_core::{Connector, ConnectorStatus, Error, SsoApi, filter_by_status};
use colored::Colorize;

use crate::output::{print_json, render_table};
use crate::prompt::Picker;

/// Long help for the `sso` command group
pub const LONG_ABOUT: &str = "Toggle configured SSO email domain(s)

Global API Key authentication is required for the \
/accounts/:account_id/sso/v2/connectors endpoint. Set CLOUDFLARE_EMAIL and \
CLOUDFLARE_API_KEY before running.
https://developers.cloudflare.com/fundamentals/api/get-started/keys/#get-global-api-key-legacy";

/// How a command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The requested change or listing completed
    Done,
    /// The user dismissed the prompt
    Cancelled,
    /// No connector was in the state the command acts on
    NothingToDo,
    /// The API answered with `success: false`
    ApiError,
    /// Raw JSON was printed instead of the normal output
    DebugDump,
}

impl Outcome {
    /// Whether the process should exit with status 0
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Done | Outcome::Cancelled)
    }

    /// Process exit code for this outcome
    pub fn exit_code(self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Direction of a status change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Disabled -> enabled
    Enable,
    /// Enabled -> disabled
    Disable,
}

impl Toggle {
    /// Status a connector must currently have to be eligible
    pub fn current(self) -> ConnectorStatus {
        match self {
            Toggle::Enable => ConnectorStatus::Disabled,
            Toggle::Disable => ConnectorStatus::Enabled,
        }
    }

    /// Status the connector is switched to
    pub fn target(self) -> ConnectorStatus {
        match self {
            Toggle::Enable => ConnectorStatus::Enabled,
            Toggle::Disable => ConnectorStatus::Disabled,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Toggle::Enable => "enable",
            Toggle::Disable => "disable",
        }
    }
}

fn report_api_error<W: Write>(out: &mut W, message: &str) -> Result<Outcome> {
    writeln!(out, "API error: {}", message.red())?;
    Ok(Outcome::ApiError)
}

/// Fetch connectors, reporting API-level failures to `out`.
///
/// Returns `None` once an API error has been reported.
async fn fetch<A, W>(api: &A, out: &mut W, account_id: &str) -> Result<Option<Vec<Connector>>>
where
    A: SsoApi + ?Sized,
    W: Write,
{
    match api.list_connectors(account_id).await {
        Ok(connectors) => Ok(Some(connectors)),
        Err(Error::Api { message }) => {
            report_api_error(out, &message)?;
            Ok(None)
        }
        Err(e) => Err(e).context("Failed to fetch SSO connectors"),
    }
}

/// Disable an SSO email domain
pub async fn disable<A, P, W>(
    api: &A,
    picker: &P,
    out: &mut W,
    account_id: &str,
    debug: bool,
) -> Result<Outcome>
where
    A: SsoApi + ?Sized,
    P: Picker + ?Sized,
    W: Write,
{
    toggle(api, picker, out, account_id, Toggle::Disable, debug).await
}

/// Enable an SSO email domain
pub async fn enable<A, P, W>(
    api: &A,
    picker: &P,
    out: &mut W,
    account_id: &str,
    debug: bool,
) -> Result<Outcome>
where
    A: SsoApi + ?Sized,
    P: Picker + ?Sized,
    W: Write,
{
    toggle(api, picker, out, account_id, Toggle::Enable, debug).await
}

/// Flip one connector from `action.current()` to `action.target()`
pub async fn toggle<A, P, W>(
    api: &A,
    picker: &P,
    out: &mut W,
    account_id: &str,
    action: Toggle,
    debug: bool,
) -> Result<Outcome>
where
    A: SsoApi + ?Sized,
    P: Picker + ?Sized,
    W: Write,
{
    let Some(connectors) = fetch(api, out, account_id).await? else {
        return Ok(Outcome::ApiError);
    };

    let eligible = filter_by_status(&connectors, &action.current());
    if eligible.is_empty() {
        writeln!(
            out,
            "No {} connectors found. Exiting.",
            action.current().label()
        )?;
        return Ok(Outcome::NothingToDo);
    }

    let domains: Vec<String> = eligible.keys().cloned().collect();
    let prompt = format!("What email domain would you like to {}", action.verb());
    let Some(index) = picker.pick(&prompt, &domains)? else {
        writeln!(out, "No email domain selected. Exiting.")?;
        return Ok(Outcome::Cancelled);
    };

    let domain = domains
        .get(index)
        .with_context(|| format!("Selection {} is out of range", index))?;
    let connector_id = &eligible[domain];
    let target = action.target();

    tracing::info!(
        "Setting SSO connector {} ({}) to {}",
        connector_id,
        domain,
        target.code()
    );

    let raw = api
        .set_connector_status(account_id, connector_id, &target)
        .await
        .with_context(|| format!("Failed to {} SSO for {}", action.verb(), domain))?;

    if debug {
        print_json(out, &raw)?;
        return Ok(Outcome::DebugDump);
    }

    match ensure_success(&raw) {
        Ok(()) => {}
        Err(Error::Api { message }) => return report_api_error(out, &message),
        Err(e) => return Err(e).context("Unexpected response from the API"),
    }

    let state = match action {
        Toggle::Enable => target.label().green().bold(),
        Toggle::Disable => target.label().red().bold(),
    };
    writeln!(out, "✨ Success, SSO {} for {}", state, domain.bold())?;
    Ok(Outcome::Done)
}

/// List SSO email domains, skipping deleted connectors
pub async fn list<A, W>(api: &A, out: &mut W, account_id: &str, debug: bool) -> Result<Outcome>
where
    A: SsoApi + ?Sized,
    W: Write,
{
    let Some(connectors) = fetch(api, out, account_id).await? else {
        return Ok(Outcome::ApiError);
    };

    let visible: Vec<&Connector> = connectors
        .iter()
        .filter(|c| !c.connector_status.is_deleted())
        .collect();

    if debug {
        print_json(out, &visible)?;
        return Ok(Outcome::DebugDump);
    }

    render_table(out, &visible)?;
    Ok(Outcome::Done)
}
