//! cflr CLI
//!
//! Toggle Cloudflare SSO email-domain connectors from the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use cflr_core::{ApiClient, Credentials, Error, Settings};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cflr_cli::commands::sso;
use cflr_cli::prompt::TerminalPicker;

/// cflr - Cloudflare account utilities
#[derive(Parser)]
#[command(name = "cflr")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Settings file path (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Cloudflare API base URL
    #[arg(long, env = "CLOUDFLARE_API_BASE_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Toggle configured SSO email domains
    #[command(long_about = sso::LONG_ABOUT, arg_required_else_help = true)]
    Sso {
        #[command(subcommand)]
        command: SsoCommands,
    },
}

#[derive(Subcommand)]
enum SsoCommands {
    /// Disable an SSO email domain
    Disable {
        /// Cloudflare account ID
        account_id: String,

        /// Print the raw API response instead of a summary
        #[arg(long)]
        debug: bool,
    },

    /// Enable an SSO email domain
    Enable {
        /// Cloudflare account ID
        account_id: String,

        /// Print the raw API response instead of a summary
        #[arg(long)]
        debug: bool,
    },

    /// List SSO email domains
    List {
        /// Cloudflare account ID
        account_id: String,

        /// Print the raw API response instead of a table
        #[arg(long)]
        debug: bool,
    },
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Settings::load_default().context("Failed to load configuration")?,
    };

    Ok(match &cli.api_url {
        Some(url) => settings.with_api_base_url(url),
        None => settings,
    })
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(Error::MissingCredential { name }) => {
            println!("Missing {} environment variable.", name.red().bold());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let settings = load_settings(&cli)?;
    tracing::debug!("Using API at {}", settings.api_base_url);

    let client = ApiClient::new(&settings, credentials).context("Failed to create HTTP client")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = match cli.command {
        Commands::Sso { command } => match command {
            SsoCommands::Disable { account_id, debug } => {
                sso::disable(&client, &TerminalPicker, &mut out, &account_id, debug).await?
            }
            SsoCommands::Enable { account_id, debug } => {
                sso::enable(&client, &TerminalPicker, &mut out, &account_id, debug).await?
            }
            SsoCommands::List { account_id, debug } => {
                sso::list(&client, &mut out, &account_id, debug).await?
            }
        },
    };

    Ok(outcome.exit_code())
}
