// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! tgbot CLI - talk to the Telegram Bot API from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Who am I?
//! TGBOT_TOKEN=123:ABC tgbot me
//!
//! # Send a message
//! tgbot send 42 "Hello there" --silent
//!
//! # Call any operation
//! tgbot call sendLocation chat_id=42 latitude=48.85 longitude=2.35
//!
//! # Upload a file
//! tgbot call sendPhoto chat_id=42 --file photo=@cat.jpg
//!
//! # Print updates as they arrive, as JSON
//! tgbot poll --timeout 25 --format json
//! ```

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{call, config, me, poll, send};

// ============================================================================
// CLI Definition
// ============================================================================

/// tgbot CLI - Telegram Bot API client.
#[derive(Parser)]
#[command(name = "tgbot")]
#[command(about = "Telegram Bot API client")]
#[command(long_about = r#"
tgbot sends Bot API operations and polls for updates.

The bot token comes from --token, then TGBOT_TOKEN, then BOT_TOKEN, then
the configuration file. TGBOT_API_URL points the client at another server.

Examples:
  tgbot me                                 # Bot identity
  tgbot send 42 "hi"                       # Send a message
  tgbot call getChat chat_id=@news         # Any operation
  tgbot poll --once                        # One batch of updates
  tgbot config show                        # Effective configuration
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no logging, errors only as exit code).
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Configuration file to use instead of the default.
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Bot token. Overrides the environment and the configuration file.
    #[arg(long, global = true)]
    pub token: Option<String>,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the bot's identity (getMe).
    Me,

    /// Send a text message.
    #[command(visible_alias = "s")]
    Send(send::SendArgs),

    /// Call any operation with key=value parameters.
    #[command(visible_alias = "c")]
    Call(call::CallArgs),

    /// Poll for updates and print them.
    #[command(visible_alias = "p")]
    Poll(poll::PollArgs),

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("tgbot_client=debug,tgbot_cli=debug")
    } else {
        EnvFilter::new("tgbot_client=warn,tgbot_cli=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Me => me::run(&cli).await,
        Commands::Send(args) => send::run(args, &cli).await,
        Commands::Call(args) => call::run(args, &cli).await,
        Commands::Poll(args) => poll::run(args, &cli).await,
        Commands::Config(args) => config::run(args, &cli).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
