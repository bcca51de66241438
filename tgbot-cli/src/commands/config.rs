//! Config command - manage configuration.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use tgbot_client::{BotConfig, mask_token};
use tracing::info;

use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration, with the token masked.
    Show,

    /// Show the configuration file path.
    Path,

    /// Write a configuration file with defaults.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli).await,
        ConfigAction::Path => show_path(cli),
        ConfigAction::Init { force } => init_config(*force, cli).await,
    }
}

/// Copy of the configuration that is safe to print.
fn masked(config: &BotConfig) -> BotConfig {
    BotConfig {
        token: config.token.as_deref().map(mask_token),
        ..config.clone()
    }
}

async fn show_config(cli: &Cli) -> Result<()> {
    let config = masked(&super::load_config(cli).await?);

    match cli.format {
        OutputFormat::Text => {
            println!("tgbot Configuration");
            println!("{}", "─".repeat(40));
            println!();
            println!(
                "Token:            {}",
                config.token.as_deref().unwrap_or("(not set)")
            );
            println!("API server:       {}", config.api_base);
            println!("Request timeout:  {}s", config.request_timeout_secs);
            println!();
            println!("Poll limit:       {}", config.poll_limit);
            println!("Poll timeout:     {}s", config.poll_timeout_secs);
            println!("Poll interval:    {}ms", config.poll_min_interval_ms);
            println!("Retry on failure: {}", config.swallow_network_errors);
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&config)?);
        }
    }

    Ok(())
}

fn show_path(cli: &Cli) -> Result<()> {
    let path = super::config_path(cli);

    match cli.format {
        OutputFormat::Text => println!("{}", path.display()),
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_file": path.display().to_string(),
                "exists": path.exists(),
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&paths)?);
        }
    }

    Ok(())
}

async fn init_config(force: bool, cli: &Cli) -> Result<()> {
    let path = super::config_path(cli);
    if path.exists() && !force {
        bail!("{} already exists, use --force to overwrite", path.display());
    }

    let config = BotConfig {
        token: cli.token.clone(),
        ..BotConfig::default()
    };
    config.save(&path).await?;

    info!(path = %path.display(), "Config written");
    println!("Wrote {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_token() {
        let config = BotConfig {
            token: Some("123456789:SECRETSECRETSECRET".to_string()),
            ..BotConfig::default()
        };
        let shown = masked(&config);
        let token = shown.token.unwrap();
        assert!(!token.contains("SECRETSECRET"));
        assert!(token.ends_with("CRET"));
    }

    #[test]
    fn test_masked_without_token() {
        assert!(masked(&BotConfig::default()).token.is_none());
    }
}
