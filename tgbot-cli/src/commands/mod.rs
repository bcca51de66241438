//! CLI command implementations.

pub mod call;
pub mod config;
pub mod me;
pub mod poll;
pub mod send;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tgbot_client::{Bot, BotConfig};

use crate::Cli;

/// Configuration file selected on the command line, or the default one.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(BotConfig::default_path)
}

/// Loads the effective configuration: file, then environment, then flags.
pub async fn load_config(cli: &Cli) -> Result<BotConfig> {
    let path = config_path(cli);
    let mut config = BotConfig::load(&path)
        .await
        .with_context(|| format!("Failed to load {}", path.display()))?
        .with_env();

    if let Some(token) = cli.token.as_deref().filter(|t| !t.trim().is_empty()) {
        config.token = Some(token.to_string());
    }
    Ok(config)
}

/// Builds a client from the effective configuration.
pub async fn connect(cli: &Cli) -> Result<(Bot, BotConfig)> {
    let config = load_config(cli).await?;
    let bot = config.build_bot()?;
    Ok((bot, config))
}
