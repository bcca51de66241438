//! Me command - show the bot's identity.

use anyhow::Result;
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the me command.
pub async fn run(cli: &Cli) -> Result<()> {
    let (bot, _) = super::connect(cli).await?;
    let me = bot.get_me().await?;
    info!(id = me.id, "Fetched bot identity");

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_user(&me));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&me)?);
        }
    }

    Ok(())
}
