//! Poll command - print updates as they arrive.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use futures::StreamExt;
use tgbot_client::PollSettings;
use tgbot_core::Update;
use tracing::{info, warn};

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the poll command.
#[derive(Args, Default)]
pub struct PollArgs {
    /// Fetch a single batch and exit, without confirming it.
    #[arg(long)]
    pub once: bool,

    /// Long-poll timeout in seconds.
    #[arg(long, short)]
    pub timeout: Option<u32>,

    /// Most updates per batch (1-100).
    #[arg(long, short)]
    pub limit: Option<u32>,

    /// Minimum milliseconds between polls.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Stop on the first network failure instead of retrying.
    #[arg(long)]
    pub strict: bool,
}

impl PollArgs {
    /// Applies the command-line overrides to configured settings.
    fn apply(&self, mut settings: PollSettings) -> PollSettings {
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        if let Some(limit) = self.limit {
            settings.limit = limit;
        }
        if let Some(ms) = self.interval_ms {
            settings.min_interval = Duration::from_millis(ms);
        }
        if self.strict {
            settings.swallow_network_errors = false;
        }
        settings
    }
}

struct Printer {
    format: OutputFormat,
    text: TextFormatter,
    json: JsonFormatter,
}

impl Printer {
    fn new(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            text: TextFormatter::new(!cli.no_color),
            json: JsonFormatter::new(cli.pretty),
        }
    }

    fn print(&self, update: &Update) -> Result<()> {
        match self.format {
            OutputFormat::Text => println!("{}", self.text.format_update(update)),
            OutputFormat::Json => println!("{}", self.json.format(update)?),
        }
        Ok(())
    }
}

/// Runs the poll command.
pub async fn run(args: &PollArgs, cli: &Cli) -> Result<()> {
    let (bot, config) = super::connect(cli).await?;
    let settings = args.apply(config.poll_settings());
    let mut poller = bot.poller(settings)?;
    let printer = Printer::new(cli);

    if args.once {
        let batch = poller.poll(None).await?;
        if let Some(error) = &batch.error {
            warn!(error = %error, "Network failure, no updates fetched");
        }
        for update in &batch.updates {
            printer.print(update)?;
        }
        return Ok(());
    }

    info!(
        limit = poller.settings().limit,
        timeout = poller.settings().timeout_secs,
        "Polling for updates, press Ctrl+C to stop"
    );

    let stream = poller.into_stream();
    futures::pin_mut!(stream);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                return Ok(());
            }
            item = stream.next() => match item {
                Some(Ok(update)) => printer.print(&update)?,
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
        }
    }
}
