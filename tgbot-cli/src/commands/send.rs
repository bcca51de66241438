//! Send command - send a text message.

use anyhow::Result;
use clap::Args;
use tgbot_client::methods::SendMessage;
use tgbot_core::{ChatId, ParseMode};

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the send command.
#[derive(Args)]
pub struct SendArgs {
    /// Target chat: numeric id or @username.
    pub chat: ChatId,

    /// Message text.
    pub text: String,

    /// Text formatting: Markdown or HTML.
    #[arg(long)]
    pub parse_mode: Option<ParseMode>,

    /// Deliver without a notification sound.
    #[arg(long)]
    pub silent: bool,

    /// Message id to reply to.
    #[arg(long)]
    pub reply_to: Option<i64>,
}

impl SendArgs {
    fn to_request(&self) -> Result<SendMessage> {
        let mut request = SendMessage::new(self.chat.clone(), self.text.as_str())?;
        if let Some(mode) = self.parse_mode {
            request = request.parse_mode(mode);
        }
        if self.silent {
            request = request.silent();
        }
        if let Some(id) = self.reply_to {
            request = request.reply_to(id);
        }
        Ok(request)
    }
}

/// Runs the send command.
pub async fn run(args: &SendArgs, cli: &Cli) -> Result<()> {
    let request = args.to_request()?;
    let (bot, _) = super::connect(cli).await?;
    let message = bot.execute(request).await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_message(&message));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&message)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::{Cli, Commands};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_send_args_parse() {
        let cli = parse(&[
            "tgbot", "send", "@news", "hello", "--parse-mode", "HTML", "--silent",
        ]);
        let Commands::Send(args) = cli.command else {
            panic!("expected send");
        };
        assert_eq!(args.chat.to_string(), "@news");
        assert!(args.silent);
        assert!(args.to_request().is_ok());
    }

    #[test]
    fn test_send_rejects_bad_chat() {
        assert!(Cli::try_parse_from(["tgbot", "send", "news", "hello"]).is_err());
    }

    #[test]
    fn test_send_rejects_empty_text() {
        let cli = parse(&["tgbot", "send", "42", ""]);
        let Commands::Send(args) = cli.command else {
            panic!("expected send");
        };
        assert!(args.to_request().is_err());
    }
}
