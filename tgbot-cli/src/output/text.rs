//! Text output formatting with optional colors.

use chrono::Local;
use serde_json::Value;
use tgbot_client::ResultEnvelope;
use tgbot_core::{Message, Update, User};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Longest text shown on a one-line update summary, in characters.
const PREVIEW_CHARS: usize = 60;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a user profile, as returned by getMe.
    pub fn format_user(&self, user: &User) -> String {
        let mut lines = Vec::new();

        let name = user.full_name();
        match user.mention() {
            Some(mention) => lines.push(format!("{} ({})", self.bold(&name), self.cyan(&mention))),
            None => lines.push(self.bold(&name)),
        }
        lines.push(format!("ID:  {}", user.id));
        lines.push(format!("Bot: {}", if user.is_bot { "yes" } else { "no" }));
        if let Some(lang) = &user.language_code {
            lines.push(format!("Language: {lang}"));
        }

        lines.join("\n")
    }

    /// Formats a sent or received message.
    pub fn format_message(&self, message: &Message) -> String {
        let when = message.date.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
        let header = format!(
            "Message #{} in {} ({})",
            message.message_id,
            message.chat.display_name(),
            message.chat.id
        );

        let mut lines = vec![self.bold(&header), self.dim(&format!("Sent {when}"))];
        match message.text.as_deref().or(message.caption.as_deref()) {
            Some(text) => lines.push(text.to_string()),
            None => lines.push(self.dim(&format!("[{}]", message.content_kind()))),
        }

        lines.join("\n")
    }

    /// Formats an update as a single summary line.
    pub fn format_update(&self, update: &Update) -> String {
        let id = self.yellow(&format!("[{}]", update.update_id));
        let sender = update
            .sender()
            .map(|u| u.mention().unwrap_or_else(|| u.full_name()))
            .unwrap_or_else(|| "unknown".to_string());

        let detail = if let Some(query) = &update.inline_query {
            format!("query {:?}", query.query)
        } else if let Some(callback) = &update.callback_query {
            format!("data {:?}", callback.data.as_deref().unwrap_or(""))
        } else if let Some(chosen) = &update.chosen_inline_result {
            format!("chose {}", chosen.result_id)
        } else if let Some(message) = update.any_message() {
            let content = match message.text.as_deref() {
                Some(text) => preview(text),
                None => format!("[{}]", message.content_kind()),
            };
            format!("in {}: {}", message.chat.display_name(), content)
        } else {
            String::new()
        };

        let mut line = format!("{id} {} from {}", update.kind(), self.cyan(&sender));
        if !detail.is_empty() {
            line.push_str(": ");
            line.push_str(&detail);
        }
        line
    }

    /// Formats a raw operation response.
    ///
    /// Shows the `result` pretty-printed, or the whole document when there
    /// is no result.
    pub fn format_envelope(&self, envelope: &ResultEnvelope) -> String {
        let value = match envelope.result() {
            Some(result) => result.clone(),
            None => Value::Object(envelope.body().clone()),
        };
        let body = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());

        match envelope.description() {
            Some(description) => format!("{}\n{body}", self.dim(description)),
            None => body,
        }
    }

    // ========================================================================
    // Color Helpers
    // ========================================================================

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}

/// First line of a text, shortened with an ellipsis.
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() > PREVIEW_CHARS || line.len() < text.len() {
        let cut: String = line.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}…")
    } else {
        line.to_string()
    }
}
