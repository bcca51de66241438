//! Answers to inline and callback queries.

use tgbot_core::{InlineQueryResult, ValidationError};

use super::Method;
use crate::params::Params;

/// Most results one inline answer may carry.
pub const MAX_INLINE_RESULTS: usize = 50;

/// Longest pagination offset, in bytes.
pub const MAX_NEXT_OFFSET_BYTES: usize = 64;

// ============================================================================
// answerInlineQuery
// ============================================================================

/// Answers an inline query with a list of results.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerInlineQuery {
    inline_query_id: String,
    results: Vec<InlineQueryResult>,
    cache_time: Option<u32>,
    is_personal: Option<bool>,
    next_offset: Option<String>,
    switch_pm_text: Option<String>,
    switch_pm_parameter: Option<String>,
}

impl AnswerInlineQuery {
    /// Creates the request. At most 50 results are allowed.
    pub fn new(
        inline_query_id: impl Into<String>,
        results: Vec<InlineQueryResult>,
    ) -> Result<Self, ValidationError> {
        let inline_query_id = inline_query_id.into();
        ValidationError::require_non_empty("inline_query_id", &inline_query_id)?;
        if results.len() > MAX_INLINE_RESULTS {
            return Err(ValidationError::TooMany {
                field: "results",
                max: MAX_INLINE_RESULTS,
                count: results.len(),
            });
        }
        Ok(Self {
            inline_query_id,
            results,
            cache_time: None,
            is_personal: None,
            next_offset: None,
            switch_pm_text: None,
            switch_pm_parameter: None,
        })
    }

    /// Seconds the server may cache the results.
    #[must_use]
    pub fn cache_time(mut self, seconds: u32) -> Self {
        self.cache_time = Some(seconds);
        self
    }

    /// Caches results for the querying user only.
    #[must_use]
    pub fn personal(mut self) -> Self {
        self.is_personal = Some(true);
        self
    }

    /// Offset the client sends back to fetch more results.
    pub fn next_offset(mut self, offset: impl Into<String>) -> Result<Self, ValidationError> {
        let offset = offset.into();
        if offset.len() > MAX_NEXT_OFFSET_BYTES {
            return Err(ValidationError::TooLong {
                field: "next_offset",
                max: MAX_NEXT_OFFSET_BYTES,
                len: offset.len(),
            });
        }
        self.next_offset = Some(offset);
        Ok(self)
    }

    /// Shows a button that opens a private chat with the bot.
    #[must_use]
    pub fn switch_pm(mut self, text: impl Into<String>, parameter: impl Into<String>) -> Self {
        self.switch_pm_text = Some(text.into());
        self.switch_pm_parameter = Some(parameter.into());
        self
    }
}

impl Method for AnswerInlineQuery {
    const NAME: &'static str = "answerInlineQuery";
    type Output = bool;

    fn into_params(self) -> Result<Params, ValidationError> {
        let params = Params::new()
            .with("inline_query_id", self.inline_query_id)
            .with_structured("results", Some(&self.results))?;
        Ok(params
            .with_opt("cache_time", self.cache_time)
            .with_opt("is_personal", self.is_personal)
            .with_opt("next_offset", self.next_offset)
            .with_opt("switch_pm_text", self.switch_pm_text)
            .with_opt("switch_pm_parameter", self.switch_pm_parameter))
    }
}

// ============================================================================
// answerCallbackQuery
// ============================================================================

/// Answers a callback query from an inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCallbackQuery {
    callback_query_id: String,
    text: Option<String>,
    show_alert: Option<bool>,
    url: Option<String>,
    cache_time: Option<u32>,
}

impl AnswerCallbackQuery {
    /// Creates the request.
    pub fn new(callback_query_id: impl Into<String>) -> Result<Self, ValidationError> {
        let callback_query_id = callback_query_id.into();
        ValidationError::require_non_empty("callback_query_id", &callback_query_id)?;
        Ok(Self {
            callback_query_id,
            text: None,
            show_alert: None,
            url: None,
            cache_time: None,
        })
    }

    /// Notification text shown to the user.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Shows the text as an alert instead of a toast.
    #[must_use]
    pub fn alert(mut self) -> Self {
        self.show_alert = Some(true);
        self
    }

    /// URL the client opens.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Seconds the client may cache the answer.
    #[must_use]
    pub fn cache_time(mut self, seconds: u32) -> Self {
        self.cache_time = Some(seconds);
        self
    }
}

impl Method for AnswerCallbackQuery {
    const NAME: &'static str = "answerCallbackQuery";
    type Output = bool;

    fn into_params(self) -> Result<Params, ValidationError> {
        Ok(Params::new()
            .with("callback_query_id", self.callback_query_id)
            .with_opt("text", self.text)
            .with_opt("show_alert", self.show_alert)
            .with_opt("url", self.url)
            .with_opt("cache_time", self.cache_time))
    }
}
