//! Rate-limited update polling.
//!
//! [`UpdatePoller`] wraps `getUpdates` with a minimum spacing between
//! attempts and, optionally, turns network failures into empty batches so a
//! polling loop survives a flaky connection. The poll cursor belongs to the
//! poller instance and `poll` takes `&mut self`, so one poller is never
//! polled concurrently.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use futures::Stream;
use futures::stream;
use tgbot_core::{Update, ValidationError};
use tokio::time::{Instant, sleep};
use tracing::{debug, instrument, warn};

use crate::bot::Bot;
use crate::error::{BotError, TransportError};
use crate::methods::GetUpdates;

/// Default minimum spacing between two polls.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(100);

/// Default and maximum number of updates per poll.
pub const DEFAULT_POLL_LIMIT: u32 = 100;

// ============================================================================
// Update Source
// ============================================================================

/// Anything that can answer `getUpdates`.
#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Fetches one batch of updates.
    async fn fetch_updates(&self, request: GetUpdates) -> Result<Vec<Update>, BotError>;
}

#[async_trait]
impl UpdateSource for Bot {
    async fn fetch_updates(&self, request: GetUpdates) -> Result<Vec<Update>, BotError> {
        self.get_updates(request).await
    }
}

// ============================================================================
// Settings & Batch
// ============================================================================

/// Polling behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSettings {
    /// Most updates per poll, 1 to 100.
    pub limit: u32,
    /// Server-side long-poll timeout in seconds. Zero means short polling.
    pub timeout_secs: u32,
    /// Minimum time between the starts of two polls.
    pub min_interval: Duration,
    /// Turn network failures into empty batches instead of errors.
    pub swallow_network_errors: bool,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_POLL_LIMIT,
            timeout_secs: 0,
            min_interval: DEFAULT_MIN_INTERVAL,
            swallow_network_errors: true,
        }
    }
}

/// Result of one poll.
#[derive(Debug, Default)]
pub struct PollBatch {
    /// Updates received, oldest first.
    pub updates: Vec<Update>,
    /// The swallowed network failure, when the batch is empty because of one.
    pub error: Option<TransportError>,
}

impl PollBatch {
    /// Returns true if the batch holds no updates.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Returns true if a network failure was swallowed.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    /// Offset that confirms every update in this batch.
    pub fn next_offset(&self) -> Option<i64> {
        self.updates.iter().map(|u| u.update_id).max().map(|id| id + 1)
    }
}

// ============================================================================
// Update Poller
// ============================================================================

/// Polls for updates with a minimum interval between attempts.
#[derive(Debug)]
pub struct UpdatePoller<S = Bot> {
    source: S,
    settings: PollSettings,
    last_poll: Option<Instant>,
}

impl<S: UpdateSource> UpdatePoller<S> {
    /// Creates a poller with default settings.
    pub fn new(source: S) -> Self {
        Self {
            source,
            settings: PollSettings::default(),
            last_poll: None,
        }
    }

    /// Creates a poller with custom settings. The limit must be 1 to 100.
    pub fn with_settings(source: S, settings: PollSettings) -> Result<Self, ValidationError> {
        ValidationError::require_range("limit", f64::from(settings.limit), 1.0, 100.0)?;
        Ok(Self {
            source,
            settings,
            last_poll: None,
        })
    }

    /// Current settings.
    pub fn settings(&self) -> &PollSettings {
        &self.settings
    }

    /// The update source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// When the last poll attempt started.
    pub fn last_poll(&self) -> Option<Instant> {
        self.last_poll
    }

    /// Polls once.
    ///
    /// Waits first if the previous attempt started less than `min_interval`
    /// ago. With `swallow_network_errors`, a transport failure yields an
    /// empty batch carrying the error; other failures always propagate.
    #[instrument(skip(self), fields(limit = self.settings.limit))]
    pub async fn poll(&mut self, offset: Option<i64>) -> Result<PollBatch, BotError> {
        if let Some(last) = self.last_poll {
            let elapsed = last.elapsed();
            if elapsed < self.settings.min_interval {
                let wait = self.settings.min_interval - elapsed;
                debug!(wait = ?wait, "Waiting before next poll");
                sleep(wait).await;
            }
        }
        self.last_poll = Some(Instant::now());

        let mut request = GetUpdates::new()
            .limit(self.settings.limit)?
            .timeout(self.settings.timeout_secs);
        if let Some(offset) = offset {
            request = request.offset(offset);
        }

        match self.source.fetch_updates(request).await {
            Ok(updates) => {
                debug!(count = updates.len(), "Polled updates");
                Ok(PollBatch {
                    updates,
                    error: None,
                })
            }
            Err(BotError::Transport(error)) if self.settings.swallow_network_errors => {
                warn!(error = %error, "Poll failed, returning an empty batch");
                self.last_poll = Some(Instant::now());
                Ok(PollBatch {
                    updates: Vec::new(),
                    error: Some(error),
                })
            }
            Err(error) => Err(error),
        }
    }

    /// Turns the poller into an endless stream of updates.
    ///
    /// After each non-empty batch the offset moves past the newest update,
    /// which confirms the batch to the server. Swallowed failures produce no
    /// item; propagated failures are yielded as `Err` and polling continues.
    pub fn into_stream(self) -> impl Stream<Item = Result<Update, BotError>> {
        stream::unfold(
            (self, None::<i64>, VecDeque::new()),
            |(mut poller, mut offset, mut pending)| async move {
                loop {
                    if let Some(update) = pending.pop_front() {
                        return Some((Ok(update), (poller, offset, pending)));
                    }
                    match poller.poll(offset).await {
                        Ok(batch) => {
                            if let Some(next) = batch.next_offset() {
                                offset = Some(next);
                            }
                            pending.extend(batch.updates);
                        }
                        Err(error) => return Some((Err(error), (poller, offset, pending))),
                    }
                }
            },
        )
    }
}
