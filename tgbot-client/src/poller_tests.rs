//! Update poller tests against a scripted update source.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use serde_json::json;
use tgbot_core::Update;
use tokio::time::Instant;

use crate::error::{BotError, TransportError, TransportErrorKind};
use crate::methods::GetUpdates;
use crate::poller::{PollSettings, UpdatePoller, UpdateSource};

// ============================================================================
// Scripted Source
// ============================================================================

type Reply = Result<Vec<Update>, BotError>;

#[derive(Default)]
struct ScriptedSource {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<(Instant, Option<i64>)>>,
}

impl ScriptedSource {
    fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    fn offsets(&self) -> Vec<Option<i64>> {
        self.calls.lock().unwrap().iter().map(|(_, o)| *o).collect()
    }
}

#[async_trait]
impl UpdateSource for ScriptedSource {
    async fn fetch_updates(&self, request: GetUpdates) -> Result<Vec<Update>, BotError> {
        self.calls
            .lock()
            .unwrap()
            .push((Instant::now(), request.get_offset()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn update(id: i64) -> Update {
    serde_json::from_value(json!({
        "update_id": id,
        "message": {
            "message_id": id,
            "date": 1_467_000_000,
            "chat": {"id": 1, "type": "private"},
            "text": "hi"
        }
    }))
    .unwrap()
}

fn network_down() -> BotError {
    TransportError::new(TransportErrorKind::Connect, "connection refused").into()
}

fn settings(swallow: bool) -> PollSettings {
    PollSettings {
        swallow_network_errors: swallow,
        ..PollSettings::default()
    }
}

// ============================================================================
// Spacing
// ============================================================================

#[tokio::test]
async fn test_polls_are_spaced_by_min_interval() {
    let mut poller = UpdatePoller::new(ScriptedSource::default());
    let min_interval = poller.settings().min_interval;

    for _ in 0..3 {
        poller.poll(None).await.unwrap();
    }

    let times = poller.source().call_times();
    assert_eq!(times.len(), 3);
    for pair in times.windows(2) {
        assert!(
            pair[1] - pair[0] >= min_interval,
            "polls only {:?} apart",
            pair[1] - pair[0]
        );
    }
}

#[tokio::test]
async fn test_first_poll_does_not_wait() {
    let mut poller = UpdatePoller::with_settings(
        ScriptedSource::default(),
        PollSettings {
            min_interval: Duration::from_secs(60),
            ..PollSettings::default()
        },
    )
    .unwrap();

    assert!(poller.last_poll().is_none());
    let started = Instant::now();
    poller.poll(None).await.unwrap();
    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(poller.last_poll().is_some());
}

#[tokio::test]
async fn test_spacing_holds_after_failures() {
    let source = ScriptedSource::new(vec![Err(network_down()), Err(network_down())]);
    let mut poller = UpdatePoller::with_settings(source, settings(true)).unwrap();

    for _ in 0..3 {
        poller.poll(None).await.unwrap();
    }

    let times = poller.source().call_times();
    for pair in times.windows(2) {
        assert!(pair[1] - pair[0] >= poller.settings().min_interval);
    }
}

// ============================================================================
// Failure Handling
// ============================================================================

#[tokio::test]
async fn test_swallowed_failure_yields_annotated_empty_batch() {
    let source = ScriptedSource::new(vec![Err(network_down())]);
    let mut poller = UpdatePoller::with_settings(source, settings(true)).unwrap();

    let batch = poller.poll(None).await.unwrap();
    assert!(batch.is_empty());
    assert!(batch.is_degraded());
    assert_eq!(
        batch.error.as_ref().map(TransportError::kind),
        Some(TransportErrorKind::Connect)
    );
}

#[tokio::test]
async fn test_propagated_failure_is_transport_error() {
    let source = ScriptedSource::new(vec![Err(network_down())]);
    let mut poller = UpdatePoller::with_settings(source, settings(false)).unwrap();

    let err = poller.poll(None).await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_non_transport_failures_always_propagate() {
    let source = ScriptedSource::new(vec![Err(BotError::decode("getUpdates", "bad json"))]);
    let mut poller = UpdatePoller::with_settings(source, settings(true)).unwrap();

    let err = poller.poll(None).await.unwrap_err();
    assert!(matches!(err, BotError::Decode { .. }));
}

#[test]
fn test_limit_is_validated() {
    let result = UpdatePoller::with_settings(
        ScriptedSource::default(),
        PollSettings {
            limit: 0,
            ..PollSettings::default()
        },
    );
    assert!(result.is_err());
}

// ============================================================================
// Stream
// ============================================================================

#[tokio::test]
async fn test_stream_advances_offset() {
    let source = ScriptedSource::new(vec![
        Ok(vec![update(10), update(11)]),
        Err(network_down()),
        Ok(vec![update(12)]),
    ]);
    let poller = UpdatePoller::with_settings(
        source,
        PollSettings {
            min_interval: Duration::from_millis(1),
            ..PollSettings::default()
        },
    )
    .unwrap();

    let stream = poller.into_stream();
    futures::pin_mut!(stream);

    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(stream.next().await.unwrap().unwrap().update_id);
    }
    assert_eq!(ids, vec![10, 11, 12]);
}

#[tokio::test]
async fn test_stream_sends_confirming_offsets() {
    let source = ScriptedSource::new(vec![Ok(vec![update(5)]), Ok(vec![update(6)])]);
    let mut poller = UpdatePoller::with_settings(
        source,
        PollSettings {
            min_interval: Duration::from_millis(1),
            ..PollSettings::default()
        },
    )
    .unwrap();

    let batch = poller.poll(None).await.unwrap();
    assert_eq!(batch.next_offset(), Some(6));
    poller.poll(batch.next_offset()).await.unwrap();

    assert_eq!(poller.source().offsets(), vec![None, Some(6)]);
}

#[tokio::test]
async fn test_stream_yields_propagated_errors_and_continues() {
    let source = ScriptedSource::new(vec![Err(network_down()), Ok(vec![update(1)])]);
    let poller = UpdatePoller::with_settings(
        source,
        PollSettings {
            min_interval: Duration::from_millis(1),
            swallow_network_errors: false,
            ..PollSettings::default()
        },
    )
    .unwrap();

    let stream = poller.into_stream();
    futures::pin_mut!(stream);

    assert!(stream.next().await.unwrap().unwrap_err().is_transport());
    assert_eq!(stream.next().await.unwrap().unwrap().update_id, 1);
}
