//! End-to-end dispatch tests against a stub Bot API server.

use mockito::Matcher;
use serde_json::json;
use tgbot_client::methods::{GetUpdates, SendPhoto};
use tgbot_client::{
    Bot, BotError, FileInput, ParamValue, Params, PollSettings, TransportErrorKind,
};
use tgbot_core::InputFile;

const TOKEN: &str = "123456:TEST_TOKEN_abcdef";

fn path(operation: &str) -> String {
    format!("/bot{TOKEN}/{operation}")
}

fn bot_for(server: &mockito::ServerGuard) -> Bot {
    Bot::builder(TOKEN).api_base(server.url()).build().unwrap()
}

fn message_json(id: i64, text: &str) -> serde_json::Value {
    json!({
        "message_id": id,
        "date": 1_467_000_000,
        "chat": {"id": 42, "type": "private", "first_name": "Alice"},
        "text": text
    })
}

// ============================================================================
// getMe
// ============================================================================

#[tokio::test]
async fn test_get_me_envelope_and_typed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", path("getMe").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "ok": true,
                "result": {"id": 123, "is_bot": true, "first_name": "Test", "username": "testbot"}
            })
            .to_string(),
        )
        .expect(2)
        .create_async()
        .await;

    let bot = bot_for(&server);

    let envelope = bot.dispatch("getMe", Params::new(), None).await.unwrap();
    assert_eq!(envelope["result"]["id"], 123);
    assert_eq!(envelope.lookup("result.username"), Some(&json!("testbot")));

    let me = bot.get_me().await.unwrap();
    assert_eq!(me.id, 123);
    assert_eq!(me.username.as_deref(), Some("testbot"));

    mock.assert_async().await;
}

// ============================================================================
// sendMessage
// ============================================================================

#[tokio::test]
async fn test_send_message_exact_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", path("sendMessage").as_str())
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::Exact("chat_id=42&text=hi".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"ok": true, "result": message_json(7, "hi")}).to_string())
        .create_async()
        .await;

    let bot = bot_for(&server);
    let message = bot.send_message(42, "hi").await.unwrap();
    assert_eq!(message.message_id, 7);
    assert_eq!(message.text.as_deref(), Some("hi"));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_structured_param_travels_as_json_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", path("sendMessage").as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("chat_id".into(), "42".into()),
            Matcher::UrlEncoded(
                "reply_markup".into(),
                r#"{"force_reply":true}"#.into(),
            ),
        ]))
        .with_status(200)
        .with_body(json!({"ok": true, "result": message_json(8, "?")}).to_string())
        .create_async()
        .await;

    let bot = bot_for(&server);
    let params = Params::new()
        .with("chat_id", 42_i64)
        .with("text", "?")
        .with("reply_markup", ParamValue::Json(json!({"force_reply": true})));
    bot.dispatch("sendMessage", params, None).await.unwrap();

    mock.assert_async().await;
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_failure_document_is_remote_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", path("sendMessage").as_str())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"ok": false, "error_code": 400, "description": "Bad Request: chat not found"})
                .to_string(),
        )
        .create_async()
        .await;

    let bot = bot_for(&server);
    let err = bot.send_message(1, "hello").await.unwrap_err();

    let BotError::Remote(remote) = err else {
        panic!("expected remote error, got {err:?}");
    };
    assert_eq!(remote.error_code, 400);
    assert_eq!(remote.description, "Bad Request: chat not found");
    assert_eq!(remote.raw.status().as_u16(), 400);
}

#[tokio::test]
async fn test_non_json_error_page_is_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", path("getMe").as_str())
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let bot = bot_for(&server);
    let err = bot.get_me().await.unwrap_err();
    let BotError::Transport(transport) = err else {
        panic!("expected transport error, got {err:?}");
    };
    assert_eq!(transport.kind(), TransportErrorKind::Status);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error_without_token() {
    let bot = Bot::builder(TOKEN)
        .api_base("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = bot.get_me().await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");

    let rendered = format!("{err} {err:?}");
    assert!(!rendered.contains(TOKEN));
    assert!(!rendered.contains("TEST_TOKEN_abcdef"));
}

#[tokio::test]
async fn test_mistyped_result_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", path("getMe").as_str())
        .with_status(200)
        .with_body(r#"{"ok":true,"result":"not a user"}"#)
        .create_async()
        .await;

    let bot = bot_for(&server);
    assert!(matches!(
        bot.get_me().await.unwrap_err(),
        BotError::Decode { .. }
    ));
}

// ============================================================================
// Raw response
// ============================================================================

#[tokio::test]
async fn test_raw_response_roundtrip() {
    let body = r#"{"ok":true,"result":true}"#;
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", path("leaveChat").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("x-trace-id", "trace-77")
        .with_body(body)
        .create_async()
        .await;

    let bot = bot_for(&server);
    let envelope = bot
        .dispatch("leaveChat", Params::new().with("chat_id", -100_i64), None)
        .await
        .unwrap();

    assert_eq!(envelope.raw().status().as_u16(), 200);
    assert_eq!(envelope.raw().header("x-trace-id"), Some("trace-77"));
    assert_eq!(envelope.raw().body().as_ref(), body.as_bytes());
    assert_eq!(envelope.result(), Some(&json!(true)));
}

#[tokio::test]
async fn test_unknown_operation_is_forwarded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", path("setMyShortDescription").as_str())
        .with_status(200)
        .with_body(r#"{"ok":true,"result":true}"#)
        .create_async()
        .await;

    let bot = bot_for(&server);
    bot.dispatch("setMyShortDescription", Params::new(), None)
        .await
        .unwrap();
    mock.assert_async().await;
}

// ============================================================================
// Files
// ============================================================================

#[tokio::test]
async fn test_upload_is_multipart() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", path("sendPhoto").as_str())
        .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="chat_id"\r\n\r\n42"#.into()),
            Matcher::Regex(r#"name="photo"; filename="cat.jpg""#.into()),
            Matcher::Regex("meow".into()),
        ]))
        .with_status(200)
        .with_body(json!({"ok": true, "result": message_json(9, "")}).to_string())
        .create_async()
        .await;

    let bot = bot_for(&server);
    let photo = InputFile::new("cat.jpg", b"meow".to_vec()).unwrap();
    let message = bot.execute(SendPhoto::new(42, photo)).await.unwrap();
    assert_eq!(message.message_id, 9);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_file_reference_is_form_field() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", path("sendPhoto").as_str())
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::Exact("chat_id=42&photo=AgADBAAD".to_string()))
        .with_status(200)
        .with_body(json!({"ok": true, "result": message_json(10, "")}).to_string())
        .create_async()
        .await;

    let bot = bot_for(&server);
    bot.execute(SendPhoto::new(42, FileInput::remote("AgADBAAD")))
        .await
        .unwrap();

    mock.assert_async().await;
}

// ============================================================================
// Updates
// ============================================================================

#[tokio::test]
async fn test_poller_against_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", path("getUpdates").as_str())
        .match_body(Matcher::Exact("limit=100&timeout=0".to_string()))
        .with_status(200)
        .with_body(
            json!({
                "ok": true,
                "result": [
                    {"update_id": 500, "message": message_json(1, "/start")},
                    {"update_id": 501, "message": message_json(2, "hello")}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let bot = bot_for(&server);
    let mut poller = bot.poller(PollSettings::default()).unwrap();
    let batch = poller.poll(None).await.unwrap();

    assert_eq!(batch.updates.len(), 2);
    assert_eq!(batch.next_offset(), Some(502));
    assert_eq!(
        batch.updates[0].message.as_ref().and_then(|m| m.command()),
        Some("/start")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_updates_sends_offset() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", path("getUpdates").as_str())
        .match_body(Matcher::UrlEncoded("offset".into(), "502".into()))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":[]}"#)
        .create_async()
        .await;

    let bot = bot_for(&server);
    let updates = bot.get_updates(GetUpdates::new().offset(502)).await.unwrap();
    assert!(updates.is_empty());
    mock.assert_async().await;
}
