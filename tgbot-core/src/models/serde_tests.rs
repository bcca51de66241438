//! Serde tests for the response-side models.
//!
//! Payloads are shaped like real Bot API responses, including fields this
//! library does not model.

use serde_json::json;

use crate::{
    Chat, ChatMember, ChatMemberStatus, ChatType, EditedMessage, File, Message, Update, User,
    UserProfilePhotos,
};

// ============================================================================
// User & Chat
// ============================================================================

#[test]
fn test_user_minimal() {
    let user: User = serde_json::from_value(json!({"id": 123, "first_name": "Test"})).unwrap();
    assert_eq!(user.id, 123);
    assert!(!user.is_bot);
    assert!(user.username.is_none());
    assert_eq!(user.full_name(), "Test");
    assert_eq!(user.mention(), None);
}

#[test]
fn test_user_ignores_unknown_fields() {
    let user: User = serde_json::from_value(json!({
        "id": 123,
        "is_bot": true,
        "first_name": "Test",
        "last_name": "Bot",
        "username": "testbot",
        "can_join_groups": true,
        "supports_inline_queries": false
    }))
    .unwrap();
    assert!(user.is_bot);
    assert_eq!(user.full_name(), "Test Bot");
    assert_eq!(user.mention().as_deref(), Some("@testbot"));
}

#[test]
fn test_chat_types() {
    let cases = vec![
        ("private", ChatType::Private),
        ("group", ChatType::Group),
        ("supergroup", ChatType::Supergroup),
        ("channel", ChatType::Channel),
        ("forum", ChatType::Unknown),
    ];

    for (wire, expected) in cases {
        let chat: Chat = serde_json::from_value(json!({"id": 1, "type": wire})).unwrap();
        assert_eq!(chat.chat_type, expected, "Failed for {wire}");
    }
}

#[test]
fn test_chat_display_name_fallbacks() {
    let chat: Chat =
        serde_json::from_value(json!({"id": -100, "type": "channel", "title": "News"})).unwrap();
    assert_eq!(chat.display_name(), "News");

    let chat: Chat =
        serde_json::from_value(json!({"id": 7, "type": "private", "username": "alice"})).unwrap();
    assert_eq!(chat.display_name(), "@alice");

    let chat: Chat = serde_json::from_value(json!({"id": 7, "type": "private"})).unwrap();
    assert_eq!(chat.display_name(), "7");
}

#[test]
fn test_chat_member_status() {
    let member: ChatMember = serde_json::from_value(json!({
        "user": {"id": 1, "first_name": "Owner"},
        "status": "creator"
    }))
    .unwrap();
    assert_eq!(member.status, ChatMemberStatus::Creator);
    assert!(member.is_admin());

    let member: ChatMember = serde_json::from_value(json!({
        "user": {"id": 2, "first_name": "Guest"},
        "status": "member"
    }))
    .unwrap();
    assert!(!member.is_admin());
}

// ============================================================================
// Message
// ============================================================================

fn text_message() -> serde_json::Value {
    json!({
        "message_id": 10,
        "from": {"id": 5, "first_name": "Alice"},
        "date": 1_467_000_000,
        "chat": {"id": 5, "type": "private", "first_name": "Alice"},
        "text": "/start@testbot now",
        "entities": [{"type": "bot_command", "offset": 0, "length": 14}]
    })
}

#[test]
fn test_text_message() {
    let msg: Message = serde_json::from_value(text_message()).unwrap();
    assert_eq!(msg.message_id, 10);
    assert_eq!(msg.date.timestamp(), 1_467_000_000);
    assert_eq!(msg.content_kind(), "text");
    assert_eq!(msg.command(), Some("/start"));
    assert!(msg.edit_date.is_none());
    assert!(msg.photo.is_empty());
}

#[test]
fn test_plain_text_has_no_command() {
    let mut value = text_message();
    value["text"] = json!("hello there");
    value["entities"] = json!([]);
    let msg: Message = serde_json::from_value(value).unwrap();
    assert_eq!(msg.command(), None);
}

#[test]
fn test_photo_message_with_reply() {
    let msg: Message = serde_json::from_value(json!({
        "message_id": 11,
        "date": 1_467_000_100,
        "edit_date": 1_467_000_200,
        "chat": {"id": -5, "type": "group", "title": "Friends"},
        "photo": [
            {"file_id": "small", "width": 90, "height": 60},
            {"file_id": "big", "width": 900, "height": 600, "file_size": 12345}
        ],
        "caption": "look",
        "reply_to_message": text_message()
    }))
    .unwrap();

    assert_eq!(msg.content_kind(), "photo");
    assert_eq!(msg.photo.len(), 2);
    assert_eq!(msg.photo[1].file_size, Some(12345));
    assert_eq!(msg.edit_date.map(|d| d.timestamp()), Some(1_467_000_200));
    let reply = msg.reply_to_message.as_deref().unwrap();
    assert_eq!(reply.message_id, 10);
}

#[test]
fn test_edited_message_untagged() {
    let edited: EditedMessage = serde_json::from_value(json!(true)).unwrap();
    assert_eq!(edited, EditedMessage::Inline(true));

    let edited: EditedMessage = serde_json::from_value(text_message()).unwrap();
    assert!(matches!(edited, EditedMessage::Message(m) if m.message_id == 10));
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn test_update_kinds() {
    let update: Update =
        serde_json::from_value(json!({"update_id": 1, "message": text_message()})).unwrap();
    assert_eq!(update.kind(), "message");
    assert_eq!(update.sender().map(|u| u.id), Some(5));

    let update: Update = serde_json::from_value(json!({
        "update_id": 2,
        "callback_query": {
            "id": "cq1",
            "from": {"id": 9, "first_name": "Bob"},
            "message": text_message(),
            "data": "ok"
        }
    }))
    .unwrap();
    assert_eq!(update.kind(), "callback_query");
    assert_eq!(update.sender().map(|u| u.id), Some(9));
    assert_eq!(update.any_message().map(|m| m.message_id), Some(10));

    let update: Update = serde_json::from_value(json!({
        "update_id": 3,
        "inline_query": {
            "id": "iq1",
            "from": {"id": 4, "first_name": "Eve"},
            "query": "cats",
            "offset": ""
        }
    }))
    .unwrap();
    assert_eq!(update.kind(), "inline_query");
    assert!(update.any_message().is_none());
}

#[test]
fn test_update_unknown_payload() {
    let update: Update =
        serde_json::from_value(json!({"update_id": 4, "poll": {"id": "p"}})).unwrap();
    assert_eq!(update.kind(), "unknown");
    assert!(update.sender().is_none());
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_file_and_profile_photos() {
    let file: File = serde_json::from_value(json!({
        "file_id": "abc",
        "file_size": 2048,
        "file_path": "photos/file_1.jpg"
    }))
    .unwrap();
    assert_eq!(file.file_path.as_deref(), Some("photos/file_1.jpg"));

    let photos: UserProfilePhotos = serde_json::from_value(json!({
        "total_count": 1,
        "photos": [[{"file_id": "p1", "width": 160, "height": 160}]]
    }))
    .unwrap();
    assert_eq!(photos.total_count, 1);
    assert_eq!(photos.photos[0][0].file_id, "p1");
}
