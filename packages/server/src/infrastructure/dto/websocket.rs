//! WebSocket event DTOs.
//!
//! Every frame is a JSON object `{"event": "<name>", "data": <payload>}`.

use serde::{Deserialize, Serialize};

/// Events sent by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ClientMessage {
    CreateRoom(String),
    JoinRoom(String),
    Move(i64),
    Chat(String),
    VoteToContinue,
}

/// Events sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ServerMessage {
    RoomStatus(RoomStatusPayload),
    Chat(ChatPayload),
    ResetChat,
    Status(StatusPayload),
}

/// Per-recipient room snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatusPayload {
    pub code: String,
    pub player1_connected: bool,
    pub player2_connected: bool,
    /// 0 = blank, 1 = team 1, 2 = team 2
    pub board: [u8; 9],
    pub turn: u32,
    pub game_state: String,
    pub game_state_over: bool,
    pub game_state_in_progress: bool,
    pub winning_team: Option<u8>,
    pub winning_line: Option<u8>,
    pub your_team: u8,
    pub your_turn: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPayload {
    /// The sender's team (1 or 2)
    pub sender_team: u8,
    pub message: String,
    /// "HH:MM" (JST)
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_messages() {
        // テスト項目: クライアントからの各イベントがパースできる
        let cases = [
            (
                r#"{"event":"createroom","data":"abc"}"#,
                ClientMessage::CreateRoom("abc".to_string()),
            ),
            (
                r#"{"event":"joinroom","data":"abc"}"#,
                ClientMessage::JoinRoom("abc".to_string()),
            ),
            (r#"{"event":"move","data":4}"#, ClientMessage::Move(4)),
            (r#"{"event":"move","data":-3}"#, ClientMessage::Move(-3)),
            (
                r#"{"event":"chat","data":"hi"}"#,
                ClientMessage::Chat("hi".to_string()),
            ),
            (r#"{"event":"votetocontinue"}"#, ClientMessage::VoteToContinue),
        ];

        for (json, expected) in cases {
            let parsed: ClientMessage = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, expected, "input: {json}");
        }
    }

    #[test]
    fn test_reject_unknown_or_transport_only_events() {
        // テスト項目: 未知のイベントや disconnecting はクライアントから送れない
        assert!(serde_json::from_str::<ClientMessage>(r#"{"event":"disconnecting"}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>(r#"{"event":"move","data":"4"}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>("not json").is_err());
    }

    #[test]
    fn test_serialize_status_and_resetchat() {
        // テスト項目: status / resetchat のワイヤ形式
        let status = ServerMessage::Status(StatusPayload {
            success: false,
            message: "Room is full.".to_string(),
        });
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "event": "status",
                "data": { "success": false, "message": "Room is full." }
            })
        );

        let value = serde_json::to_value(ServerMessage::ResetChat).unwrap();
        assert_eq!(value, serde_json::json!({ "event": "resetchat" }));
    }

    #[test]
    fn test_serialize_chat_payload() {
        let chat = ServerMessage::Chat(ChatPayload {
            sender_team: 2,
            message: "hello".to_string(),
            timestamp: "21:30".to_string(),
        });
        let value = serde_json::to_value(&chat).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "event": "chat",
                "data": { "senderTeam": 2, "message": "hello", "timestamp": "21:30" }
            })
        );
    }
}
