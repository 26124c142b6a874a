//! 接続から届くイベントと、接続へ送る通知（ドメイン表現）
//!
//! ワイヤ形式との変換は Infrastructure 層（`infrastructure::dto`）が担当する。

use super::{
    room::RoomView,
    value_object::{Team, Timestamp},
};

/// チャット 1 件（サーバー側では保持しない）
///
/// Room 全体へのお知らせは status で送るため、送信者は常にいずれかの Team。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub sender: Team,
    pub message: String,
    pub sent_at: Timestamp,
}

/// 接続に送る通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// 受信者ごとの Room スナップショット
    RoomStatus(RoomView),
    Chat(ChatEntry),
    /// クライアント側のチャット履歴をクリアさせる
    ResetChat,
    /// 応答・Room 全体へのお知らせ
    Status { success: bool, message: String },
}

impl Notification {
    pub fn status(success: bool, message: impl Into<String>) -> Self {
        Self::Status {
            success,
            message: message.into(),
        }
    }
}

/// 接続から届くイベント
///
/// `Disconnecting` はトランスポート層が接続終了時に発火するもので、クライアントからは送れない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionEvent {
    CreateRoom { code: String },
    JoinRoom { code: String },
    Move { location: i64 },
    Chat { message: String },
    VoteToContinue,
    Disconnecting,
}

impl ConnectionEvent {
    /// ワイヤ上のイベント名
    pub fn name(&self) -> &'static str {
        match self {
            ConnectionEvent::CreateRoom { .. } => "createroom",
            ConnectionEvent::JoinRoom { .. } => "joinroom",
            ConnectionEvent::Move { .. } => "move",
            ConnectionEvent::Chat { .. } => "chat",
            ConnectionEvent::VoteToContinue => "votetocontinue",
            ConnectionEvent::Disconnecting => "disconnecting",
        }
    }
}
