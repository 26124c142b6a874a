//! 値オブジェクト
//!
//! 生成時にバリデーションを行い、不正な値を持つインスタンスが存在しないことを保証する。

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::RoomError;

/// Room code の最大文字数
pub const MAX_ROOM_CODE_LENGTH: usize = 32;

/// チャットメッセージの最大文字数
pub const MAX_MESSAGE_LENGTH: usize = 500;

/// 盤面のマス数
pub const BOARD_SIZE: usize = 9;

/// 接続ハンドル
///
/// WebSocket 接続ごとにサーバーが採番する一時的な ID。クライアントからは指定できない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// 新しい ConnectionId を生成（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 既知の文字列から ConnectionId を作成
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room code
///
/// 前後の空白を除去した上で、空文字列と `MAX_ROOM_CODE_LENGTH` 超過を拒否する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomCode(String);

impl RoomCode {
    pub fn new(value: &str) -> Result<Self, RoomError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MAX_ROOM_CODE_LENGTH {
            return Err(RoomError::InvalidCode);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 盤面上の位置（0..=8、行優先）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location(usize);

impl Location {
    pub fn new(value: i64) -> Result<Self, RoomError> {
        usize::try_from(value)
            .ok()
            .filter(|index| *index < BOARD_SIZE)
            .map(Self)
            .ok_or(RoomError::OutOfBounds)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// チーム（= 席）
///
/// Team One は席 0、Team Two は席 1。ワイヤ上ではそれぞれ 1 / 2 で表現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::One, Team::Two];

    /// ターン数から手番の Team を得る（偶数: One、奇数: Two）
    pub fn for_turn(turn: u32) -> Self {
        if turn % 2 == 0 { Team::One } else { Team::Two }
    }

    pub fn seat_index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }

    /// ワイヤ上の数値表現（1 / 2）
    pub fn number(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// チャットメッセージ本文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent(String);

impl MessageContent {
    pub fn new(value: String) -> Result<Self, RoomError> {
        if value.trim().is_empty() || value.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(RoomError::InvalidMessage);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
