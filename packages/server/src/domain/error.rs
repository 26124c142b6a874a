//! ドメイン層のエラー型
//!
//! `RoomError` の `Display` はそのままクライアントへの `status` メッセージになる。

use thiserror::Error;

/// 盤面操作のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Invalid move: location out of bounds")]
    OutOfBounds,

    #[error("Invalid move: space occupied")]
    CellOccupied,
}

/// Room / Room Directory に対する操作のエラー
///
/// いずれもクライアントの不正なリクエストを表し、プロセスにとって致命的ではない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    // 入室系
    #[error("Invalid room code.")]
    InvalidCode,

    #[error("Room code already taken.")]
    DuplicateCode,

    #[error("Already in a room.")]
    AlreadyInRoom,

    #[error("Room is full.")]
    RoomFull,

    #[error("Room not found.")]
    NotFound,

    // メンバーシップ
    #[error("Not a member of this room.")]
    NotAMember,

    // 着手
    #[error("Not your team's turn.")]
    NotYourTurn,

    #[error("Invalid move: location out of bounds")]
    OutOfBounds,

    #[error("Invalid move: space occupied")]
    CellOccupied,

    // チャット・再戦
    #[error("Invalid chat message.")]
    InvalidMessage,

    #[error("The game is not over yet.")]
    GameNotOver,
}

impl From<BoardError> for RoomError {
    fn from(error: BoardError) -> Self {
        match error {
            BoardError::OutOfBounds => RoomError::OutOfBounds,
            BoardError::CellOccupied => RoomError::CellOccupied,
        }
    }
}

/// MessagePusher のエラー
#[derive(Debug, Error)]
pub enum MessagePushError {
    /// 送信先のクライアントが登録されていない
    #[error("Client '{0}' not found")]
    ClientNotFound(String),

    /// チャンネルへの送信に失敗した（受信側がすでに閉じている）
    #[error("Failed to push message: {0}")]
    PushFailed(String),
}
