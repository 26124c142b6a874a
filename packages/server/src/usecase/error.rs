//! UseCase 層のエラー型
//!
//! Room の遷移に関するエラーはドメインの `RoomError` をそのまま返す。

use thiserror::Error;

/// Room 詳細取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("Room not found")]
    RoomNotFound,
}
