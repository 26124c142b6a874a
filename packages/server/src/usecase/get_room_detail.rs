//! UseCase: Room 詳細取得

use std::sync::Arc;

use crate::domain::{Room, RoomRepository};

use super::error::GetRoomDetailError;

/// Room 詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomDetailUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// code を指定して Room を取得
    pub async fn execute(&self, code: &str) -> Result<Room, GetRoomDetailError> {
        self.repository
            .get_room(code)
            .await
            .ok_or(GetRoomDetailError::RoomNotFound)
    }
}
