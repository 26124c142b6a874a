//! UseCase: 切断処理
//!
//! 切断した接続の Room を disconnect（終端）にして Directory から削除し、
//! 残った参加者に最終状態を通知する。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Notification, RoomCode, RoomRepository};

use super::notify;

/// 切断のユースケース
pub struct DisconnectPlayerUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectPlayerUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// * `Some(RoomCode)` - 削除された Room の code
    /// * `None` - 接続はどの Room にも参加していなかった
    pub async fn execute(&self, connection_id: &ConnectionId) -> Option<RoomCode> {
        let departure = self.repository.disconnect(connection_id).await?;
        let room = departure.room;

        tracing::info!(
            "Team {} left room '{}'; room closed",
            departure.team,
            room.code()
        );

        let pusher = self.message_pusher.as_ref();
        notify::push_room_status(pusher, &room).await;
        notify::announce(
            pusher,
            &room,
            Notification::status(false, "Opponent disconnected."),
        )
        .await;

        Some(room.code().clone())
    }
}
