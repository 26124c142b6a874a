//! UseCase: Room 参加処理
//!
//! 参加者に resetchat を送り、着席中の全員に roomstatus を配信する。
//! 2 席が埋まった場合はゲーム開始を通知する。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Notification, RoomError, RoomRepository};

use super::notify;

/// Room 参加のユースケース
pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// Room 参加を実行
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        code: String,
    ) -> Result<(), RoomError> {
        let (outcome, room) = self
            .repository
            .join_room(code, connection_id.clone())
            .await?;

        tracing::info!(
            "'{}' joined room '{}' as team {}",
            connection_id,
            room.code(),
            outcome.team
        );

        let pusher = self.message_pusher.as_ref();
        notify::push(pusher, connection_id, Notification::ResetChat).await;
        notify::push_room_status(pusher, &room).await;
        notify::announce(
            pusher,
            &room,
            Notification::status(true, format!("Player {} joined the room.", outcome.team)),
        )
        .await;

        if outcome.started {
            tracing::info!("Game started in room '{}'", room.code());
            notify::announce(
                pusher,
                &room,
                Notification::status(true, "Game started. Team 1 moves first."),
            )
            .await;
        }

        Ok(())
    }
}
