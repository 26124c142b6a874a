//! UseCase: 再戦投票処理

use std::sync::Arc;

use crate::domain::{
    ConnectionId, MessagePusher, Notification, RoomError, RoomRepository, VoteOutcome,
};

use super::notify;

/// 再戦投票のユースケース
pub struct VoteToContinueUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl VoteToContinueUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 再戦投票を実行
    ///
    /// 投票のたびに roomstatus を配信し、両者の投票が揃うと新しいゲームが始まる。
    pub async fn execute(&self, connection_id: &ConnectionId) -> Result<(), RoomError> {
        let (outcome, room) = self.repository.vote_to_continue(connection_id).await?;

        let message = match outcome {
            VoteOutcome::Waiting { team } => format!("Player {} wants a rematch.", team),
            VoteOutcome::Restarted => {
                tracing::info!("Rematch started in room '{}'", room.code());
                "Rematch started.".to_string()
            }
        };

        let pusher = self.message_pusher.as_ref();
        notify::push_room_status(pusher, &room).await;
        notify::announce(pusher, &room, Notification::status(true, message)).await;

        Ok(())
    }
}
