//! UseCase: 着手処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - MakeMoveUseCase::execute() メソッド
//! - 着手後の roomstatus 配信と、決着時のお知らせ
//!
//! ### なぜこのテストが必要か
//! - 配信失敗で状態が巻き戻らないこと（ベストエフォート配信）を保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：着手、勝利、引き分け
//! - 異常系：手番違い・範囲外・使用済みのマス

use std::sync::Arc;

use crate::domain::{
    ConnectionId, MessagePusher, Notification, Outcome, RoomError, RoomRepository,
};

use super::notify;

/// 着手のユースケース
pub struct MakeMoveUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl MakeMoveUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 着手を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 着手する接続
    /// * `location` - マス番号（0..=8 以外は OutOfBounds）
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        location: i64,
    ) -> Result<(), RoomError> {
        let (outcome, room) = self.repository.make_move(connection_id, location).await?;

        tracing::debug!(
            "Team {} moved at {} in room '{}'",
            outcome.team,
            outcome.location.index(),
            room.code()
        );

        let pusher = self.message_pusher.as_ref();
        notify::push_room_status(pusher, &room).await;

        match outcome.outcome {
            Outcome::Win { team, line_id } => {
                tracing::info!(
                    "Team {} won room '{}' (line {})",
                    team,
                    room.code(),
                    line_id
                );
                notify::announce(
                    pusher,
                    &room,
                    Notification::status(true, format!("Team {} wins!", team)),
                )
                .await;
            }
            Outcome::Tie => {
                tracing::info!("Room '{}' ended in a tie", room.code());
                notify::announce(pusher, &room, Notification::status(true, "Tie game.")).await;
            }
            Outcome::None => {}
        }

        Ok(())
    }
}
