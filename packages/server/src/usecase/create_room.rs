//! UseCase: Room 作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - 作成者への resetchat → roomstatus の送信順
//!
//! ### どのような状況を想定しているか
//! - 正常系：Room を作成し、作成者が Team 1 として着席する
//! - 異常系：code 重複・不正な code・既に別 Room に参加中

use std::sync::Arc;

use sanmoku_shared::time::Clock;

use crate::domain::{
    ConnectionId, MessagePusher, Notification, RoomError, RoomRepository, Timestamp,
};

use super::notify;

/// Room 作成のユースケース
pub struct CreateRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl CreateRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// Room 作成を実行
    ///
    /// 成功時は作成者に resetchat と roomstatus を送信する。
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        code: String,
    ) -> Result<(), RoomError> {
        let created_at = Timestamp::new(self.clock.now_jst_millis());

        // 1. Repository 経由で Room を作成（作成者は席 0）
        let room = self
            .repository
            .create_room(code, connection_id.clone(), created_at)
            .await?;

        tracing::info!("Room '{}' created by '{}'", room.code(), connection_id);

        // 2. 作成者に通知
        notify::push(
            self.message_pusher.as_ref(),
            connection_id,
            Notification::ResetChat,
        )
        .await;
        notify::push_room_status(self.message_pusher.as_ref(), &room).await;

        Ok(())
    }
}
