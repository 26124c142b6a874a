//! UseCase: チャット送信処理
//!
//! チャットはサーバーに保存せず、検証後に Room の参加者全員（送信者を含む）へ配信する。

use std::sync::Arc;

use sanmoku_shared::time::Clock;

use crate::domain::{
    ChatEntry, ConnectionId, MessagePusher, Notification, RoomError, RoomRepository,
    Timestamp,
};

use super::notify;

/// チャット送信のユースケース
pub struct SendChatUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl SendChatUseCase {
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

    /// チャット送信を実行
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        message: String,
    ) -> Result<(), RoomError> {
        let (team, content, room) = self.repository.post_chat(connection_id, message).await?;

        let entry = ChatEntry {
            sender: team,
            message: content.into_string(),
            sent_at: Timestamp::new(self.clock.now_jst_millis()),
        };

        notify::announce(self.message_pusher.as_ref(), &room, Notification::Chat(entry)).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::Team,
        usecase::test_support::{RecordingPusher, conn, create_test_repository},
    };
    use sanmoku_shared::time::FixedClock;

    #[tokio::test]
    async fn test_send_chat_reaches_everyone_including_sender() {
        // テスト項目: チャットは送信者を含む参加者全員に届く
        // given (前提条件):
        let repository = create_test_repository();
        repository
            .create_room("abc".to_string(), conn("alice"), Timestamp::new(0))
            .await
            .unwrap();
        repository
            .join_room("abc".to_string(), conn("bob"))
            .await
            .unwrap();
        let pusher = RecordingPusher::new();
        let usecase = SendChatUseCase::new(
            repository,
            pusher.clone(),
            Arc::new(FixedClock::new(42_000)),
        );

        // when (操作):
        let result = usecase.execute(&conn("bob"), "gg".to_string()).await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
        let expected = Notification::Chat(ChatEntry {
            sender: Team::Two,
            message: "gg".to_string(),
            sent_at: Timestamp::new(42_000),
        });
        assert_eq!(pusher.sent_to(&conn("alice")), vec![expected.clone()]);
        assert_eq!(pusher.sent_to(&conn("bob")), vec![expected]);
    }

    #[tokio::test]
    async fn test_send_chat_while_waiting() {
        // テスト項目: 相手がいなくてもチャットは送れる（フェーズに関係なく許可）
        // given (前提条件):
        let repository = create_test_repository();
        repository
            .create_room("abc".to_string(), conn("alice"), Timestamp::new(0))
            .await
            .unwrap();
        let pusher = RecordingPusher::new();
        let usecase =
            SendChatUseCase::new(repository, pusher.clone(), Arc::new(FixedClock::new(0)));

        // when (操作):
        let result = usecase.execute(&conn("alice"), "anyone?".to_string()).await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
        assert_eq!(pusher.sent_to(&conn("alice")).len(), 1);
    }

    #[tokio::test]
    async fn test_send_chat_rejections() {
        // テスト項目: 未参加の接続や空のメッセージは拒否される
        // given (前提条件):
        let repository = create_test_repository();
        repository
            .create_room("abc".to_string(), conn("alice"), Timestamp::new(0))
            .await
            .unwrap();
        let pusher = RecordingPusher::new();
        let usecase =
            SendChatUseCase::new(repository, pusher.clone(), Arc::new(FixedClock::new(0)));

        // when (操作) / then (期待する結果):
        assert_eq!(
            usecase.execute(&conn("carol"), "hi".to_string()).await,
            Err(RoomError::NotAMember)
        );
        assert_eq!(
            usecase.execute(&conn("alice"), "   ".to_string()).await,
            Err(RoomError::InvalidMessage)
        );
        assert_eq!(
            usecase.execute(&conn("alice"), "a".repeat(501)).await,
            Err(RoomError::InvalidMessage)
        );
        assert_eq!(pusher.total(), 0);
    }
}
