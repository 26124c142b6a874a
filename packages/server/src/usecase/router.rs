//! 受信イベントの振り分け
//!
//! 接続から届いた `ConnectionEvent` を 1 つの表（match）で各ユースケースに振り分け、
//! 結果を status として送信者に返す。status は遷移に伴う通知の後に送られる。
//!
//! イベントは 1 件ずつ処理する。遷移から通知の送出・status までを一続きで行うため、
//! 同じ Room の参加者が受け取る roomstatus は常に遷移の順に並ぶ。

use std::sync::Arc;

use sanmoku_shared::time::Clock;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionEvent, ConnectionId, MessagePusher, Notification, PusherChannel, RoomError,
    RoomRepository,
};

use super::{
    CreateRoomUseCase, DisconnectPlayerUseCase, JoinRoomUseCase, MakeMoveUseCase,
    SendChatUseCase, VoteToContinueUseCase, notify,
};

/// 受信フレームを解釈できなかったときの status メッセージ
pub const MALFORMED_MESSAGE: &str = "Malformed message.";

/// イベントルーター
pub struct EventRouter {
    /// 遷移と通知の送出を直列化する
    sequence: Mutex<()>,
    message_pusher: Arc<dyn MessagePusher>,
    create_room_usecase: CreateRoomUseCase,
    join_room_usecase: JoinRoomUseCase,
    make_move_usecase: MakeMoveUseCase,
    send_chat_usecase: SendChatUseCase,
    vote_to_continue_usecase: VoteToContinueUseCase,
    disconnect_player_usecase: DisconnectPlayerUseCase,
}

impl EventRouter {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            create_room_usecase: CreateRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
                clock.clone(),
            ),
            join_room_usecase: JoinRoomUseCase::new(repository.clone(), message_pusher.clone()),
            make_move_usecase: MakeMoveUseCase::new(repository.clone(), message_pusher.clone()),
            send_chat_usecase: SendChatUseCase::new(
                repository.clone(),
                message_pusher.clone(),
                clock,
            ),
            vote_to_continue_usecase: VoteToContinueUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            ),
            disconnect_player_usecase: DisconnectPlayerUseCase::new(
                repository,
                message_pusher.clone(),
            ),
            message_pusher,
            sequence: Mutex::new(()),
        }
    }

    /// 新しい接続の送信チャネルを登録
    pub async fn connect(&self, connection_id: ConnectionId, sender: PusherChannel) {
        tracing::info!("Connection '{}' opened", connection_id);
        self.message_pusher
            .register_client(connection_id, sender)
            .await;
    }

    /// イベントを処理し、`disconnecting` 以外は送信者に status を返す
    pub async fn dispatch(&self, connection_id: &ConnectionId, event: ConnectionEvent) {
        tracing::debug!("'{}' -> {}", connection_id, event.name());
        let _sequence = self.sequence.lock().await;

        let result: Result<&'static str, RoomError> = match event {
            ConnectionEvent::CreateRoom { code } => self
                .create_room_usecase
                .execute(connection_id, code)
                .await
                .map(|()| "Room created."),
            ConnectionEvent::JoinRoom { code } => self
                .join_room_usecase
                .execute(connection_id, code)
                .await
                .map(|()| "Joined room."),
            ConnectionEvent::Move { location } => self
                .make_move_usecase
                .execute(connection_id, location)
                .await
                .map(|()| "Move accepted."),
            ConnectionEvent::Chat { message } => self
                .send_chat_usecase
                .execute(connection_id, message)
                .await
                .map(|()| "Message sent."),
            ConnectionEvent::VoteToContinue => self
                .vote_to_continue_usecase
                .execute(connection_id)
                .await
                .map(|()| "Vote recorded."),
            ConnectionEvent::Disconnecting => {
                self.disconnect(connection_id).await;
                return;
            }
        };

        let ack = match result {
            Ok(message) => Notification::status(true, message),
            Err(e) => {
                tracing::warn!("Rejected request from '{}': {}", connection_id, e);
                Notification::status(false, e.to_string())
            }
        };
        notify::push(self.message_pusher.as_ref(), connection_id, ack).await;
    }

    /// 解釈できなかったフレームへの応答
    pub async fn reject_malformed(&self, connection_id: &ConnectionId) {
        notify::push(
            self.message_pusher.as_ref(),
            connection_id,
            Notification::status(false, MALFORMED_MESSAGE),
        )
        .await;
    }

    async fn disconnect(&self, connection_id: &ConnectionId) {
        if let Some(code) = self.disconnect_player_usecase.execute(connection_id).await {
            tracing::info!("Room '{}' removed", code);
        }
        self.message_pusher.unregister_client(connection_id).await;
        tracing::info!("Connection '{}' closed", connection_id);
    }
}
