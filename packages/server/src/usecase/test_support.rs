//! UseCase テスト用のヘルパー

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use tokio::sync::{Mutex as AsyncMutex, Notify};

use crate::{
    domain::{
        ConnectionId, MessagePushError, MessagePusher, Notification, PusherChannel,
        RoomDirectory,
    },
    infrastructure::repository::InMemoryRoomRepository,
};

/// 送信された通知を記録する MessagePusher
#[derive(Default)]
pub(crate) struct RecordingPusher {
    sent: Mutex<Vec<(ConnectionId, Notification)>>,
}

impl RecordingPusher {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 接続ごとに送信された通知（送信順）
    pub(crate) fn sent_to(&self, connection_id: &ConnectionId) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| id == connection_id)
            .map(|(_, notification)| notification.clone())
            .collect()
    }

    pub(crate) fn total(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub(crate) fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl MessagePusher for RecordingPusher {
    async fn register_client(&self, _connection_id: ConnectionId, _sender: PusherChannel) {}

    async fn unregister_client(&self, _connection_id: &ConnectionId) {}

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        notification: Notification,
    ) -> Result<(), MessagePushError> {
        self.sent
            .lock()
            .unwrap()
            .push((connection_id.clone(), notification));
        Ok(())
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        notification: Notification,
    ) -> Result<(), MessagePushError> {
        let mut sent = self.sent.lock().unwrap();
        for target in targets {
            sent.push((target, notification.clone()));
        }
        Ok(())
    }
}

/// 有効化後最初の roomstatus の送出を止める MessagePusher
///
/// 止めた時点で `entered` を通知し、`release` が通知されるまで待ってから記録する。
#[derive(Default)]
pub(crate) struct GatedPusher {
    pub(crate) recorded: RecordingPusher,
    pub(crate) entered: Notify,
    pub(crate) release: Notify,
    armed: AtomicBool,
}

impl GatedPusher {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl MessagePusher for GatedPusher {
    async fn register_client(&self, _connection_id: ConnectionId, _sender: PusherChannel) {}

    async fn unregister_client(&self, _connection_id: &ConnectionId) {}

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        notification: Notification,
    ) -> Result<(), MessagePushError> {
        if matches!(notification, Notification::RoomStatus(_))
            && self.armed.swap(false, Ordering::SeqCst)
        {
            self.entered.notify_one();
            self.release.notified().await;
        }
        self.recorded.push_to(connection_id, notification).await
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        notification: Notification,
    ) -> Result<(), MessagePushError> {
        self.recorded.broadcast(targets, notification).await
    }
}

pub(crate) fn create_test_repository() -> Arc<InMemoryRoomRepository> {
    Arc::new(InMemoryRoomRepository::new(Arc::new(AsyncMutex::new(
        RoomDirectory::new(),
    ))))
}

pub(crate) fn conn(id: &str) -> ConnectionId {
    ConnectionId::new(id)
}

/// status 通知のメッセージ一覧
pub(crate) fn status_messages(notifications: &[Notification]) -> Vec<(bool, String)> {
    notifications
        .iter()
        .filter_map(|notification| match notification {
            Notification::Status { success, message } => Some((*success, message.clone())),
            _ => None,
        })
        .collect()
}
