//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! `RoomDirectory` を Mutex で保護し、インメモリ DB として使用します。
//!
//! ロックを保持している間に行うのは `RoomDirectory` の同期的な呼び出し 1 回だけで、
//! 途中で await しない。そのため各遷移は他の遷移に対して不可分になる。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, Departure, JoinOutcome, MessageContent, MoveOutcome, Room,
    RoomDirectory, RoomError, RoomRepository, Team, Timestamp, VoteOutcome,
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    /// Room Directory（プロセス起動時に 1 つだけ生成して注入する）
    directory: Arc<Mutex<RoomDirectory>>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(directory: Arc<Mutex<RoomDirectory>>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create_room(
        &self,
        code: String,
        connection_id: ConnectionId,
        created_at: Timestamp,
    ) -> Result<Room, RoomError> {
        let mut directory = self.directory.lock().await;
        directory
            .create(&code, connection_id, created_at)
            .map(Room::clone)
    }

    async fn join_room(
        &self,
        code: String,
        connection_id: ConnectionId,
    ) -> Result<(JoinOutcome, Room), RoomError> {
        let mut directory = self.directory.lock().await;
        directory
            .join(&code, connection_id)
            .map(|(outcome, room)| (outcome, room.clone()))
    }

    async fn make_move(
        &self,
        connection_id: &ConnectionId,
        location: i64,
    ) -> Result<(MoveOutcome, Room), RoomError> {
        let mut directory = self.directory.lock().await;
        directory
            .make_move(connection_id, location)
            .map(|(outcome, room)| (outcome, room.clone()))
    }

    async fn post_chat(
        &self,
        connection_id: &ConnectionId,
        message: String,
    ) -> Result<(Team, MessageContent, Room), RoomError> {
        let directory = self.directory.lock().await;
        directory
            .chat(connection_id, message)
            .map(|(team, content, room)| (team, content, room.clone()))
    }

    async fn vote_to_continue(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<(VoteOutcome, Room), RoomError> {
        let mut directory = self.directory.lock().await;
        directory
            .vote_to_continue(connection_id)
            .map(|(outcome, room)| (outcome, room.clone()))
    }

    async fn disconnect(&self, connection_id: &ConnectionId) -> Option<Departure> {
        let mut directory = self.directory.lock().await;
        directory.disconnect(connection_id)
    }

    async fn get_room(&self, code: &str) -> Option<Room> {
        let directory = self.directory.lock().await;
        directory.get(code).cloned()
    }

    async fn get_rooms(&self) -> Vec<Room> {
        let directory = self.directory.lock().await;
        let mut rooms: Vec<Room> = directory.rooms().cloned().collect();
        // Sort by created_at, then code for consistent ordering
        rooms.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.code().as_str().cmp(b.code().as_str()))
        });
        rooms
    }
}
