//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドは 1 回の遷移を不可分に実行し、遷移後の Room のコピーを返す。
//! UseCase 層はその Room を元に通知を組み立てる。

use async_trait::async_trait;

use super::{
    ConnectionId, Departure, JoinOutcome, MessageContent, MoveOutcome, Room, RoomError,
    Team, Timestamp, VoteOutcome,
};

/// Room Repository trait
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Room を作成し、作成者を席 0 に座らせる
    async fn create_room(
        &self,
        code: String,
        connection_id: ConnectionId,
        created_at: Timestamp,
    ) -> Result<Room, RoomError>;

    /// Room に参加
    async fn join_room(
        &self,
        code: String,
        connection_id: ConnectionId,
    ) -> Result<(JoinOutcome, Room), RoomError>;

    /// 接続が参加している Room で着手
    async fn make_move(
        &self,
        connection_id: &ConnectionId,
        location: i64,
    ) -> Result<(MoveOutcome, Room), RoomError>;

    /// チャットを検証し、送信者の Team と本文を返す
    async fn post_chat(
        &self,
        connection_id: &ConnectionId,
        message: String,
    ) -> Result<(Team, MessageContent, Room), RoomError>;

    /// 再戦に投票
    async fn vote_to_continue(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<(VoteOutcome, Room), RoomError>;

    /// 切断を反映し、Room を削除する
    async fn disconnect(&self, connection_id: &ConnectionId) -> Option<Departure>;

    /// code で Room を取得
    async fn get_room(&self, code: &str) -> Option<Room>;

    /// 全ての Room を取得
    async fn get_rooms(&self) -> Vec<Room>;
}
