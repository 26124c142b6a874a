//! 通知配信の共通処理
//!
//! 配信は遷移の確定後に行うベストエフォートで、失敗しても状態は巻き戻さない。

use crate::domain::{ConnectionId, MessagePusher, Notification, Room, Team};

/// 特定の接続に送信（失敗はログのみ）
pub(crate) async fn push(
    message_pusher: &dyn MessagePusher,
    connection_id: &ConnectionId,
    notification: Notification,
) {
    if let Err(e) = message_pusher.push_to(connection_id, notification).await {
        tracing::warn!("Failed to push to connection '{}': {}", connection_id, e);
    }
}

/// 着席中の全員に、受信者ごとの roomstatus を送信
pub(crate) async fn push_room_status(message_pusher: &dyn MessagePusher, room: &Room) {
    let occupants: Vec<(Team, ConnectionId)> = room
        .occupants()
        .map(|(team, connection_id)| (team, connection_id.clone()))
        .collect();

    for (team, connection_id) in occupants {
        push(
            message_pusher,
            &connection_id,
            Notification::RoomStatus(room.view_for(team)),
        )
        .await;
    }
}

/// 着席中の全員に同じ通知を送信
pub(crate) async fn announce(
    message_pusher: &dyn MessagePusher,
    room: &Room,
    notification: Notification,
) {
    let targets: Vec<ConnectionId> = room
        .occupants()
        .map(|(_, connection_id)| connection_id.clone())
        .collect();

    if let Err(e) = message_pusher.broadcast(targets, notification).await {
        tracing::warn!("Failed to broadcast to room '{}': {}", room.code(), e);
    }
}
