//! Shared application state.

use std::sync::Arc;

use crate::usecase::{EventRouter, GetRoomDetailUseCase, GetRoomsUseCase};

/// Shared application state
pub struct AppState {
    /// EventRouter（WebSocket イベントの振り分け）
    pub event_router: Arc<EventRouter>,
    /// GetRoomsUseCase（Room 一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（Room 詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}
