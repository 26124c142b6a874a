//! UseCase 層
//!
//! Room の遷移ごとに 1 つのユースケースを持ち、Repository で遷移を実行した後に
//! MessagePusher で通知を配信する。`EventRouter` が受信イベントを各ユースケースに振り分ける。

mod create_room;
mod disconnect_player;
mod error;
mod get_room_detail;
mod get_rooms;
mod join_room;
mod make_move;
mod notify;
mod router;
mod send_chat;
mod vote_to_continue;

#[cfg(test)]
mod test_support;

pub use create_room::CreateRoomUseCase;
pub use disconnect_player::DisconnectPlayerUseCase;
pub use error::GetRoomDetailError;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use make_move::MakeMoveUseCase;
pub use router::EventRouter;
pub use send_chat::SendChatUseCase;
pub use vote_to_continue::VoteToContinueUseCase;
