//! ドメイン層
//!
//! 盤面・席・Room・Room Directory のビジネスルールと、
//! UseCase 層が依存するインターフェース（Repository / MessagePusher）を定義する。

pub mod board;
pub mod directory;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod repository;
pub mod room;
pub mod seat;
pub mod value_object;

pub use board::{Board, Cell, Outcome, WIN_LINES, apply_move, detect_outcome};
pub use directory::{Departure, RoomDirectory};
pub use error::{BoardError, MessagePushError, RoomError};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use event::{ChatEntry, ConnectionEvent, Notification};
pub use repository::RoomRepository;
pub use room::{JoinOutcome, MoveOutcome, Phase, Room, RoomView, VoteOutcome};
pub use seat::{Seat, SeatRegistry};
pub use value_object::{
    BOARD_SIZE, ConnectionId, Location, MessageContent, RoomCode, Team, Timestamp,
};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
