//! Conversion logic between DTOs and domain types.

use sanmoku_shared::time::{timestamp_to_jst_clock, timestamp_to_jst_rfc3339};

use crate::domain::{ChatEntry, ConnectionEvent, Notification, Room, RoomView, Team};
use crate::infrastructure::dto::{
    http::{RoomDetailDto, RoomSummaryDto, SeatDto},
    websocket as dto,
};

// ========================================
// DTO → Domain
// ========================================

impl From<dto::ClientMessage> for ConnectionEvent {
    fn from(message: dto::ClientMessage) -> Self {
        match message {
            dto::ClientMessage::CreateRoom(code) => ConnectionEvent::CreateRoom { code },
            dto::ClientMessage::JoinRoom(code) => ConnectionEvent::JoinRoom { code },
            dto::ClientMessage::Move(location) => ConnectionEvent::Move { location },
            dto::ClientMessage::Chat(message) => ConnectionEvent::Chat { message },
            dto::ClientMessage::VoteToContinue => ConnectionEvent::VoteToContinue,
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<RoomView> for dto::RoomStatusPayload {
    fn from(view: RoomView) -> Self {
        Self {
            code: view.code.to_string(),
            player1_connected: view.seats_occupied[0],
            player2_connected: view.seats_occupied[1],
            board: view.board,
            turn: view.turn,
            game_state: view.phase.as_str().to_string(),
            game_state_over: view.game_over,
            game_state_in_progress: view.in_progress,
            winning_team: view.winning_team.map(Team::number),
            winning_line: view.winning_line,
            your_team: view.your_team.number(),
            your_turn: view.your_turn,
        }
    }
}

impl From<ChatEntry> for dto::ChatPayload {
    fn from(entry: ChatEntry) -> Self {
        Self {
            sender_team: entry.sender.number(),
            message: entry.message,
            timestamp: timestamp_to_jst_clock(entry.sent_at.value()),
        }
    }
}

impl From<Notification> for dto::ServerMessage {
    fn from(notification: Notification) -> Self {
        match notification {
            Notification::RoomStatus(view) => dto::ServerMessage::RoomStatus(view.into()),
            Notification::Chat(entry) => dto::ServerMessage::Chat(entry.into()),
            Notification::ResetChat => dto::ServerMessage::ResetChat,
            Notification::Status { success, message } => {
                dto::ServerMessage::Status(dto::StatusPayload { success, message })
            }
        }
    }
}

impl From<&Room> for RoomSummaryDto {
    fn from(room: &Room) -> Self {
        Self {
            code: room.code().to_string(),
            phase: room.phase().as_str().to_string(),
            players: room.occupants().count(),
            created_at: timestamp_to_jst_rfc3339(room.created_at().value()),
        }
    }
}

impl From<&Room> for RoomDetailDto {
    fn from(room: &Room) -> Self {
        Self {
            code: room.code().to_string(),
            phase: room.phase().as_str().to_string(),
            turn: room.turn(),
            board: room.board().to_numbers(),
            seats: room
                .seats()
                .seats()
                .iter()
                .map(|seat| SeatDto {
                    team: seat.team().number(),
                    occupied: seat.is_occupied(),
                })
                .collect(),
            winning_team: room.winning_team().map(Team::number),
            winning_line: room.winning_line(),
            created_at: timestamp_to_jst_rfc3339(room.created_at().value()),
        }
    }
}
