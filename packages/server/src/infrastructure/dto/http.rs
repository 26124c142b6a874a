//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Room summary for `GET /api/rooms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub code: String,
    pub phase: String,
    /// Number of occupied seats
    pub players: usize,
    /// RFC 3339 (JST)
    pub created_at: String,
}

/// Seat entry of [`RoomDetailDto`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatDto {
    pub team: u8,
    pub occupied: bool,
}

/// Room detail for `GET /api/rooms/{code}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub code: String,
    pub phase: String,
    pub turn: u32,
    pub board: [u8; 9],
    pub seats: Vec<SeatDto>,
    pub winning_team: Option<u8>,
    pub winning_line: Option<u8>,
    /// RFC 3339 (JST)
    pub created_at: String,
}
