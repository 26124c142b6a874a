//! Sanmoku: two-player tic-tac-toe room server.
//!
//! Players create or join a room by code over WebSocket, take alternating moves on a
//! shared 3x3 board and chat within the room. Layers follow the usual
//! domain / usecase / infrastructure / ui split.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
