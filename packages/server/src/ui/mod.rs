//! UI 層（axum による WebSocket / HTTP サーバー）

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
