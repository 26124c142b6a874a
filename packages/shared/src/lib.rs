//! Utilities shared by the Sanmoku packages: logging setup and time helpers.

pub mod logger;
pub mod time;
