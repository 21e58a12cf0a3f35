//! Utilities shared by the lanchat relay server and terminal client.

pub mod logger;
pub mod time;
