//! Data Transfer Objects (DTOs) for the relay.
//!
//! - `websocket`: inbound/outbound WebSocket frames
//! - `conversion`: DTO ↔ domain entity conversion

pub mod conversion;
pub mod websocket;
