//! Request handlers.

pub mod http;
pub mod websocket;

pub use http::health_check;
pub use websocket::websocket_handler;
