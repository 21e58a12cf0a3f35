//! Terminal chat client for the lanchat relay.
//!
//! Reads lines from the terminal, sends them as chat messages and renders
//! everything the relay broadcasts.

pub mod domain;
pub mod dto;
pub mod error;
pub mod formatter;
pub mod runner;
pub mod session;
pub mod ui;

pub use runner::run_client;
