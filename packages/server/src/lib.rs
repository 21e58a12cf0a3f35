//! Single-room LAN chat relay.
//!
//! Accepts WebSocket connections, echoes each accepted chat message to its
//! sender, fans it out to every other connection, and announces joins and
//! leaves.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

use std::sync::Arc;

use domain::{ConnectionRegistry, SystemClock};
use infrastructure::registry::InMemoryConnectionRegistry;
use ui::Server;
use usecase::{
    BroadcastEngine, ConnectParticipantUseCase, DisconnectParticipantUseCase, SendMessageUseCase,
};

/// Wire the relay with an empty in-memory registry and the system clock.
///
/// Dependencies are created in order:
/// 1. Registry
/// 2. BroadcastEngine
/// 3. UseCases
/// 4. Server
pub fn build_relay() -> Server {
    // 1. Create Registry (in-memory connection set)
    let registry: Arc<dyn ConnectionRegistry> = Arc::new(InMemoryConnectionRegistry::new());

    // 2. Create BroadcastEngine
    let engine = Arc::new(BroadcastEngine::new(registry.clone(), Arc::new(SystemClock)));

    // 3. Create UseCases
    let connect_participant_usecase = Arc::new(ConnectParticipantUseCase::new(
        registry.clone(),
        engine.clone(),
    ));
    let disconnect_participant_usecase = Arc::new(DisconnectParticipantUseCase::new(
        registry.clone(),
        engine.clone(),
    ));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(engine));

    // 4. Create the server
    Server::new(
        connect_participant_usecase,
        disconnect_participant_usecase,
        send_message_usecase,
    )
}
