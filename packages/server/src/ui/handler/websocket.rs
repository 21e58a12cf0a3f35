//! WebSocket connection handlers.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{
        ConnectInfo, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::{Connection, ConnectionId},
    ui::state::AppState,
    usecase::SendMessageError,
};

/// Accept the upgrade on any path; the protocol has no path or sub-protocol.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    ConnectInfo(remote_addr): ConnectInfo<SocketAddr>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state, remote_addr))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// The task ends when the socket write fails or every sender is dropped. Ending drops `rx`,
/// which is what marks the connection as closed for the registry.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Process one inbound frame. Rejected payloads are dropped without a response.
async fn relay_inbound(state: &AppState, connection_id: &ConnectionId, raw: &str) {
    match state.send_message_usecase.execute(connection_id, raw).await {
        Ok(relayed) => {
            tracing::debug!(
                "Message '{}' from '{}' relayed to {} other connection(s)",
                relayed.message.id.as_str(),
                connection_id,
                relayed.fan_out.delivered
            );
        }
        Err(SendMessageError::Rejected(reason)) => {
            tracing::debug!("Discarded payload from '{}': {}", connection_id, reason);
        }
        Err(e) => {
            tracing::warn!("Failed to relay message from '{}': {}", connection_id, e);
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, remote_addr: SocketAddr) {
    let connection_id = ConnectionId::generate();
    let (tx, rx) = mpsc::unbounded_channel();
    let (sender, mut receiver) = socket.split();

    // Announce to current members first, then register
    match state
        .connect_participant_usecase
        .execute(Connection::new(connection_id, tx))
        .await
    {
        Ok(report) => {
            tracing::info!(
                "Connection '{}' from {} registered (join announced to {})",
                connection_id,
                remote_addr,
                report.delivered
            );
        }
        Err(e) => {
            tracing::warn!(
                "Connection '{}' from {} registered without join announcement: {}",
                connection_id,
                remote_addr,
                e
            );
        }
    }

    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    relay_inbound(&state_clone, &connection_id, text.as_str()).await;
                }
                Message::Binary(data) => {
                    let raw = String::from_utf8_lossy(&data);
                    relay_inbound(&state_clone, &connection_id, &raw).await;
                }
                Message::Close(_) => {
                    tracing::debug!("Connection '{}' requested close", connection_id);
                    break;
                }
                // Ping/pong is handled by the WebSocket protocol
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut recv_task => {},
        _ = &mut send_task => {},
    };

    // Clean and abrupt termination are handled the same way
    let disconnect = &state.disconnect_participant_usecase;
    disconnect.begin(&connection_id).await;
    recv_task.abort();
    send_task.abort();

    match disconnect.execute(&connection_id).await {
        Ok(Some(report)) => {
            tracing::info!(
                "Connection '{}' closed (leave announced to {})",
                connection_id,
                report.delivered
            );
        }
        Ok(None) => {
            tracing::debug!("Connection '{}' was already unregistered", connection_id);
        }
        Err(e) => {
            tracing::warn!(
                "Connection '{}' unregistered without leave announcement: {}",
                connection_id,
                e
            );
        }
    }
}
