//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, protocol::Message},
};

use crate::{
    domain::build_chat_message,
    dto::ServerMessage,
    error::ClientError,
    formatter::MessageFormatter,
    ui::{prompt_for, redisplay_prompt},
};

/// Render one text frame received from the relay
fn render_text_frame(text: &str, name: Option<&str>) -> String {
    match serde_json::from_str::<ServerMessage>(text) {
        Ok(ServerMessage::Message {
            text,
            sender,
            timestamp,
            ..
        }) => {
            let is_me = name.is_some_and(|name| name == sender);
            MessageFormatter::format_chat_message(&sender, &text, timestamp, is_me)
        }
        Ok(ServerMessage::System { text, timestamp }) => {
            MessageFormatter::format_system_event(&text, timestamp)
        }
        // If parsing fails, display as raw text
        Err(_) => MessageFormatter::format_raw_message(text),
    }
}

/// Run one WebSocket client session
///
/// # Returns
///
/// * `Ok(())` - the user closed the input (Ctrl+C / Ctrl+D)
/// * `Err(ClientError)` - the connection could not be opened or was lost
pub async fn run_client_session(
    url: &str,
    name: Option<&str>,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url).await.map_err(|e| match e {
        e @ (tungstenite::Error::Url(_) | tungstenite::Error::HttpFormat(_)) => {
            ClientError::InvalidUrl(e.to_string())
        }
        e => ClientError::ConnectionError(e.to_string()),
    })?;

    tracing::info!("Connected to chat relay!");
    println!("\nType messages and press Enter to send. Press Ctrl+C to exit.\n");

    let (mut write, mut read) = ws_stream.split();

    // Spawn a task to handle incoming messages
    let name_for_read = name.map(str::to_string);
    let prompt = prompt_for(name);
    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            let formatted = match message {
                Ok(Message::Text(text)) => {
                    render_text_frame(text.as_str(), name_for_read.as_deref())
                }
                Ok(Message::Binary(data)) => MessageFormatter::format_binary_message(data.len()),
                Ok(Message::Close(_)) => {
                    tracing::info!("Relay closed the connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    break;
                }
                _ => continue,
            };
            print!("{}", formatted);
            redisplay_prompt(&prompt);
        }
    });

    let result = loop {
        tokio::select! {
            _ = &mut read_task => break Err(ClientError::ConnectionLost),
            line = input_rx.recv() => {
                let Some(line) = line else {
                    // The line reader stopped: the user wants to exit
                    break Ok(());
                };
                let Some(msg) = build_chat_message(&line, name) else {
                    continue;
                };

                let json = match serde_json::to_string(&msg) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!("Failed to serialize message: {}", e);
                        continue;
                    }
                };

                if let Err(e) = write.send(Message::Text(json.into())).await {
                    tracing::warn!("Failed to send message: {}", e);
                    break Err(ClientError::ConnectionLost);
                }
            }
        }
    };

    read_task.abort();
    if result.is_ok() {
        write.send(Message::Close(None)).await.ok();
    }

    result
}
