//! Terminal chat client for the lanchat relay.
//!
//! Reads lines from the terminal and sends them as chat messages.
//! Automatically reconnects on disconnection (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin lanchat-client -- --name alice
//! cargo run --bin lanchat-client -- -u ws://192.168.1.10:3001
//! ```

use clap::Parser;

use lanchat_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "lanchat-client")]
#[command(about = "Terminal chat client for the lanchat relay", long_about = None)]
struct Args {
    /// Relay WebSocket URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:3001")]
    url: String,

    /// Display name sent with each message
    #[arg(short = 'n', long)]
    name: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = lanchat_client::run_client(args.url, args.name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
