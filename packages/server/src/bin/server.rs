//! LAN chat relay server.
//!
//! Broadcasts every chat message to all connected clients and announces joins and leaves.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin lanchat-server
//! cargo run --bin lanchat-server -- --host 127.0.0.1 --port 4000
//! PORT=4000 cargo run --bin lanchat-server
//! ```

use clap::Parser;

use lanchat_server::build_relay;
use lanchat_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "lanchat-server")]
#[command(about = "Single-room WebSocket chat relay for the local network", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3001)]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    let server = build_relay();
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
