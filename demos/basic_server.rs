//! A Gemini server example demonstrating routes, hooks, and key
//! provisioning.

use std::sync::atomic::{AtomicUsize, Ordering};

use laurali::{GeminiResponse, GeminiServer, Hook, KeyConfig, ServerConfig, generate_key};
use log::info;

/// Total visits across all routes.
static CLICKS: AtomicUsize = AtomicUsize::new(0);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let config = ServerConfig {
        hostname: "localhost".to_string(),
        ..ServerConfig::default()
    };

    // Provision a self-signed pair on first run.
    if !config.cert_path.exists() || !config.key_path.exists() {
        generate_key(&KeyConfig::new(&config.cert_path, &config.key_path)).await?;
    }

    let hostname = config.hostname.clone();
    let port = config.port;
    let server = GeminiServer::new(config);

    server
        .add_route("/", |_ctx| async { Ok(GeminiResponse::new("Hello, world!")) })
        .await;

    server
        .add_route("/peer", |ctx| async move {
            Ok(GeminiResponse::new(format!("You are {addr}.", addr = ctx.peer_addr)))
        })
        .await;

    server
        .add_route("/random", |_ctx| async {
            Ok(GeminiResponse::new(fastrand::u8(0..10).to_string()))
        })
        .await;

    server
        .add_route("/clicks", |_ctx| async {
            Ok(GeminiResponse::new(CLICKS.load(Ordering::Relaxed).to_string()))
        })
        .await;

    server
        .add_hook(Hook::PreRoute, |ctx| async move {
            let clicks = CLICKS.fetch_add(1, Ordering::Relaxed) + 1;
            info!(
                "Opened connection with {peer} and incremented clicks to {clicks}.",
                peer = ctx.peer_addr
            );
            Ok(None)
        })
        .await;

    server
        .add_hook(Hook::PostRoute, |_ctx| async {
            info!("Closed connection.");
            Ok(None)
        })
        .await;

    // Hook kinds can also be resolved from their conventional names.
    server
        .add_hook(Hook::from_name("on_error").unwrap(), |_ctx| async {
            Ok(Some(GeminiResponse::new("No such page here.")))
        })
        .await;

    server
        .on_listen(move || {
            info!("Listening on gemini://{hostname}:{port}.");
        })
        .await;

    server.listen().await?;

    Ok(())
}
