//! A minimal Gemini protocol server library.
//!
//! Gemini is a line-oriented request/response protocol carried over TLS:
//! the client opens a connection, sends a single CRLF-terminated URL, and
//! the server replies with a status line followed by the document body
//! before closing the connection. This library provides the
//! connection-handling and routing engine for that exchange.
//!
//! # Features
//!
//! - TLS listener driven by `tokio-rustls`, configured from PEM files
//! - Exact-match path routing with async handlers
//! - Lifecycle hooks around each exchange (pre-route, post-route, on-error)
//! - Request-line normalization against the configured hostname
//! - Key-pair provisioning through the system `openssl` binary
//!
//! # Examples
//!
//! ## A minimal server
//!
//! ```no_run
//! use laurali::{GeminiResponse, GeminiServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), laurali::ServerError> {
//!     let server = GeminiServer::new(ServerConfig {
//!         hostname: "localhost".to_string(),
//!         ..ServerConfig::default()
//!     });
//!
//!     server
//!         .add_route("/", |_ctx| async { Ok(GeminiResponse::new("Hello, world!")) })
//!         .await;
//!
//!     server.listen().await
//! }
//! ```
//!
//! ## Hooks
//!
//! ```no_run
//! use laurali::{GeminiResponse, GeminiServer, Hook, ServerConfig};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let server = GeminiServer::new(ServerConfig::default());
//!
//! server
//!     .add_hook(Hook::OnError, |_ctx| async {
//!         Ok(Some(GeminiResponse::new("No such page here.")))
//!     })
//!     .await;
//! # }
//! ```
//!
//! See the `demos` directory for a complete example program, including key
//! provisioning on first run.

// Export the key generation module
pub mod keygen;

// Export the request module
pub mod request;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use keygen::{KeyConfig, generate_key};
pub use request::{MAX_REQUEST_LINE, normalize_request};
pub use server::{
    ConnectionContext, Error as ServerError, GeminiResponse, GeminiServer, Hook, ServerConfig,
};
