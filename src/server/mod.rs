//! Gemini server implementation.
//!
//! This module provides the TLS listener, the route and hook registries,
//! and the per-connection exchange logic.

mod config;
mod error;
mod gemini_server;
mod handler;
mod hooks;
mod response;
mod tests;
mod tls;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use gemini_server::GeminiServer;
pub use handler::{ConnectionContext, HandlerFuture, HookFn, HookFuture, ListenFn, RouteFn};
pub use hooks::Hook;
pub use response::{FALLBACK_BODY, GeminiResponse, STATUS_LINE};
pub use tls::load_acceptor;
