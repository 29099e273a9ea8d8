//! Route and hook handler types.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;

use crate::server::error::Error;
use crate::server::response::GeminiResponse;

/// Per-exchange transport metadata handed to route handlers and hooks.
///
/// The transport itself stays with the connection handler: handlers return
/// a body and the server performs the write.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionContext {
    /// The remote address of the client.
    pub peer_addr: SocketAddr,
    /// The local address the connection arrived on.
    pub local_addr: SocketAddr,
}

/// Type alias for a boxed future that resolves to a route response.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<GeminiResponse, Error>> + Send>>;

/// Type alias for a boxed future that resolves to an optional hook response.
pub type HookFuture = Pin<Box<dyn Future<Output = Result<Option<GeminiResponse>, Error>> + Send>>;

/// A registered route handler.
pub type RouteFn = Arc<dyn Fn(ConnectionContext) -> HandlerFuture + Send + Sync>;

/// A registered hook handler.
pub type HookFn = Arc<dyn Fn(ConnectionContext) -> HookFuture + Send + Sync>;

/// A registered startup callback, run once before the first accept.
pub type ListenFn = Arc<dyn Fn() + Send + Sync>;
