//! Gemini server implementation.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::RwLock;
use tokio_rustls::TlsAcceptor;

use crate::request::{MAX_REQUEST_LINE, normalize_request};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::{
    ConnectionContext, HandlerFuture, HookFn, HookFuture, ListenFn, RouteFn,
};
use crate::server::hooks::Hook;
use crate::server::response::GeminiResponse;
use crate::server::tls;

/// A Gemini server.
///
/// Routes and hooks are registered up front; once [`listen`] is running
/// the registries are only ever read.
///
/// [`listen`]: GeminiServer::listen
pub struct GeminiServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The registered routes, keyed by normalized path.
    pub routes: Arc<RwLock<HashMap<String, RouteFn>>>,
    /// The registered lifecycle hooks, at most one per kind.
    pub hooks: Arc<RwLock<HashMap<Hook, HookFn>>>,
    /// The startup callback, run once before the first accept.
    pub on_listen: Arc<RwLock<Option<ListenFn>>>,
}

impl GeminiServer {
    /// Create a new Gemini server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            routes: Arc::new(RwLock::new(HashMap::new())),
            hooks: Arc::new(RwLock::new(HashMap::new())),
            on_listen: Arc::new(RwLock::new(None)),
        }
    }

    /// Add a route to the server.
    ///
    /// The path is used verbatim as the lookup key, so callers supply it
    /// already normalized, typically `/segment`. Registering the same path
    /// again replaces the earlier handler.
    pub async fn add_route<F, Fut>(&self, path: impl Into<String>, handler: F)
    where
        F: Fn(ConnectionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<GeminiResponse, Error>> + Send + 'static,
    {
        let handler: RouteFn = Arc::new(move |ctx| -> HandlerFuture { Box::pin(handler(ctx)) });
        self.routes.write().await.insert(path.into(), handler);
    }

    /// Add a lifecycle hook to the server.
    ///
    /// At most one handler exists per kind; registering again replaces it.
    /// Only the [`Hook::OnError`] response is ever used, the other kinds
    /// run for their side effects.
    pub async fn add_hook<F, Fut>(&self, hook: Hook, handler: F)
    where
        F: Fn(ConnectionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<GeminiResponse>, Error>> + Send + 'static,
    {
        let handler: HookFn = Arc::new(move |ctx| -> HookFuture { Box::pin(handler(ctx)) });
        self.hooks.write().await.insert(hook, handler);
    }

    /// Set the callback run once after binding, before any connection is
    /// accepted.
    pub async fn on_listen<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.on_listen.write().await = Some(Arc::new(callback));
    }

    /// Log the registered route table.
    async fn display_server_info(&self) {
        let routes = self.routes.read().await;
        let mut paths: Vec<_> = routes.keys().collect();
        paths.sort();

        info!("Registered routes:");
        for path in paths {
            info!("  {path}");
        }
    }

    /// Start listening and responding to client connections.
    ///
    /// Loads the TLS credentials, binds the configured address, fires the
    /// startup callback, and then accepts connections until the process
    /// exits. A credential or bind failure is fatal; everything after that
    /// is logged and survived. With `concurrent` unset, each exchange is
    /// processed to completion before the next connection is accepted.
    pub async fn listen(&self) -> Result<(), Error> {
        self.display_server_info().await;

        let acceptor = tls::load_acceptor(&self.config.cert_path, &self.config.key_path)?;
        let listener =
            TcpListener::bind((self.config.hostname.as_str(), self.config.port)).await?;
        info!(
            "Server listening on gemini://{hostname}:{port}",
            hostname = self.config.hostname,
            port = self.config.port
        );

        if let Some(callback) = self.on_listen.read().await.as_ref() {
            callback();
        }

        loop {
            let (socket, peer_addr) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Error accepting connection: {e}");
                    continue;
                }
            };

            let local_addr = match socket.local_addr() {
                Ok(addr) => addr,
                Err(e) => {
                    error!("Error reading local address for {peer_addr}: {e}");
                    continue;
                }
            };

            let ctx = ConnectionContext {
                peer_addr,
                local_addr,
            };
            let acceptor = acceptor.clone();
            let hostname = self.config.hostname.clone();
            let routes = self.routes.clone();
            let hooks = self.hooks.clone();

            if self.config.concurrent {
                tokio::spawn(Self::serve(socket, acceptor, ctx, hostname, routes, hooks));
            } else {
                Self::serve(socket, acceptor, ctx, hostname, routes, hooks).await;
            }
        }
    }

    /// Run the TLS handshake and one exchange, then close the transport.
    ///
    /// A handler or hook failure surfaces here and is logged; the accept
    /// loop moves on to the next connection either way.
    async fn serve(
        socket: TcpStream,
        acceptor: TlsAcceptor,
        ctx: ConnectionContext,
        hostname: String,
        routes: Arc<RwLock<HashMap<String, RouteFn>>>,
        hooks: Arc<RwLock<HashMap<Hook, HookFn>>>,
    ) {
        let mut stream = match acceptor.accept(socket).await {
            Ok(stream) => stream,
            Err(e) => {
                warn!("TLS handshake failed for {peer}: {e}", peer = ctx.peer_addr);
                return;
            }
        };

        if let Err(e) = Self::handle_connection(&mut stream, ctx, &hostname, routes, hooks).await
        {
            error!(
                "Error handling connection from {peer}: {e}",
                peer = ctx.peer_addr
            );
        }

        let _ = stream.shutdown().await;
    }

    /// Handle a single exchange: read one request line, run the hooks,
    /// dispatch, and write the response.
    ///
    /// The protocol carries a single request per connection, so exactly one
    /// read is attempted; a line longer than the buffer is truncated to its
    /// capacity rather than rejected. A read failure skips hooks and
    /// dispatch entirely.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        ctx: ConnectionContext,
        hostname: &str,
        routes: Arc<RwLock<HashMap<String, RouteFn>>>,
        hooks: Arc<RwLock<HashMap<Hook, HookFn>>>,
    ) -> Result<(), Error> {
        let mut buf = [0u8; MAX_REQUEST_LINE];

        let n = socket.read(&mut buf).await?;
        if n == 0 {
            warn!("Could not read from client {peer}", peer = ctx.peer_addr);
            return Ok(());
        }

        let hooks = hooks.read().await;

        if let Some(pre_route) = hooks.get(&Hook::PreRoute) {
            pre_route(ctx).await?;
        }

        let key = normalize_request(&buf[..n], hostname);
        let routes = routes.read().await;
        let response = match routes.get(&key) {
            Some(handler) => handler(ctx).await?,
            None => match hooks.get(&Hook::OnError) {
                Some(on_error) => on_error(ctx).await?.unwrap_or_else(GeminiResponse::not_found),
                None => GeminiResponse::not_found(),
            },
        };

        socket.write_all(&response.to_bytes()).await?;

        if let Some(post_route) = hooks.get(&Hook::PostRoute) {
            post_route(ctx).await?;
        }

        Ok(())
    }
}
