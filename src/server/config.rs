//! Server configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Gemini server configuration.
///
/// Immutable once the server is listening.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The hostname to bind to. The same literal is stripped from request
    /// lines during normalization, so it should match what clients put in
    /// their URLs.
    pub hostname: String,
    /// The port to listen on.
    pub port: u16,
    /// Path to the PEM certificate chain presented to clients.
    pub cert_path: PathBuf,
    /// Path to the PEM PKCS#8 private key.
    pub key_path: PathBuf,
    /// Serve each accepted connection on its own task instead of running
    /// the accept loop strictly sequentially.
    pub concurrent: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            hostname: "0.0.0.0".to_string(),
            port: 1965,
            cert_path: PathBuf::from(".laurali/public.pem"),
            key_path: PathBuf::from(".laurali/private.pem"),
            concurrent: false,
        }
    }
}
