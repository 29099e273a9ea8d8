//! Error types for the Gemini server.

use thiserror::Error;

/// Errors that can occur during server setup and operation.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error on the listener or a client transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The TLS configuration was rejected.
    #[error("TLS error: {0}")]
    Tls(#[from] tokio_rustls::rustls::Error),

    /// The certificate file contained no certificates.
    #[error("No certificates found in {0}")]
    NoCertificates(String),

    /// The key file contained no usable private key.
    #[error("No private key found in {0}")]
    NoPrivateKey(String),

    /// A route handler reported a failure.
    #[error("Route handler failed: {0}")]
    Handler(String),

    /// A lifecycle hook reported a failure.
    #[error("Hook failed: {0}")]
    Hook(String),

    /// The external key-generation command exited unsuccessfully.
    #[error("openssl exited with {0}")]
    Keygen(std::process::ExitStatus),
}
