//! TLS acceptor setup.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use rustls_pemfile::{certs, pkcs8_private_keys};
use tokio_rustls::TlsAcceptor;
use tokio_rustls::rustls;
use tokio_rustls::rustls::pki_types::{CertificateDer, PrivateKeyDer};

use crate::server::error::Error;

/// Load the certificate chain and private key from PEM files and build a
/// TLS acceptor for the listener.
pub fn load_acceptor(cert_path: &Path, key_path: &Path) -> Result<TlsAcceptor, Error> {
    let cert_reader = &mut BufReader::new(File::open(cert_path)?);
    let certs: Vec<CertificateDer<'static>> =
        certs(cert_reader).collect::<Result<Vec<_>, _>>()?;

    if certs.is_empty() {
        return Err(Error::NoCertificates(cert_path.display().to_string()));
    }

    let key_reader = &mut BufReader::new(File::open(key_path)?);
    let mut keys: Vec<PrivateKeyDer<'static>> = pkcs8_private_keys(key_reader)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(PrivateKeyDer::from)
        .collect();

    if keys.is_empty() {
        return Err(Error::NoPrivateKey(key_path.display().to_string()));
    }

    let key = keys.remove(0);

    let tls_config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)?;

    Ok(TlsAcceptor::from(Arc::new(tls_config)))
}
