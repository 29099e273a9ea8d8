//! TLS key-pair provisioning through the system `openssl` binary.
//!
//! The server consumes certificate and key files as opaque paths and never
//! generates or validates them itself. This module covers the collaborator
//! side: producing a self-signed pair suitable for a Gemini host.

use std::path::PathBuf;

use log::info;
use tokio::process::Command;

use crate::server::Error;

/// An OpenSSL key-pair request.
#[derive(Debug, Clone)]
pub struct KeyConfig {
    /// The certificate subject, e.g. `/CN=localhost`.
    pub subject: String,
    /// The elliptic curve used for the key.
    pub curve: String,
    /// The certificate lifetime in days.
    pub days: u32,
    /// Where the certificate is written.
    pub cert_out: PathBuf,
    /// Where the private key is written.
    pub key_out: PathBuf,
}

impl KeyConfig {
    /// Create a request for the given output paths with the default
    /// subject, curve, and lifetime.
    pub fn new(cert_out: impl Into<PathBuf>, key_out: impl Into<PathBuf>) -> Self {
        Self {
            subject: "/CN=localhost".to_string(),
            curve: "secp384r1".to_string(),
            days: 365,
            cert_out: cert_out.into(),
            key_out: key_out.into(),
        }
    }

    /// Set the certificate subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the elliptic curve.
    pub fn with_curve(mut self, curve: impl Into<String>) -> Self {
        self.curve = curve.into();
        self
    }

    /// Set the certificate lifetime in days.
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// The `openssl req` argument list for this request.
    fn to_args(&self) -> Vec<String> {
        vec![
            "req".to_string(),
            "-new".to_string(),
            "-subj".to_string(),
            self.subject.clone(),
            "-x509".to_string(),
            "-newkey".to_string(),
            "ec".to_string(),
            "-pkeyopt".to_string(),
            format!("ec_paramgen_curve:{curve}", curve = self.curve),
            "-days".to_string(),
            self.days.to_string(),
            "-nodes".to_string(),
            "-out".to_string(),
            self.cert_out.display().to_string(),
            "-keyout".to_string(),
            self.key_out.display().to_string(),
        ]
    }
}

/// Generate a self-signed certificate and private key pair.
///
/// Parent directories of both output paths are created first. Returns
/// [`Error::Keygen`] when `openssl` exits unsuccessfully.
pub async fn generate_key(config: &KeyConfig) -> Result<(), Error> {
    for out in [&config.cert_out, &config.key_out] {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    let status = Command::new("openssl").args(config.to_args()).status().await?;
    if !status.success() {
        return Err(Error::Keygen(status));
    }

    info!(
        "Generated key pair at {cert} and {key}",
        cert = config.cert_out.display(),
        key = config.key_out.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_openssl_invocation() {
        let config = KeyConfig::new("public.pem", "private.pem");
        let args = config.to_args();

        assert_eq!(
            args,
            vec![
                "req",
                "-new",
                "-subj",
                "/CN=localhost",
                "-x509",
                "-newkey",
                "ec",
                "-pkeyopt",
                "ec_paramgen_curve:secp384r1",
                "-days",
                "365",
                "-nodes",
                "-out",
                "public.pem",
                "-keyout",
                "private.pem",
            ]
        );
    }

    #[test]
    fn test_custom_subject_curve_and_days() {
        let config = KeyConfig::new("c.pem", "k.pem")
            .with_subject("/CN=example.com")
            .with_curve("prime256v1")
            .with_days(30);
        let args = config.to_args();

        assert!(args.contains(&"/CN=example.com".to_string()));
        assert!(args.contains(&"ec_paramgen_curve:prime256v1".to_string()));
        assert!(args.contains(&"30".to_string()));
    }
}
