//! Request-line normalization.

/// Capacity of the per-connection read buffer: the Gemini specification's
/// 1024-byte URL limit plus the trailing CRLF.
pub const MAX_REQUEST_LINE: usize = 1026;

/// Reduce one raw request line to the key used for route lookup.
///
/// The bytes are decoded lossily, then a trailing CRLF and a leading
/// `gemini://` scheme are stripped. A line ending in `/` or in the
/// configured hostname resolves to the root key `/`; otherwise the first
/// occurrence of the hostname is removed and the remainder is the key.
///
/// This is a best-effort key extraction, not a URL parser: query strings,
/// fragments, and percent-encoding pass through untouched and will only
/// match a route registered under the same literal key.
///
/// # Examples
///
/// ```
/// use laurali::normalize_request;
///
/// assert_eq!(normalize_request(b"gemini://example.com/docs\r\n", "example.com"), "/docs");
/// assert_eq!(normalize_request(b"gemini://example.com\r\n", "example.com"), "/");
/// assert_eq!(normalize_request(b"/\r\n", "example.com"), "/");
/// ```
pub fn normalize_request(raw: &[u8], hostname: &str) -> String {
    let text = String::from_utf8_lossy(raw);
    let line = text.strip_suffix("\r\n").unwrap_or(&text);
    let line = line.strip_prefix("gemini://").unwrap_or(line);

    if line.ends_with('/') || (!hostname.is_empty() && line.ends_with(hostname)) {
        "/".to_string()
    } else {
        line.replacen(hostname, "", 1)
    }
}
