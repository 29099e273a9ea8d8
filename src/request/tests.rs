//! Tests for request-line normalization.

#[cfg(test)]
mod tests {
    use crate::request::{MAX_REQUEST_LINE, normalize_request};

    #[test]
    fn test_root_request() {
        let key = normalize_request(b"gemini://example.com/\r\n", "example.com");
        assert_eq!(key, "/");
    }

    #[test]
    fn test_bare_hostname_resolves_to_root() {
        let key = normalize_request(b"gemini://example.com\r\n", "example.com");
        assert_eq!(key, "/");
    }

    #[test]
    fn test_plain_slash_resolves_to_root() {
        let key = normalize_request(b"/\r\n", "example.com");
        assert_eq!(key, "/");
    }

    #[test]
    fn test_path_request() {
        let key = normalize_request(b"gemini://example.com/missing\r\n", "example.com");
        assert_eq!(key, "/missing");
    }

    #[test]
    fn test_missing_crlf() {
        let key = normalize_request(b"gemini://example.com/about", "example.com");
        assert_eq!(key, "/about");
    }

    #[test]
    fn test_missing_scheme() {
        let key = normalize_request(b"example.com/about\r\n", "example.com");
        assert_eq!(key, "/about");
    }

    #[test]
    fn test_trailing_slash_resolves_to_root() {
        // Any line ending in a slash is an index request, however deep.
        let key = normalize_request(b"gemini://example.com/docs/\r\n", "example.com");
        assert_eq!(key, "/");
    }

    #[test]
    fn test_hostname_removed_only_once() {
        let key = normalize_request(b"gemini://example.com/example.com/x\r\n", "example.com");
        assert_eq!(key, "/example.com/x");
    }

    #[test]
    fn test_query_string_stays_in_key() {
        let key = normalize_request(b"gemini://example.com/search?q=1\r\n", "example.com");
        assert_eq!(key, "/search?q=1");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let key = normalize_request(b"gemini://example.com/\xff\r\n", "example.com");
        assert_eq!(key, "/\u{fffd}");
    }

    #[test]
    fn test_unrelated_hostname_is_left_alone() {
        let key = normalize_request(b"gemini://other.org/about\r\n", "example.com");
        assert_eq!(key, "other.org/about");
    }

    #[test]
    fn test_truncated_line_normalizes_idempotently() {
        let mut long = b"gemini://example.com/".to_vec();
        long.extend(std::iter::repeat(b'a').take(2 * MAX_REQUEST_LINE));

        // The connection handler only ever sees the first buffer's worth.
        let truncated = &long[..MAX_REQUEST_LINE];
        let key = normalize_request(truncated, "example.com");

        assert!(key.starts_with("/aaa"));
        assert_eq!(key.len(), MAX_REQUEST_LINE - "gemini://example.com".len());
        assert_eq!(normalize_request(truncated, "example.com"), key);
    }
}
