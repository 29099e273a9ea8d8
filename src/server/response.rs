//! Gemini response types.

/// The single status line this server ever emits: success, with a
/// `text/gemini` body.
pub const STATUS_LINE: &str = "20 text/gemini\r\n";

/// The body sent when no route matches and no error hook is registered.
pub const FALLBACK_BODY: &str = "The server (Laurali) could not find that route.";

/// Represents a Gemini response.
///
/// The protocol subset spoken here has exactly one response shape: the
/// status line followed immediately by the body, with no separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiResponse {
    /// The response body, written verbatim after the status line.
    pub body: String,
}

impl GeminiResponse {
    /// Create a new response with the given body.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// The fallback response for unroutable requests.
    pub fn not_found() -> Self {
        Self::new(FALLBACK_BODY)
    }

    /// Convert the response to bytes: status line, then body, as one
    /// buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(STATUS_LINE.len() + self.body.len());
        bytes.extend_from_slice(STATUS_LINE.as_bytes());
        bytes.extend_from_slice(self.body.as_bytes());
        bytes
    }
}

impl From<String> for GeminiResponse {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

impl From<&str> for GeminiResponse {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}
