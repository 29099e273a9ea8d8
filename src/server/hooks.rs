//! Lifecycle hooks.

/// A fixed point in connection processing at which a registered callback
/// runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Runs after the request line has been read, before route dispatch.
    /// Side effects only; any response it produces is discarded.
    PreRoute,
    /// Runs after the response has been written, before the connection is
    /// closed. Side effects only.
    PostRoute,
    /// Runs in place of a route handler when no route matches the request.
    /// Its body, if any, becomes the response.
    OnError,
}

impl Hook {
    /// Resolve a conventional callback name to its hook kind.
    ///
    /// Accepts both the `on_`-prefixed and bare forms, so registration
    /// code can be written against either naming style.
    ///
    /// ```
    /// use laurali::Hook;
    ///
    /// assert_eq!(Hook::from_name("on_pre_route"), Some(Hook::PreRoute));
    /// assert_eq!(Hook::from_name("error"), Some(Hook::OnError));
    /// assert_eq!(Hook::from_name("listen"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "on_pre_route" | "pre_route" => Some(Hook::PreRoute),
            "on_post_route" | "post_route" => Some(Hook::PostRoute),
            "on_error" | "error" => Some(Hook::OnError),
            _ => None,
        }
    }
}
