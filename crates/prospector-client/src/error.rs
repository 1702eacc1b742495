use thiserror::Error;

/// Errors returned by the prospector API client.
#[derive(Debug, Error)]
pub enum ProspectorError {
    /// The session is not signed in, or the server answered 401.
    /// Raised before any network call when the auth gate trips.
    #[error("authentication required")]
    AuthenticationRequired,

    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered a non-2xx status other than 401/404.
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The server answered 404 for the given endpoint.
    #[error("endpoint not found: {0}")]
    NotFound(String),

    /// A proxied response did not carry the expected `{jsonrpc, id, result}`
    /// envelope.
    #[error("malformed RPC envelope from {context}")]
    Envelope { context: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ProspectorError {
    /// True when the failure was the fixed per-call timeout ceiling.
    /// Timeouts are never retried automatically; the caller decides.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
